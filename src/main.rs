use apple_model::utils::{logger, validation::Validate};
use apple_model::{CliConfig, LocalSnapshots, Model, ModelError, Platform, Software};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting apple-model CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), ModelError> {
    config.validate()?;

    let format = config.input_format()?;
    let snapshots = LocalSnapshots::new(".");
    let software: Software = snapshots.load(&config.input, format)?;
    tracing::info!("📁 Loaded {} snapshot from {}", format, config.input);

    match config.output_format()? {
        Some(target) => {
            let payload = apple_model::serialize(&software, target)?;
            println!("{}", payload);
        }
        None => print_summary(&software)?,
    }

    Ok(())
}

fn print_summary(software: &Software) -> Result<(), ModelError> {
    println!("Name:      {}", software.track_name().unwrap_or("-"));
    println!("Artist:    {}", software.artist_name().unwrap_or("-"));
    if let Some(track_id) = software.track_id() {
        println!("Track id:  {}", track_id);
    }

    match software.platform() {
        Some(Platform::Ios) => {
            println!("Platform:  ios");
            match software.classify_ios_type() {
                Ok(ios_type) => println!("iOS type:  {}", ios_type),
                Err(e) => {
                    tracing::warn!("iOS type unavailable: {}", e);
                    println!("iOS type:  undefined");
                }
            }
        }
        Some(platform) => println!("Platform:  {}", platform),
        None => println!("Platform:  unset"),
    }

    println!(
        "Rating:    {:.1} ({} ratings), current version {:.1} ({} ratings)",
        software.average_user_rating(),
        software.user_rating_count(),
        software.average_user_rating_current(),
        software.user_rating_count_current()
    );

    match software.store_url() {
        Ok(Some(url)) => println!("Store URL: {}", url),
        Ok(None) => {}
        Err(e) => tracing::warn!("Store URL unavailable: {}", e),
    }

    Ok(())
}
