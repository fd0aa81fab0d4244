pub mod cli;

use crate::core::SnapshotFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "apple-model"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Inspect and convert App Store software snapshots")
)]
pub struct CliConfig {
    /// Snapshot file to load
    #[cfg_attr(feature = "cli", arg(long))]
    pub input: String,

    /// Input format; detected from the file extension when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub format: Option<String>,

    /// Re-encode the snapshot to stdout in this format
    #[cfg_attr(feature = "cli", arg(long))]
    pub convert_to: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn input_format(&self) -> Result<SnapshotFormat> {
        match &self.format {
            Some(format) => format.parse(),
            None => SnapshotFormat::from_path(&self.input),
        }
    }

    pub fn output_format(&self) -> Result<Option<SnapshotFormat>> {
        self.convert_to.as_deref().map(|s| s.parse()).transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        self.input_format()?;
        self.output_format()?;
        Ok(())
    }
}
