// Domain layer: the App Store models and the schema ports the codec relies on.

pub mod genre;
pub mod model;
pub mod platform;
pub mod ports;
pub mod software;
pub mod store;
