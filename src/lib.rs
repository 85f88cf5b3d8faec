pub mod core;
pub mod detection;
pub mod quality;
pub mod report;
#[cfg(feature = "logging")]
mod settings;
