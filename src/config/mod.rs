//! JSON configuration for the binaries.

pub mod denoise;

pub use denoise::{load_config, DenoiseConfig, DenoiseToolConfig, OutputConfig};
