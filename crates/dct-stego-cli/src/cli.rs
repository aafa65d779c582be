use clap::{Parser, Subcommand};
use dct_stego_core::DctCodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: minimum magnitude of a coefficient carrying a bit
    #[arg(long = "x-magnitude-step", global = true, default_value_t = dct_stego_core::media::codec_options::DEFAULT_MAGNITUDE_STEP)]
    pub magnitude_step: f64,

    /// Experimental: text that marks the end of a hidden message
    #[arg(long = "x-delimiter", global = true, default_value = dct_stego_core::media::codec_options::DEFAULT_DELIMITER)]
    pub delimiter: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> DctCodecOptions {
        DctCodecOptions::default()
            .with_magnitude_step(self.magnitude_step)
            .with_delimiter(self.delimiter.as_str())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
