use std::path::PathBuf;

use clap::Args;
use dct_stego_core::{DctCodecOptions, StegoError, Unveiled};
use log::warn;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: DctCodecOptions) -> CliResult<()> {
        let mut api = dct_stego_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&self.media);
        if let Some(output_file) = &self.output_file {
            api = api.into_output_file(output_file);
        }

        match api.execute()? {
            Unveiled::Found(message) => {
                if self.output_file.is_none() {
                    println!("{message}");
                }
                Ok(())
            }
            Unveiled::NotFound { best_effort } => {
                if let Some(text) = best_effort {
                    warn!("No delimiter found, readable prefix was {text:?}");
                    eprintln!("{}", unconfirmed_notice(&text));
                }
                Err(StegoError::NoSecretData)
            }
        }
    }
}

/// the readable prefix is shown, but it is not a confirmed message
fn unconfirmed_notice(text: &str) -> String {
    format!("No delimiter found. Unconfirmed readable text: {text:?}")
}
