use std::path::PathBuf;

use clap::Args;
use dct_stego_core::DctCodecOptions;

use crate::CliResult;

/// Hides a text message in an image, the result is always a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file [default: embedded_<name>.png next to the input]
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden, printable ASCII
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: DctCodecOptions) -> CliResult<()> {
        let written = dct_stego_core::api::hide::prepare()
            .with_options(options)
            .with_image(&self.media)
            .use_output(self.write_to_file)
            .with_message(&self.message)
            .execute()?;

        println!("Message hidden in {}", written.display());
        Ok(())
    }
}
