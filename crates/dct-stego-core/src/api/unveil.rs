use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{DctCodecOptions, StegoError, Unveiled};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: DctCodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: DctCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// A found message is additionally written to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Unveiled, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let unveiled = crate::commands::unveil(&secret_media, self.options)?;

        if let (Some(output_file), Some(message)) = (self.output_file, unveiled.message()) {
            let mut target_file =
                File::create(&output_file).map_err(|source| StegoError::WriteError { source })?;
            target_file
                .write_all(message.as_bytes())
                .map_err(|source| StegoError::WriteError { source })?;
            info!("Message written to {output_file:?}");
        }

        Ok(unveiled)
    }
}
