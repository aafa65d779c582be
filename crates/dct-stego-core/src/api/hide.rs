use std::path::{Path, PathBuf};

use crate::{DctCodecOptions, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: DctCodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: DctCodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the PNG with the hidden message goes.
    /// Without it, `embedded_<name>.png` is written next to the carrier image.
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Executes the hide process, returns the path of the written image
    pub fn execute(self) -> Result<PathBuf, StegoError> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let output = match self.output {
            Some(output) => output,
            None => default_output_for(&image).ok_or(StegoError::TargetNotSet)?,
        };

        crate::commands::hide(&image, &output, &message, self.options)?;

        Ok(output)
    }
}

/// `some/dir/photo.jpg` becomes `some/dir/embedded_photo.png`
pub fn default_output_for(image: &Path) -> Option<PathBuf> {
    let stem = image.file_stem()?.to_str()?;

    Some(image.with_file_name(format!("embedded_{stem}.png")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gray_image;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier-image.png");
        prepare_gray_image(64, 64, 128)
            .save(&carrier)
            .expect("Failed to write carrier image");

        let written = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert_eq!(written, temp_dir.path().join("image-with-secret.png"));
        assert!(written.exists());
    }

    #[test]
    fn should_derive_output_next_to_carrier() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("holiday.png");
        prepare_gray_image(32, 32, 100)
            .save(&carrier)
            .expect("Failed to write carrier image");

        let written = prepare()
            .with_message("hi")
            .with_image(&carrier)
            .execute()
            .expect("Failed to hide message in image");

        assert_eq!(written, temp_dir.path().join("embedded_holiday.png"));
        assert!(written.exists());
    }

    #[test]
    fn should_complain_about_missing_parts() {
        assert!(matches!(
            prepare().with_image("carrier.png").execute(),
            Err(StegoError::MissingMessage)
        ));
        assert!(matches!(
            prepare().with_message("hi").execute(),
            Err(StegoError::CarrierNotSet)
        ));
    }

    #[test]
    fn default_output_should_always_be_png() {
        assert_eq!(
            default_output_for(Path::new("some/dir/photo.jpg")),
            Some(PathBuf::from("some/dir/embedded_photo.png"))
        );
    }
}
