use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::media::image::CapacityPlan;
use crate::{Codec, DctCodecOptions, Media, Persist, StegoError, Unveiled};

/// hides `message` in the image at `carrier` and stores the result as PNG at `destination`
pub fn hide(
    carrier: &Path,
    destination: &Path,
    message: &str,
    options: DctCodecOptions,
) -> Result<(), StegoError> {
    let codec = Codec::new(options)?;
    let media = Media::from_file(carrier)?;

    media
        .hide_message(&codec, message)?
        .save_as(destination)?;
    info!("Secret image written to {destination:?}");

    Ok(())
}

pub fn unveil(secret_media: &Path, options: DctCodecOptions) -> Result<Unveiled, StegoError> {
    let codec = Codec::new(options)?;

    Media::from_file(secret_media)?.unveil_message(&codec)
}

/// unveils and writes the message as a text file, fails with `NoSecretData` when there is none
pub fn unveil_to_file(
    secret_media: &Path,
    destination_file: &Path,
    options: DctCodecOptions,
) -> Result<(), StegoError> {
    let Some(message) = unveil(secret_media, options)?.into_message() else {
        return Err(StegoError::NoSecretData);
    };

    let mut destination_file =
        File::create(destination_file).map_err(|source| StegoError::WriteError { source })?;
    destination_file
        .write_all(message.as_bytes())
        .map_err(|source| StegoError::WriteError { source })
}

pub fn capacity(carrier: &Path, options: DctCodecOptions) -> Result<CapacityPlan, StegoError> {
    let codec = Codec::new(options)?;
    let media = Media::from_file(carrier)?;

    Ok(codec.plan(media.image()))
}
