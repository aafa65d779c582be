use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

pub use image::RgbImage;
use log::{error, warn};

use crate::error::StegoError;
use crate::result::Result;
use crate::{Codec, Unveiled};

use super::Persist;

/// a carrier image for steganography, always 8 bit RGB
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(StegoError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => {
                let image = image::open(f).map_err(|e| {
                    warn!("Cannot decode image {f:?}: {e}");
                    match e {
                        image::ImageError::IoError(source) => StegoError::ReadError { source },
                        source => StegoError::ImageDecodingError { source },
                    }
                })?;
                Ok(Self::from_image(image.to_rgb8()))
            }
            _ => Err(StegoError::UnsupportedMedia),
        }
    }

    /// decodes whatever format the bytes are in, as far as supported
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|source| {
            warn!("Cannot decode image data: {source}");
            StegoError::ImageDecodingError { source }
        })?;
        Ok(Self::from_image(image.to_rgb8()))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// new media with `message` hidden, `self` stays as it is
    pub fn hide_message(&self, codec: &Codec, message: &str) -> Result<Self> {
        Ok(Self::from_image(codec.embed(&self.image, message)?))
    }

    pub fn unveil_message(&self, codec: &Codec) -> Result<Unveiled> {
        codec.extract(&self.image)
    }

    /// PNG encoded, any other format would requantize the carrier channel
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = std::io::Cursor::new(Vec::new());
        self.save_to_writer(&mut buf)?;
        Ok(buf.into_inner())
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if is_lossy_extension(file) {
            error!("Refusing to write {file:?}, lossy formats destroy the hidden message");
            return Err(StegoError::LossyOutputFormat);
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

pub(crate) fn is_lossy_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "jpg" | "jpeg" | "webp" | "avif"))
        .unwrap_or(false)
}
