use std::fmt;
use thiserror::Error;

#[derive(Error)]
pub enum StegoError {
    /// Represents a carrier image that has no pixels at all
    #[error("Image media is invalid")]
    InvalidImage,

    /// Represents image data the image codec cannot decode
    #[error("Image decoding error: {source}")]
    ImageDecodingError { source: image::ImageError },

    /// Represents an empty or whitespace-only message
    #[error("Message must not be empty")]
    EmptyMessage,

    /// Represents a message that, together with its delimiter, does not fit into the carrier
    #[error(
        "Capacity Error: the message needs {required_bytes} bytes but the image can only carry {available_bytes} bytes"
    )]
    InsufficientCapacity {
        required_bytes: usize,
        available_bytes: usize,
    },

    /// Represents a character that cannot be expressed as a single byte
    #[error("Character {character:?} at position {position} cannot be encoded in 8 bits")]
    UnsupportedCharacter { character: char, position: usize },

    /// Represents a codec configuration that cannot work, for example an empty delimiter
    #[error("Invalid codec options: {0}")]
    InvalidOptions(String),

    /// Represents an unsupported carrier media. For example, a movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a target file that would be written with a lossy codec and destroy the hidden bits
    #[error("Output must be a lossless PNG image, lossy formats destroy the hidden message")]
    LossyOutputFormat,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an unveil of no secret data. For example when an image did not contain any message
    #[error("No hidden message found")]
    NoSecretData,

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl fmt::Debug for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `main() -> Result` prints Debug, keep it readable
        write!(f, "{self}")
    }
}
