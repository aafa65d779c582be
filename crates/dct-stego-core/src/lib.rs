//! # DCT Stego Core API
//!
//! Hides a short text message in the frequency domain of one color channel of an image,
//! and finds it again from the image alone.
//!
//! The main entry point is [`Codec`] working on in-memory [`image::RgbImage`]s. On top of
//! that [`api::hide`] and [`api::unveil`] work with image files.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use dct_stego_core::{Codec, Unveiled};
//!
//! let carrier = image::RgbImage::from_pixel(64, 64, image::Rgb([128, 128, 128]));
//! let codec = Codec::default();
//!
//! let secret = codec.embed(&carrier, "HELLO").expect("Failed to hide message");
//! assert_eq!(codec.extract(&secret).unwrap(), Unveiled::Found("HELLO".to_string()));
//! ```
//!
//! ## Hide and unveil with files
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_pixel(64, 64, image::Rgb([90, 120, 150]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! dct_stego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = dct_stego_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-secret.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(unveiled.message(), Some("Hello, World!"));
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod message;
pub mod result;

pub use crate::codec::{Codec, Unveiled};
pub use crate::error::StegoError;
pub use crate::media::image::CapacityPlan;
pub use crate::media::{Channel, DctCodecOptions, Media, Persist};
pub use crate::message::{BitStream, Decoded, TextCodec};
pub use crate::result::Result;
