//! Text framing: a message plus a fixed delimiter, turned into a stream of bits.
//!
//! Each character becomes one byte, most significant bit first. There is no length
//! header, the unveil side reads byte after byte until the delimiter shows up.

use bitstream_io::{BigEndian, BitRead, BitReader};
use std::fmt;
use std::io::Cursor;

use crate::error::StegoError;
use crate::result::Result;

/// ordered sequence of message bits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// packs the bits into bytes, a trailing group of less than 8 bits is dropped
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|group| group.iter().fold(0_u8, |byte, &bit| (byte << 1) | bit as u8))
            .collect()
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// outcome of decoding a complete bit stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// the delimiter was found, this is the text before it
    Message(String),
    /// no delimiter, this is the printable text read so far (maybe empty)
    NoDelimiter(String),
}

/// state of an incremental decode after one more byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStatus {
    Found(String),
    Pending,
    /// a non-printable byte was seen, no delimiter can follow anymore
    Stopped,
}

pub(crate) fn is_printable(byte: u8) -> bool {
    (32..=126).contains(&byte)
}

/// Converts message text to bits and back, framed by a delimiter
#[derive(Debug, Clone)]
pub struct TextCodec {
    delimiter: String,
}

impl TextCodec {
    pub fn new<S: Into<String>>(delimiter: S) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Appends the delimiter and emits 8 bits per character.
    ///
    /// Characters above U+00FF do not fit into a byte and are rejected.
    pub fn encode(&self, text: &str) -> Result<BitStream> {
        let mut bytes = Vec::with_capacity(text.len() + self.delimiter.len());
        for (position, character) in text.chars().chain(self.delimiter.chars()).enumerate() {
            let byte = u8::try_from(u32::from(character))
                .map_err(|_| StegoError::UnsupportedCharacter {
                    character,
                    position,
                })?;
            bytes.push(byte);
        }

        let bit_count = bytes.len() * 8;
        let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);
        let mut bits = BitStream {
            bits: Vec::with_capacity(bit_count),
        };
        for _ in 0..bit_count {
            bits.push(reader.read_bit()?);
        }

        Ok(bits)
    }

    /// Decodes a complete bit stream, stopping at the first non-printable byte.
    pub fn decode(&self, bits: &BitStream) -> Decoded {
        let mut decoder = self.decoder();
        for byte in bits.to_bytes() {
            match decoder.push(byte) {
                DecodeStatus::Found(message) => return Decoded::Message(message),
                DecodeStatus::Stopped => break,
                DecodeStatus::Pending => {}
            }
        }

        Decoded::NoDelimiter(decoder.into_text())
    }

    pub fn decoder(&self) -> TextDecoder<'_> {
        TextDecoder {
            delimiter: &self.delimiter,
            text: String::new(),
            stopped: false,
        }
    }
}

/// Byte-at-a-time decoder, used while bits are still being read from an image
#[derive(Debug)]
pub struct TextDecoder<'d> {
    delimiter: &'d str,
    text: String,
    stopped: bool,
}

impl TextDecoder<'_> {
    pub fn push(&mut self, byte: u8) -> DecodeStatus {
        if self.stopped {
            return DecodeStatus::Stopped;
        }
        if !is_printable(byte) {
            self.stopped = true;
            return DecodeStatus::Stopped;
        }

        self.text.push(char::from(byte));
        // checked after every byte, so the first occurrence is always a suffix
        if self.text.ends_with(self.delimiter) {
            let end = self.text.len() - self.delimiter.len();
            return DecodeStatus::Found(self.text[..end].to_string());
        }

        DecodeStatus::Pending
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// printable text accumulated so far
    pub fn into_text(self) -> String {
        self.text
    }
}
