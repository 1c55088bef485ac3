//! # Base2048 - dense binary-to-text encoding.
//!
//! This crate packs arbitrary bytes into a string drawn from a 2048-character
//! Unicode alphabet, so that each character carries 11 bits of payload. That
//! is nearly twice as dense as Base64 when you are counting characters rather
//! than bytes, which is what matters when the text has to fit in a
//! character-limited message.
//!
//! It is not a compression scheme: the payload's entropy is unchanged, it is
//! just repacked into wider symbols. It is not a streaming codec either:
//! inputs and outputs are whole byte slices and whole strings.
//!
//! ## Usage Summary
//!
//! ```
//! use base2048::{decode, encode};
//!
//! let text = encode(b"hello world");
//! assert_eq!(text.chars().count(), 8);
//! assert_eq!(decode(&text).unwrap(), b"hello world");
//! ```
//!
//! The same operations are available as extension methods on anything that
//! is `AsRef<[u8]>` ([`EncodeBase2048`]) or `AsRef<str>` ([`DecodeBase2048`]),
//! and on a [`Codec`] for callers bringing their own [`Repertoire`].
//!
//! ## Pages
//!
//! The alphabet is split into two "pages" of different bit widths:
//!
//!   | width | size | contents                                      |
//!   |-------|------|-----------------------------------------------|
//!   |    11 | 2048 | letters from Latin through Ethiopic, plus 8-9 |
//!   |     3 |    8 | the digits 0-7                                |
//!
//! Input bits are read most-significant first and written 11 at a time from
//! the primary page. If bits are left over at the end, they are padded with
//! one bits: up to 3 bits (and written from the secondary page) when at most
//! 3 are left, otherwise up to 11. So only the final character of an encoding
//! can ever be a digit 0-7, and the output is never longer than
//! `ceil(8 * len / 11)` characters.
//!
//! ## Validation
//!
//! Decoding rejects characters outside both pages, secondary-page characters
//! anywhere but the end, and trailing bits that are not the all-ones padding
//! the encoder writes. The padding check is a heuristic: a corrupted final
//! character whose low bits still happen to be all ones decodes without
//! complaint. Catching that would need a checksum, which would change the
//! format, so it is left to callers that need it.

// Logging compiles away unless the `logging` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    };
}

mod decode;
mod encode;
pub mod error;
mod ranges;
mod repertoire;

pub use decode::DecodeBase2048;
pub use encode::{EncodeBase2048, EncodeChars};
pub use error::{DecodeError, RepertoireError};
pub use repertoire::{repertoire, Page, PageSpec, Repertoire, Symbol, MAX_BIT_WIDTH};

/// Payload bits carried by each primary-page character.
pub const BITS_PER_CHAR: u32 = 11;

pub const BITS_PER_BYTE: u32 = 8;

/// Encodes and decodes against one [`Repertoire`].
///
/// [`Codec::default`] uses the built-in repertoire, which is what the free
/// functions [`encode`] and [`decode`] use too.
#[derive(Clone, Copy, Debug)]
pub struct Codec<'r> {
    repertoire: &'r Repertoire,
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Codec::new(repertoire())
    }
}

impl<'r> Codec<'r> {
    pub fn new(repertoire: &'r Repertoire) -> Self {
        Codec { repertoire }
    }

    pub fn repertoire(&self) -> &'r Repertoire {
        self.repertoire
    }

    /// Lazily encodes `bytes`, one character at a time.
    pub fn encode_chars<'a>(&self, bytes: &'a [u8]) -> EncodeChars<'a>
    where
        'r: 'a,
    {
        EncodeChars::new(self.repertoire, bytes)
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        self.encode_to_string(bytes, &mut out);
        out
    }

    /// Appends the encoding of `bytes` to `out`.
    pub fn encode_to_string(&self, bytes: &[u8], out: &mut String) {
        encode::encode_to_string(self.repertoire, bytes, out)
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        self.decode_chars(text.chars())
    }

    /// Decodes a sequence of scalar values, however the caller came by them.
    pub fn decode_chars<I>(&self, chars: I) -> Result<Vec<u8>, DecodeError>
    where
        I: IntoIterator<Item = char>,
    {
        decode::decode_logged(self.repertoire, chars)
    }
}

/// Encodes `bytes` with the built-in repertoire. Never fails.
pub fn encode(bytes: &[u8]) -> String {
    Codec::default().encode(bytes)
}

/// Appends the encoding of `bytes` to `out`.
pub fn encode_to_string(bytes: &[u8], out: &mut String) {
    Codec::default().encode_to_string(bytes, out)
}

/// Lazily encodes `bytes` with the built-in repertoire.
pub fn encode_chars(bytes: &[u8]) -> EncodeChars<'_> {
    Codec::default().encode_chars(bytes)
}

/// Decodes `text` with the built-in repertoire.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Codec::default().decode(text)
}

/// Decodes a sequence of scalar values with the built-in repertoire.
pub fn decode_chars<I>(chars: I) -> Result<Vec<u8>, DecodeError>
where
    I: IntoIterator<Item = char>,
{
    Codec::default().decode_chars(chars)
}
