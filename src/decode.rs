//! Text to bytes.
//!
//! Decoding walks the input one Unicode scalar value at a time, so callers
//! holding text in some other form (UTF-16 buffers, say) only need to supply
//! an iterator of `char`s.

use crate::error::DecodeError;
use crate::{repertoire, Repertoire, BITS_PER_BYTE};

pub(crate) fn decode_chars<I>(repertoire: &Repertoire, chars: I) -> Result<Vec<u8>, DecodeError>
where
    I: IntoIterator<Item = char>,
{
    let primary = repertoire.primary_width();
    let mut chars = chars.into_iter().enumerate().peekable();
    let mut out = Vec::with_capacity(repertoire.max_decoded_len(chars.size_hint().0));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    while let Some((position, character)) = chars.next() {
        let symbol = repertoire
            .lookup(character)
            .ok_or(DecodeError::UnrecognizedCharacter { character, position })?;
        if symbol.bit_width != primary && chars.peek().is_some() {
            return Err(DecodeError::MisplacedTerminator { character, position });
        }

        acc = (acc << symbol.bit_width) | symbol.value;
        bits += symbol.bit_width;
        while bits >= BITS_PER_BYTE {
            bits -= BITS_PER_BYTE;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    // Whatever is left is padding, and the encoder only pads with ones.
    if acc != (1 << bits) - 1 {
        return Err(DecodeError::PaddingMismatch { bits, found: acc });
    }
    Ok(out)
}

pub(crate) fn decode_logged<I>(repertoire: &Repertoire, chars: I) -> Result<Vec<u8>, DecodeError>
where
    I: IntoIterator<Item = char>,
{
    decode_chars(repertoire, chars).map_err(|err| {
        debug!("rejected base2048 input: {}", err);
        err
    })
}

/// Decoding for anything viewable as a string, in the built-in repertoire.
///
/// ```
/// use base2048::{DecodeBase2048, DecodeError};
///
/// assert_eq!("\u{125d}".decode_base2048(), Ok(vec![0xff]));
/// assert_eq!(
///     "E".decode_base2048(),
///     Err(DecodeError::PaddingMismatch { bits: 3, found: 0b110 })
/// );
/// ```
pub trait DecodeBase2048 {
    fn decode_base2048(&self) -> Result<Vec<u8>, DecodeError>;
}

impl<T> DecodeBase2048 for T
where
    T: AsRef<str> + ?Sized,
{
    fn decode_base2048(&self) -> Result<Vec<u8>, DecodeError> {
        decode_logged(repertoire(), self.as_ref().chars())
    }
}
