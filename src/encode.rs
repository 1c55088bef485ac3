//! Bytes to text.

use std::iter::FusedIterator;
use std::slice;

use crate::{repertoire, Repertoire, BITS_PER_BYTE};

/// Iterator over the characters encoding a byte slice.
///
/// Bits are taken most-significant first and emitted a primary-page group
/// at a time. A final partial group is padded with one bits up to the
/// narrowest page wide enough to hold it, and written with that page.
#[derive(Clone, Debug)]
pub struct EncodeChars<'a> {
    repertoire: &'a Repertoire,
    bytes: slice::Iter<'a, u8>,
    acc: u32,
    bits: u32,
}

impl<'a> EncodeChars<'a> {
    pub(crate) fn new(repertoire: &'a Repertoire, bytes: &'a [u8]) -> Self {
        EncodeChars {
            repertoire,
            bytes: bytes.iter(),
            acc: 0,
            bits: 0,
        }
    }
}

impl<'a> Iterator for EncodeChars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let width = self.repertoire.primary_width();
        loop {
            if self.bits >= width {
                self.bits -= width;
                let value = self.acc >> self.bits;
                self.acc &= (1 << self.bits) - 1;
                return self.repertoire.symbol(width, value);
            }
            match self.bytes.next() {
                Some(&byte) => {
                    self.acc = (self.acc << BITS_PER_BYTE) | u32::from(byte);
                    self.bits += BITS_PER_BYTE;
                }
                None => {
                    if self.bits == 0 {
                        return None;
                    }
                    let padded = self.repertoire.padded_width(self.bits)?;
                    let pad = padded - self.bits;
                    let value = (self.acc << pad) | ((1 << pad) - 1);
                    self.acc = 0;
                    self.bits = 0;
                    return self.repertoire.symbol(padded, value);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let width = self.repertoire.primary_width() as usize;
        let bits = self.bits as usize + self.bytes.len() * BITS_PER_BYTE as usize;
        let n = (bits + width - 1) / width;
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for EncodeChars<'a> {}

impl<'a> FusedIterator for EncodeChars<'a> {}

pub(crate) fn encode_to_string(repertoire: &Repertoire, bytes: &[u8], out: &mut String) {
    let chars = EncodeChars::new(repertoire, bytes);
    out.reserve(chars.len());
    out.extend(chars);
}

/// Encoding for anything viewable as bytes, in the built-in repertoire.
///
/// ```
/// use base2048::EncodeBase2048;
///
/// assert_eq!([0xffu8].encode_base2048(), "\u{125d}");
/// assert_eq!(b"".encode_base2048(), "");
/// ```
pub trait EncodeBase2048 {
    fn encode_base2048(&self) -> String;
}

impl<T> EncodeBase2048 for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn encode_base2048(&self) -> String {
        let mut out = String::new();
        encode_to_string(repertoire(), self.as_ref(), &mut out);
        out
    }
}
