//! Pages and the lookup tables built from them.
//!
//! A [`Repertoire`] is the pair of tables every encode and decode consults:
//! the forward table from `(bit_width, value)` to a character, and the
//! reverse table from a character back to its [`Symbol`]. The built-in
//! repertoire is built once, on first use, and shared read-only by every
//! thread for the rest of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::RepertoireError;
use crate::{ranges, BITS_PER_BYTE, BITS_PER_CHAR};

/// Widest page the accumulators can hold alongside a partial byte.
pub const MAX_BIT_WIDTH: u32 = 16;

/// Compact description of one page: its width in bits, and the inclusive
/// `(first, last)` code point ranges that expand, in order, into its
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpec {
    pub bit_width: u32,
    pub ranges: &'static [(char, char)],
}

impl PageSpec {
    /// The 2048-character page used for every full 11-bit group.
    pub const PRIMARY: PageSpec = PageSpec {
        bit_width: BITS_PER_CHAR,
        ranges: ranges::PRIMARY,
    };

    /// The 8-character page used only for a final group of 1 to 3 bits.
    pub const TERMINATOR: PageSpec = PageSpec {
        bit_width: BITS_PER_CHAR - BITS_PER_BYTE,
        ranges: ranges::TERMINATOR,
    };

    /// The pages of the built-in repertoire, widest first.
    pub const DEFAULT: [PageSpec; 2] = [PageSpec::PRIMARY, PageSpec::TERMINATOR];

    fn expand(&self) -> Result<Vec<char>, RepertoireError> {
        let mut chars = Vec::with_capacity(1 << self.bit_width);
        for &(first, last) in self.ranges {
            if first > last {
                return Err(RepertoireError::InvertedRange {
                    bit_width: self.bit_width,
                    first,
                    last,
                });
            }
            // Iterating a char range skips the surrogate block.
            chars.extend(first..=last);
        }
        Ok(chars)
    }
}

/// What a character decodes to: a `bit_width`-bit integer `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub bit_width: u32,
    pub value: u32,
}

/// One expanded page: exactly `2^bit_width` distinct characters, where the
/// character at index `n` encodes `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    bit_width: u32,
    chars: Vec<char>,
}

impl Page {
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character encoding `value`, if `value` fits in this page.
    pub fn get(&self, value: u32) -> Option<char> {
        self.chars.get(value as usize).copied()
    }
}

/// Forward and reverse lookup tables for a list of pages.
///
/// The first page is the primary page; every full group of bits is written
/// with it. Narrower pages only ever supply the final character.
#[derive(Clone, Debug)]
pub struct Repertoire {
    pages: Vec<Page>,
    reverse: HashMap<char, Symbol>,
}

impl Repertoire {
    /// Expands `specs` into pages and builds both lookup tables.
    ///
    /// Fails if the pages are not listed strictly widest first, if any page
    /// does not expand to exactly `2^bit_width` characters, if any character
    /// would decode two ways, or if some final partial group could only be
    /// completed with a byte or more of padding.
    pub fn build(specs: &[PageSpec]) -> Result<Self, RepertoireError> {
        if specs.is_empty() {
            return Err(RepertoireError::EmptyRepertoire);
        }

        let mut pages: Vec<Page> = Vec::with_capacity(specs.len());
        let mut reverse = HashMap::new();

        for spec in specs {
            let bit_width = spec.bit_width;
            if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
                return Err(RepertoireError::UnsupportedWidth {
                    bit_width,
                    max: MAX_BIT_WIDTH,
                });
            }
            if let Some(previous) = pages.last() {
                if bit_width >= previous.bit_width {
                    return Err(RepertoireError::UnorderedPages {
                        previous_width: previous.bit_width,
                        bit_width,
                    });
                }
            }

            let chars = spec.expand()?;
            let expected = 1usize << bit_width;
            if chars.len() != expected {
                return Err(RepertoireError::WrongPageLength {
                    bit_width,
                    expected,
                    actual: chars.len(),
                });
            }

            for (value, &character) in chars.iter().enumerate() {
                let symbol = Symbol {
                    bit_width,
                    value: value as u32,
                };
                if let Some(existing) = reverse.insert(character, symbol) {
                    return Err(RepertoireError::DuplicateCharacter {
                        character,
                        first_width: existing.bit_width,
                        second_width: bit_width,
                    });
                }
            }

            trace!(
                "built {}-bit page of {} characters from {} ranges",
                bit_width,
                chars.len(),
                spec.ranges.len()
            );
            pages.push(Page { bit_width, chars });
        }

        let repertoire = Repertoire { pages, reverse };
        repertoire.check_padding()?;
        Ok(repertoire)
    }

    // Every remainder the encoder can be left with, (8 * n) mod W, must pad
    // to some page width with fewer than 8 bits, or the decoder would read
    // the padding back as a byte.
    fn check_padding(&self) -> Result<(), RepertoireError> {
        let primary = self.primary_width();
        for bytes in 1..primary {
            let remainder = (bytes * BITS_PER_BYTE) % primary;
            if remainder == 0 {
                continue;
            }
            let padded_width = self.padded_width(remainder).unwrap_or(primary);
            if padded_width - remainder >= BITS_PER_BYTE {
                return Err(RepertoireError::PaddingTooWide {
                    remainder,
                    padded_width,
                });
            }
        }
        Ok(())
    }

    /// Width of the primary page.
    pub fn primary_width(&self) -> u32 {
        self.pages[0].bit_width
    }

    /// All pages, widest first.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, bit_width: u32) -> Option<&Page> {
        self.pages.iter().find(|page| page.bit_width == bit_width)
    }

    /// Forward lookup.
    pub fn symbol(&self, bit_width: u32, value: u32) -> Option<char> {
        self.page(bit_width)?.get(value)
    }

    /// Reverse lookup.
    pub fn lookup(&self, character: char) -> Option<Symbol> {
        self.reverse.get(&character).copied()
    }

    /// The narrowest page width that can hold a final group of `bits` bits,
    /// or `None` if `bits` is zero or wider than the primary page.
    pub fn padded_width(&self, bits: u32) -> Option<u32> {
        if bits == 0 {
            return None;
        }
        self.pages
            .iter()
            .rev()
            .map(Page::bit_width)
            .find(|&width| width >= bits)
    }

    /// Exact number of characters `byte_len` bytes encode to.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        let width = self.primary_width() as usize;
        let bits = byte_len * BITS_PER_BYTE as usize;
        (bits + width - 1) / width
    }

    /// Upper bound on the number of bytes `char_len` characters decode to.
    pub fn max_decoded_len(&self, char_len: usize) -> usize {
        char_len * self.primary_width() as usize / BITS_PER_BYTE as usize
    }
}

/// The built-in two-page repertoire, built on first use.
pub fn repertoire() -> &'static Repertoire {
    static DEFAULT: OnceLock<Repertoire> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        Repertoire::build(&PageSpec::DEFAULT).expect("built-in pages form a valid repertoire")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_pages() {
        let rep = repertoire();
        assert_eq!(rep.primary_width(), 11);
        assert_eq!(rep.pages().len(), 2);
        assert_eq!(rep.page(11).map(Page::len), Some(2048));
        assert_eq!(rep.page(3).map(Page::len), Some(8));
        assert_eq!(rep.page(8), None);

        // First and last of each page.
        assert_eq!(rep.symbol(11, 0), Some('8'));
        assert_eq!(rep.symbol(11, 2047), Some('\u{125d}'));
        assert_eq!(rep.symbol(11, 2048), None);
        assert_eq!(rep.symbol(3, 0), Some('0'));
        assert_eq!(rep.symbol(3, 7), Some('7'));
        assert_eq!(rep.symbol(3, 8), None);
    }

    #[test]
    fn reverse_inverts_forward() {
        let rep = repertoire();
        for page in rep.pages() {
            for (value, &c) in page.chars().iter().enumerate() {
                let sym = rep.lookup(c).unwrap();
                assert_eq!(sym.bit_width, page.bit_width());
                assert_eq!(sym.value as usize, value);
            }
        }
        assert_eq!(rep.lookup('8'), Some(Symbol { bit_width: 11, value: 0 }));
        assert_eq!(rep.lookup('7'), Some(Symbol { bit_width: 3, value: 7 }));
        for c in [' ', '=', '\0', '\u{ffff}', '\u{4e00}', '\u{1f600}'] {
            assert_eq!(rep.lookup(c), None, "{:?} should not be in any page", c);
        }
    }

    #[test]
    fn primary_page_is_in_code_point_order() {
        // Ranges are listed in ascending order, so the expanded page is too.
        let chars = repertoire().page(11).unwrap().chars();
        for pair in chars.windows(2) {
            assert!(pair[0] < pair[1], "mis-ordered pair: {:?} >= {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn padded_widths() {
        let rep = repertoire();
        assert_eq!(rep.padded_width(0), None);
        for bits in 1..=3 {
            assert_eq!(rep.padded_width(bits), Some(3));
        }
        for bits in 4..=11 {
            assert_eq!(rep.padded_width(bits), Some(11));
        }
        assert_eq!(rep.padded_width(12), None);
    }

    #[test]
    fn lengths() {
        let rep = repertoire();
        assert_eq!(rep.encoded_len(0), 0);
        assert_eq!(rep.encoded_len(1), 1);
        assert_eq!(rep.encoded_len(2), 2);
        assert_eq!(rep.encoded_len(3), 3);
        assert_eq!(rep.encoded_len(11), 8);
        assert_eq!(rep.encoded_len(12), 9);
        assert_eq!(rep.max_decoded_len(0), 0);
        assert_eq!(rep.max_decoded_len(1), 1);
        assert_eq!(rep.max_decoded_len(8), 11);
    }

    // 2048 consecutive CJK ideographs.
    const CJK_2048: &[(char, char)] = &[('\u{4e00}', '\u{55ff}')];

    #[test]
    fn custom_repertoire() {
        let hex = Repertoire::build(&[PageSpec {
            bit_width: 4,
            ranges: &[('a', 'p')],
        }])
        .unwrap();
        assert_eq!(hex.primary_width(), 4);
        assert_eq!(hex.symbol(4, 15), Some('p'));
        assert_eq!(hex.encoded_len(3), 6);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Repertoire::build(&[]).unwrap_err(),
            RepertoireError::EmptyRepertoire
        );
        assert_eq!(
            Repertoire::build(&[PageSpec { bit_width: 0, ranges: &[] }]).unwrap_err(),
            RepertoireError::UnsupportedWidth { bit_width: 0, max: MAX_BIT_WIDTH }
        );
        assert_eq!(
            Repertoire::build(&[PageSpec { bit_width: 17, ranges: &[] }]).unwrap_err(),
            RepertoireError::UnsupportedWidth { bit_width: 17, max: MAX_BIT_WIDTH }
        );
        assert_eq!(
            Repertoire::build(&[PageSpec::TERMINATOR, PageSpec::PRIMARY]).unwrap_err(),
            RepertoireError::UnorderedPages { previous_width: 3, bit_width: 11 }
        );
        assert_eq!(
            Repertoire::build(&[PageSpec { bit_width: 2, ranges: &[('z', 'a')] }]).unwrap_err(),
            RepertoireError::InvertedRange { bit_width: 2, first: 'z', last: 'a' }
        );
        assert_eq!(
            Repertoire::build(&[PageSpec { bit_width: 2, ranges: &[('a', 'c')] }]).unwrap_err(),
            RepertoireError::WrongPageLength { bit_width: 2, expected: 4, actual: 3 }
        );
    }

    #[test]
    fn duplicate_characters() {
        // Across pages.
        let err = Repertoire::build(&[
            PageSpec { bit_width: 2, ranges: &[('a', 'd')] },
            PageSpec { bit_width: 1, ranges: &[('d', 'e')] },
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RepertoireError::DuplicateCharacter { character: 'd', first_width: 2, second_width: 1 }
        );

        // Within a page.
        let err = Repertoire::build(&[PageSpec {
            bit_width: 2,
            ranges: &[('a', 'b'), ('b', 'c')],
        }])
        .unwrap_err();
        assert_eq!(
            err,
            RepertoireError::DuplicateCharacter { character: 'b', first_width: 2, second_width: 2 }
        );

        // The built-in terminator digits clash with the primary page's 8 and 9
        // if it is widened to cover them.
        let err = Repertoire::build(&[
            PageSpec::PRIMARY,
            PageSpec { bit_width: 4, ranges: &[('0', '9'), ('a', 'f')] },
        ])
        .unwrap_err();
        assert!(matches!(err, RepertoireError::DuplicateCharacter { character: '8', .. }));
    }

    #[test]
    fn primary_page_alone_needs_a_terminator() {
        // Three bytes leave 2 bits over, which would need 9 bits of padding.
        let err = Repertoire::build(&[PageSpec { bit_width: 11, ranges: CJK_2048 }]).unwrap_err();
        assert_eq!(err, RepertoireError::PaddingTooWide { remainder: 2, padded_width: 11 });

        let rep = Repertoire::build(&[
            PageSpec { bit_width: 11, ranges: CJK_2048 },
            PageSpec::TERMINATOR,
        ])
        .unwrap();
        assert_eq!(rep.symbol(11, 0), Some('\u{4e00}'));
    }
}
