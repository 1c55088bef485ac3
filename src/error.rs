//! Error types for base2048.
//!
//! Encoding never fails, so there are only two kinds of error: a string that
//! is not a valid encoding, and a set of pages that cannot form a repertoire.

use thiserror::Error;

/// Why a string is not a valid encoding.
///
/// Positions count Unicode scalar values from the start of the input, not
/// bytes or UTF-16 code units. Decoding is all-or-nothing: when any of these
/// is returned, no output was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The character belongs to no page of the repertoire.
    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    /// A character from a narrower page is followed by more input. Only the
    /// final character of an encoding may come from a narrower page, so this
    /// usually means truncated or concatenated encodings.
    #[error("terminator character {character:?} at position {position} is not the last character")]
    MisplacedTerminator { character: char, position: usize },

    /// The bits left over after the last whole byte are not all ones.
    #[error("padding mismatch: {bits} trailing bits were {found:#b}, expected all ones")]
    PaddingMismatch { bits: u32, found: u32 },
}

/// Why a list of [`PageSpec`](crate::PageSpec)s cannot be built into a
/// [`Repertoire`](crate::Repertoire).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepertoireError {
    /// No pages were given.
    #[error("repertoire has no pages")]
    EmptyRepertoire,

    /// A page width of zero, or wider than the codec can accumulate.
    #[error("page width {bit_width} is outside 1..={max}")]
    UnsupportedWidth { bit_width: u32, max: u32 },

    /// Pages must be listed strictly from widest to narrowest.
    #[error("page of width {bit_width} is listed after page of width {previous_width}")]
    UnorderedPages { previous_width: u32, bit_width: u32 },

    /// A `(first, last)` pair with `first > last`.
    #[error("page of width {bit_width} has inverted range {first:?}..={last:?}")]
    InvertedRange { bit_width: u32, first: char, last: char },

    /// A page did not expand to exactly `2^bit_width` characters.
    #[error("page of width {bit_width} expands to {actual} characters, expected {expected}")]
    WrongPageLength {
        bit_width: u32,
        expected: usize,
        actual: usize,
    },

    /// A character appears more than once, in the same page or in two pages.
    #[error("character {character:?} appears in pages of width {first_width} and {second_width}")]
    DuplicateCharacter {
        character: char,
        first_width: u32,
        second_width: u32,
    },

    /// A final partial group of `remainder` bits would have to be padded with
    /// a whole byte or more to reach a page width, so decoding could not tell
    /// the padding from data.
    #[error("a final group of {remainder} bits pads to width {padded_width}, which is a byte or more of padding")]
    PaddingTooWide { remainder: u32, padded_width: u32 },
}
