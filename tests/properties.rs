//! Randomized checks of the codec's round-trip and validation properties.

use arbitrary::{Arbitrary, Unstructured};
use base2048::{decode, encode, repertoire, DecodeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x2048)
}

/// Draws a value from fresh random bytes.
fn draw<T: for<'a> Arbitrary<'a>>(rng: &mut StdRng) -> T {
    let mut raw = vec![0u8; rng.gen_range(0..1024)];
    rng.fill(&mut raw[..]);
    T::arbitrary(&mut Unstructured::new(&raw)).expect("arbitrary fills in defaults for short input")
}

#[derive(Arbitrary, Debug)]
struct Injection {
    payload: Vec<u8>,
    at: usize,
    digit: u8,
}

#[derive(Arbitrary, Debug)]
struct Replacement {
    payload: Vec<u8>,
    at: usize,
    character: char,
}

#[test]
fn round_trip() {
    let mut rng = rng();
    for _ in 0..CASES {
        let payload: Vec<u8> = draw(&mut rng);
        let enc = encode(&payload);
        assert_eq!(decode(&enc), Ok(payload));
    }
}

#[test]
fn round_trip_every_length() {
    let mut rng = rng();
    for len in 0..=300 {
        let mut payload = vec![0u8; len];
        rng.fill(&mut payload[..]);
        assert_eq!(decode(&encode(&payload)), Ok(payload));
    }
}

#[test]
fn length_bound() {
    let mut rng = rng();
    for _ in 0..CASES {
        let payload: Vec<u8> = draw(&mut rng);
        let chars = encode(&payload).chars().count();
        assert!(chars <= (8 * payload.len() + 10) / 11 + 1);
        assert_eq!(chars, repertoire().encoded_len(payload.len()));
    }
}

#[test]
fn only_the_last_character_can_be_a_terminator() {
    let mut rng = rng();
    for _ in 0..CASES {
        let payload: Vec<u8> = draw(&mut rng);
        let enc: Vec<char> = encode(&payload).chars().collect();
        for (i, &c) in enc.iter().enumerate() {
            let width = repertoire().lookup(c).unwrap().bit_width;
            if i + 1 < enc.len() {
                assert_eq!(width, 11);
            }
        }
    }
}

#[test]
fn injected_terminator_is_misplaced() {
    let mut rng = rng();
    for _ in 0..CASES {
        let case: Injection = draw(&mut rng);
        let mut chars: Vec<char> = encode(&case.payload).chars().collect();
        if chars.is_empty() {
            continue;
        }
        let at = case.at % chars.len();
        let digit = char::from(b'0' + case.digit % 8);
        chars.insert(at, digit);
        let text: String = chars.into_iter().collect();
        assert_eq!(
            decode(&text),
            Err(DecodeError::MisplacedTerminator { character: digit, position: at }),
            "{:?}",
            case
        );
    }
}

#[test]
fn foreign_character_is_unrecognized() {
    let mut rng = rng();
    for _ in 0..CASES {
        let case: Replacement = draw(&mut rng);
        if repertoire().lookup(case.character).is_some() {
            continue;
        }
        let mut chars: Vec<char> = encode(&case.payload).chars().collect();
        // Inserting before the final character keeps any terminator last.
        let at = case.at % chars.len().max(1);
        chars.insert(at, case.character);
        let text: String = chars.into_iter().collect();
        assert_eq!(
            decode(&text),
            Err(DecodeError::UnrecognizedCharacter { character: case.character, position: at }),
            "{:?}",
            case
        );
    }
}

#[test]
fn corrupted_padding_is_rejected() {
    let rep = repertoire();
    let mut rng = rng();
    for _ in 0..CASES {
        let payload: Vec<u8> = draw(&mut rng);
        let mut chars: Vec<char> = encode(&payload).chars().collect();
        let last = match chars.last() {
            Some(&c) => rep.lookup(c).unwrap(),
            None => continue,
        };
        let data_bits = (payload.len() as u32 * 8) % 11;
        if data_bits == 0 {
            // The last group was full; there is no padding to corrupt.
            continue;
        }
        let width = if data_bits <= 3 { 3 } else { 11 };
        assert_eq!(last.bit_width, width);
        let pad = width - data_bits;
        // Clear each padding bit in turn.
        for bit in 0..pad {
            let value = last.value & !(1 << bit);
            let corrupt = rep.symbol(last.bit_width, value).unwrap();
            *chars.last_mut().unwrap() = corrupt;
            let text: String = chars.iter().collect();
            assert!(
                matches!(decode(&text), Err(DecodeError::PaddingMismatch { .. })),
                "{:?} with padding bit {} cleared",
                payload,
                bit
            );
        }
    }
}

#[test]
fn concurrent_use() {
    let handles: Vec<_> = (0..8u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let payload: Vec<u8> = (0..=255u8).map(|b| b ^ seed).collect();
                assert_eq!(decode(&encode(&payload)), Ok(payload));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
