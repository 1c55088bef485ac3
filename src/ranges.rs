// -*- mode: rust; bidi-display-reordering: nil -*-

// The fixed alphabet, as ordered `(first, last)` pairs of code points. Each
// list expands, pair by pair and in order, into a page whose n-th character
// stands for the integer n. Changing anything here changes the wire format.

// Primary page, 11 bits per character: 2048 letters (and the digits 8 and 9)
// taken from the alphabetic blocks U+0038-U+125D, skipping combining marks
// and punctuation.
pub(crate) const PRIMARY: &[(char, char)] = &[
    // 278 Latin
    ('8', '9'), ('A', 'Z'), ('a', 'z'), ('\u{00c6}', '\u{00c6}'),
    ('\u{00d0}', '\u{00d0}'), ('\u{00d8}', '\u{00d8}'), ('\u{00de}', '\u{00df}'),
    ('\u{00e6}', '\u{00e6}'), ('\u{00f0}', '\u{00f0}'), ('\u{00f8}', '\u{00f8}'),
    ('\u{00fe}', '\u{00fe}'), ('\u{0110}', '\u{0111}'), ('\u{0126}', '\u{0127}'),
    ('\u{0131}', '\u{0131}'), ('\u{0138}', '\u{0138}'), ('\u{0141}', '\u{0142}'),
    ('\u{014a}', '\u{014b}'), ('\u{0152}', '\u{0153}'), ('\u{0166}', '\u{0167}'),
    ('\u{0180}', '\u{019f}'), ('\u{01a2}', '\u{01ae}'), ('\u{01b1}', '\u{01c3}'),
    ('\u{01dd}', '\u{01dd}'), ('\u{01e4}', '\u{01e5}'), ('\u{01f6}', '\u{01f7}'),
    ('\u{021c}', '\u{021d}'), ('\u{0220}', '\u{0225}'), ('\u{0234}', '\u{02af}'),
    // 94 Greek
    ('\u{0370}', '\u{0373}'), ('\u{0376}', '\u{0377}'), ('\u{037b}', '\u{037d}'),
    ('\u{037f}', '\u{037f}'), ('\u{0391}', '\u{03a1}'), ('\u{03a3}', '\u{03a9}'),
    ('\u{03b1}', '\u{03c9}'), ('\u{03cf}', '\u{03cf}'), ('\u{03d7}', '\u{03ef}'),
    ('\u{03f3}', '\u{03f3}'), ('\u{03f7}', '\u{03f8}'), ('\u{03fa}', '\u{03ff}'),
    // 244 Cyrillic
    ('\u{0402}', '\u{0402}'), ('\u{0404}', '\u{0406}'), ('\u{0408}', '\u{040b}'),
    ('\u{040f}', '\u{0418}'), ('\u{041a}', '\u{0438}'), ('\u{043a}', '\u{044f}'),
    ('\u{0452}', '\u{0452}'), ('\u{0454}', '\u{0456}'), ('\u{0458}', '\u{045b}'),
    ('\u{045f}', '\u{0475}'), ('\u{0478}', '\u{0481}'), ('\u{048a}', '\u{04c0}'),
    ('\u{04c3}', '\u{04cf}'), ('\u{04d4}', '\u{04d5}'), ('\u{04d8}', '\u{04d9}'),
    ('\u{04e0}', '\u{04e1}'), ('\u{04e8}', '\u{04e9}'), ('\u{04f6}', '\u{04f7}'),
    ('\u{04fa}', '\u{052f}'),
    // 76 Armenian
    ('\u{0531}', '\u{0556}'), ('\u{0561}', '\u{0586}'),
    // 30 Hebrew
    ('\u{05d0}', '\u{05ea}'), ('\u{05f0}', '\u{05f2}'),
    // 143 Arabic
    ('\u{0620}', '\u{063f}'), ('\u{0641}', '\u{064a}'), ('\u{066e}', '\u{066f}'),
    ('\u{0671}', '\u{0674}'), ('\u{0679}', '\u{06bf}'), ('\u{06c1}', '\u{06c1}'),
    ('\u{06c3}', '\u{06d2}'), ('\u{06d5}', '\u{06d5}'), ('\u{06ee}', '\u{06ef}'),
    ('\u{06fa}', '\u{06fc}'), ('\u{06ff}', '\u{06ff}'),
    // 120 Syriac to Thaana
    ('\u{0710}', '\u{0710}'), ('\u{0712}', '\u{072f}'), ('\u{074d}', '\u{07a5}'),
    // 1 Thaana
    ('\u{07b1}', '\u{07b1}'),
    // 33 N'Ko
    ('\u{07ca}', '\u{07ea}'),
    // 22 Samaritan
    ('\u{0800}', '\u{0815}'),
    // 25 Mandaic
    ('\u{0840}', '\u{0858}'),
    // 11 Syriac Supplement
    ('\u{0860}', '\u{086a}'),
    // 29 Arabic Extended-A
    ('\u{08a0}', '\u{08b4}'), ('\u{08b6}', '\u{08bd}'),
    // 71 Devanagari
    ('\u{0904}', '\u{0939}'), ('\u{093d}', '\u{093d}'), ('\u{0950}', '\u{0950}'),
    ('\u{0972}', '\u{0980}'),
    // 50 Bengali
    ('\u{0985}', '\u{098c}'), ('\u{098f}', '\u{0990}'), ('\u{0993}', '\u{09a8}'),
    ('\u{09aa}', '\u{09b0}'), ('\u{09b2}', '\u{09b2}'), ('\u{09b6}', '\u{09b9}'),
    ('\u{09bd}', '\u{09bd}'), ('\u{09ce}', '\u{09ce}'), ('\u{09e0}', '\u{09e1}'),
    ('\u{09f0}', '\u{09f1}'),
    // 43 Gurmukhi
    ('\u{0a05}', '\u{0a0a}'), ('\u{0a0f}', '\u{0a10}'), ('\u{0a13}', '\u{0a28}'),
    ('\u{0a2a}', '\u{0a30}'), ('\u{0a32}', '\u{0a32}'), ('\u{0a38}', '\u{0a39}'),
    ('\u{0a72}', '\u{0a74}'),
    // 53 Gujarati
    ('\u{0a85}', '\u{0a8d}'), ('\u{0a8f}', '\u{0a91}'), ('\u{0a93}', '\u{0aa8}'),
    ('\u{0aaa}', '\u{0ab0}'), ('\u{0ab2}', '\u{0ab3}'), ('\u{0ab5}', '\u{0ab9}'),
    ('\u{0abd}', '\u{0abd}'), ('\u{0ad0}', '\u{0ad0}'), ('\u{0ae0}', '\u{0ae1}'),
    ('\u{0af9}', '\u{0af9}'),
    // 51 Oriya
    ('\u{0b05}', '\u{0b0c}'), ('\u{0b0f}', '\u{0b10}'), ('\u{0b13}', '\u{0b28}'),
    ('\u{0b2a}', '\u{0b30}'), ('\u{0b32}', '\u{0b33}'), ('\u{0b35}', '\u{0b39}'),
    ('\u{0b3d}', '\u{0b3d}'), ('\u{0b5f}', '\u{0b61}'), ('\u{0b71}', '\u{0b71}'),
    // 36 Tamil
    ('\u{0b83}', '\u{0b83}'), ('\u{0b85}', '\u{0b8a}'), ('\u{0b8e}', '\u{0b90}'),
    ('\u{0b92}', '\u{0b94}'), ('\u{0b99}', '\u{0b9a}'), ('\u{0b9c}', '\u{0b9c}'),
    ('\u{0b9e}', '\u{0b9f}'), ('\u{0ba3}', '\u{0ba4}'), ('\u{0ba8}', '\u{0baa}'),
    ('\u{0bae}', '\u{0bb9}'), ('\u{0bd0}', '\u{0bd0}'),
    // 56 Telugu
    ('\u{0c05}', '\u{0c0c}'), ('\u{0c0e}', '\u{0c10}'), ('\u{0c12}', '\u{0c28}'),
    ('\u{0c2a}', '\u{0c39}'), ('\u{0c3d}', '\u{0c3d}'), ('\u{0c58}', '\u{0c5a}'),
    ('\u{0c60}', '\u{0c61}'),
    // 56 Kannada
    ('\u{0c80}', '\u{0c80}'), ('\u{0c85}', '\u{0c8c}'), ('\u{0c8e}', '\u{0c90}'),
    ('\u{0c92}', '\u{0ca8}'), ('\u{0caa}', '\u{0cb3}'), ('\u{0cb5}', '\u{0cb9}'),
    ('\u{0cbd}', '\u{0cbd}'), ('\u{0cde}', '\u{0cde}'), ('\u{0ce0}', '\u{0ce1}'),
    ('\u{0cf1}', '\u{0cf2}'),
    // 73 Malayalam
    ('\u{0d05}', '\u{0d0c}'), ('\u{0d0e}', '\u{0d10}'), ('\u{0d12}', '\u{0d3a}'),
    ('\u{0d3d}', '\u{0d3d}'), ('\u{0d4e}', '\u{0d4e}'), ('\u{0d54}', '\u{0d56}'),
    ('\u{0d58}', '\u{0d61}'), ('\u{0d7a}', '\u{0d7f}'),
    // 59 Sinhala
    ('\u{0d85}', '\u{0d96}'), ('\u{0d9a}', '\u{0db1}'), ('\u{0db3}', '\u{0dbb}'),
    ('\u{0dbd}', '\u{0dbd}'), ('\u{0dc0}', '\u{0dc6}'),
    // 55 Thai
    ('\u{0e01}', '\u{0e30}'), ('\u{0e32}', '\u{0e32}'), ('\u{0e40}', '\u{0e45}'),
    // 40 Lao
    ('\u{0e81}', '\u{0e82}'), ('\u{0e84}', '\u{0e84}'), ('\u{0e87}', '\u{0e88}'),
    ('\u{0e8a}', '\u{0e8a}'), ('\u{0e8d}', '\u{0e8d}'), ('\u{0e94}', '\u{0e97}'),
    ('\u{0e99}', '\u{0e9f}'), ('\u{0ea1}', '\u{0ea3}'), ('\u{0ea5}', '\u{0ea5}'),
    ('\u{0ea7}', '\u{0ea7}'), ('\u{0eaa}', '\u{0eab}'), ('\u{0ead}', '\u{0eb0}'),
    ('\u{0eb2}', '\u{0eb2}'), ('\u{0ebd}', '\u{0ebd}'), ('\u{0ec0}', '\u{0ec4}'),
    ('\u{0edc}', '\u{0edf}'),
    // 50 Tibetan
    ('\u{0f00}', '\u{0f00}'), ('\u{0f40}', '\u{0f47}'), ('\u{0f49}', '\u{0f6c}'),
    ('\u{0f88}', '\u{0f8c}'),
    // 74 Myanmar
    ('\u{1000}', '\u{102a}'), ('\u{103f}', '\u{103f}'), ('\u{1050}', '\u{1055}'),
    ('\u{105a}', '\u{105d}'), ('\u{1061}', '\u{1061}'), ('\u{1065}', '\u{1066}'),
    ('\u{106e}', '\u{1070}'), ('\u{1075}', '\u{1081}'), ('\u{108e}', '\u{108e}'),
    // 86 Georgian
    ('\u{10a0}', '\u{10c5}'), ('\u{10c7}', '\u{10c7}'), ('\u{10cd}', '\u{10cd}'),
    ('\u{10d0}', '\u{10fa}'), ('\u{10fd}', '\u{10ff}'),
    // 89 Ethiopic
    ('\u{1200}', '\u{1248}'), ('\u{124a}', '\u{124d}'), ('\u{1250}', '\u{1256}'),
    ('\u{1258}', '\u{1258}'), ('\u{125a}', '\u{125d}'),
];

// Secondary page, 3 bits per character: the digits 0-7. Only ever used for
// the final character, when fewer than 4 data bits are left over.
pub(crate) const TERMINATOR: &[(char, char)] = &[('0', '7')];
