//! The morse symbol table.
//!
//! 36 entries: A-Z followed by 1-9 and 0. Letters and digits live in
//! separate sub-ranges and a lookup only ever scans the range its input
//! belongs to.
//!
//! # Example
//! ```
//! use morse_codec_core::table::{from_code, to_code};
//!
//! assert_eq!(to_code(b's'), Some("..."));
//! assert_eq!(from_code(b"-----"), Some(b'0'));
//! assert_eq!(from_code(b"......"), None);
//! ```

/// Number of entries in the table.
pub const ALPHABET_LEN: usize = 36;

/// Number of letter entries at the front of the table.
const LETTER_COUNT: usize = 26;

/// Longest code in the table.
pub const MAX_SYMBOL_LEN: usize = 5;

/// Dot glyph.
pub const DOT: u8 = b'.';

/// Dash glyph.
pub const DASH: u8 = b'-';

/// Separator glyph, used for letter, word and end-of-message boundaries.
pub const SPACE: u8 = b' ';

/// Substituted for anything the table cannot translate.
pub const WILDCARD: u8 = b'?';

/// A single element of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Dot,
    Dash,
}

impl Element {
    /// Parse an element from its glyph.
    pub fn from_glyph(glyph: u8) -> Option<Self> {
        match glyph {
            DOT => Some(Element::Dot),
            DASH => Some(Element::Dash),
            _ => None,
        }
    }

    /// The glyph written to the symbol stream.
    pub fn glyph(self) -> u8 {
        match self {
            Element::Dot => DOT,
            Element::Dash => DASH,
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Upper-case letter or digit
    pub symbol: u8,
    /// Dot/dash code, 1 to 5 glyphs
    pub code: &'static str,
}

impl Entry {
    /// Iterate the code as typed elements.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.code.bytes().filter_map(Element::from_glyph)
    }
}

const fn entry(symbol: u8, code: &'static str) -> Entry {
    Entry { symbol, code }
}

static TABLE: [Entry; ALPHABET_LEN] = [
    entry(b'A', ".-"),
    entry(b'B', "-..."),
    entry(b'C', "-.-."),
    entry(b'D', "-.."),
    entry(b'E', "."),
    entry(b'F', "..-."),
    entry(b'G', "--."),
    entry(b'H', "...."),
    entry(b'I', ".."),
    entry(b'J', ".---"),
    entry(b'K', "-.-"),
    entry(b'L', ".-.."),
    entry(b'M', "--"),
    entry(b'N', "-."),
    entry(b'O', "---"),
    entry(b'P', ".--."),
    entry(b'Q', "--.-"),
    entry(b'R', ".-."),
    entry(b'S', "..."),
    entry(b'T', "-"),
    entry(b'U', "..-"),
    entry(b'V', "...-"),
    entry(b'W', ".--"),
    entry(b'X', "-..-"),
    entry(b'Y', "-.--"),
    entry(b'Z', "--.."),
    entry(b'1', ".----"),
    entry(b'2', "..---"),
    entry(b'3', "...--"),
    entry(b'4', "....-"),
    entry(b'5', "....."),
    entry(b'6', "-...."),
    entry(b'7', "--..."),
    entry(b'8', "---.."),
    entry(b'9', "----."),
    entry(b'0', "-----"),
];

/// All table entries, letters first.
pub fn entries() -> &'static [Entry] {
    &TABLE
}

/// Look up the code for a character.
///
/// Letters match case-insensitively against the letter range, digits against
/// the digit range. Anything else is not found.
pub fn to_code(symbol: u8) -> Option<&'static str> {
    let range = if symbol.is_ascii_alphabetic() {
        &TABLE[..LETTER_COUNT]
    } else if symbol.is_ascii_digit() {
        &TABLE[LETTER_COUNT..]
    } else {
        return None;
    };

    let wanted = symbol.to_ascii_uppercase();
    range.iter().find(|e| e.symbol == wanted).map(|e| e.code)
}

/// Look up the symbol for a complete dot/dash code.
///
/// Only an exact, full-length match counts; prefixes and longer runs are
/// not found.
pub fn from_code(candidate: &[u8]) -> Option<u8> {
    if candidate.is_empty() || candidate.len() > MAX_SYMBOL_LEN {
        return None;
    }

    TABLE
        .iter()
        .find(|e| e.code.as_bytes() == candidate)
        .map(|e| e.symbol)
}
