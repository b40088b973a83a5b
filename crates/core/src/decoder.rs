//! Dot/dash to text decoding.
//!
//! The decoder counts consecutive spaces:
//!
//! | spaces | meaning                                   |
//! |--------|-------------------------------------------|
//! | 1      | letter boundary, flush the pending symbol |
//! | 2      | word boundary, emitted before next symbol |
//! | 3      | end of message, stop                      |
//!
//! A symbol is only flushed by a following space. Input that ends right
//! after a dot or dash loses its last symbol; the encoder's three trailing
//! spaces make its own output safe.
//!
//! Runs longer than the longest code are never stored past
//! [`MAX_SYMBOL_LEN`]; they decode to the wildcard.

use crate::buffer::MessageBuffer;
use crate::error::Result;
use crate::table::{from_code, MAX_SYMBOL_LEN, SPACE, WILDCARD};

/// Spaces in a row that end a message.
const END_OF_MESSAGE: u8 = 3;

/// Spaces in a row that separate words.
const WORD_BOUNDARY: u8 = 2;

/// What a single `decode` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Input elements consumed, including the separator that ended the message
    pub consumed: usize,
    /// Elements appended to the output buffer
    pub written: usize,
    /// Codes replaced by the wildcard
    pub unrecognized: usize,
    /// Whether an end-of-message separator was reached
    pub end_of_message: bool,
}

/// Dot/dash run collected between separators.
///
/// # Invariants
/// - `len <= MAX_SYMBOL_LEN`
/// - `overlong` is set once more than `MAX_SYMBOL_LEN` elements arrived
#[derive(Debug, Default)]
struct PendingSymbol {
    elements: [u8; MAX_SYMBOL_LEN],
    len: usize,
    overlong: bool,
}

impl PendingSymbol {
    fn push(&mut self, element: u8) {
        if self.len < MAX_SYMBOL_LEN {
            self.elements[self.len] = element;
            self.len += 1;
        } else {
            self.overlong = true;
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve the run and reset for the next one.
    fn take(&mut self) -> Option<u8> {
        let symbol = if self.overlong {
            None
        } else {
            from_code(&self.elements[..self.len])
        };
        self.len = 0;
        self.overlong = false;
        symbol
    }
}

/// Decode up to `max_len` input elements into `output`.
///
/// Decoding stops at the end of `input`, at a NUL element, after `max_len`
/// elements, or right after an end-of-message separator.
///
/// # Errors
/// Propagates buffer errors; output written before the failure stays in
/// `output`.
pub fn decode(input: &[u8], max_len: usize, output: &mut MessageBuffer) -> Result<DecodeSummary> {
    let start_len = output.len();
    let mut summary = DecodeSummary::default();
    let mut pending = PendingSymbol::default();
    let mut spaces: u8 = 0;

    for &chr in input.iter().take(max_len).take_while(|&&c| c != 0) {
        summary.consumed += 1;

        if chr == SPACE {
            spaces = spaces.saturating_add(1);

            if spaces == 1 && !pending.is_empty() {
                match pending.take() {
                    Some(symbol) => output.append(symbol)?,
                    None => {
                        tracing::trace!("no symbol for code, writing wildcard");
                        output.append(WILDCARD)?;
                        summary.unrecognized += 1;
                    }
                }
            }
            if spaces == END_OF_MESSAGE {
                summary.end_of_message = true;
                break;
            }
        } else {
            if spaces == WORD_BOUNDARY {
                output.append(SPACE)?;
            }
            spaces = 0;
            pending.push(chr);
        }
    }

    summary.written = output.len() - start_len;

    tracing::debug!(
        consumed = summary.consumed,
        written = summary.written,
        unrecognized = summary.unrecognized,
        end_of_message = summary.end_of_message,
        "decoded message"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(input: &[u8]) -> String {
        let mut buf = MessageBuffer::new().unwrap();
        decode(input, input.len(), &mut buf).unwrap();
        buf.to_string()
    }

    #[test]
    fn test_decode_sos() {
        let mut buf = MessageBuffer::new().unwrap();
        let summary = decode(b"... --- ...   ", 14, &mut buf).unwrap();
        assert_eq!(buf.as_str(), Some("SOS"));
        assert_eq!(summary.consumed, 14);
        assert_eq!(summary.written, 3);
        assert!(summary.end_of_message);
    }

    #[test]
    fn test_decode_word_boundary() {
        assert_eq!(decoded(b".... ..  -.-- --- ..-   "), "HI YOU");
    }

    #[test]
    fn test_decode_unknown_code() {
        let mut buf = MessageBuffer::new().unwrap();
        let summary = decode(b".- ..--   ", 10, &mut buf).unwrap();
        assert_eq!(buf.as_str(), Some("A?"));
        assert_eq!(summary.unrecognized, 1);
    }

    #[test]
    fn test_decode_wildcard_unit() {
        // Encoder output for "A#B"
        assert_eq!(decoded(b".- ? -...   "), "A?B");
    }

    #[test]
    fn test_decode_overlong_run() {
        let mut buf = MessageBuffer::new().unwrap();
        let summary = decode(b"......... .   ", 14, &mut buf).unwrap();
        assert_eq!(buf.as_str(), Some("?E"));
        assert_eq!(summary.unrecognized, 1);
    }

    #[test]
    fn test_decode_six_elements_is_unrecognized() {
        // ".----" plus one more dot must not match "1"
        assert_eq!(decoded(b".----.   "), "?");
    }

    #[test]
    fn test_decode_drops_unterminated_symbol() {
        assert_eq!(decoded(b"... ---"), "S");
        assert_eq!(decoded(b"... --- "), "SO");
    }

    #[test]
    fn test_decode_stops_at_end_of_message() {
        let mut buf = MessageBuffer::new().unwrap();
        let input = b".   -   ";
        let summary = decode(input, input.len(), &mut buf).unwrap();
        assert_eq!(buf.as_str(), Some("E"));
        assert_eq!(summary.consumed, 4);
        assert!(summary.end_of_message);
    }

    #[test]
    fn test_decode_respects_max_len() {
        let mut buf = MessageBuffer::new().unwrap();
        let summary = decode(b"... --- ...   ", 8, &mut buf).unwrap();
        // "... --- " flushes S and O
        assert_eq!(buf.as_str(), Some("SO"));
        assert!(!summary.end_of_message);
    }

    #[test]
    fn test_decode_stops_at_nul() {
        assert_eq!(decoded(b". \0- "), "E");
    }

    #[test]
    fn test_decode_leading_spaces() {
        // Two leading spaces count as a word boundary before the first symbol
        assert_eq!(decoded(b"  .   "), " E");
        assert_eq!(decoded(b"   .   "), "");
    }

    #[test]
    fn test_decode_empty() {
        let mut buf = MessageBuffer::new().unwrap();
        let summary = decode(b"", 0, &mut buf).unwrap();
        assert!(buf.is_empty());
        assert_eq!(summary, DecodeSummary::default());
    }

    #[test]
    fn test_pending_symbol_reset_after_overlong() {
        let mut pending = PendingSymbol::default();
        for _ in 0..7 {
            pending.push(b'-');
        }
        assert_eq!(pending.take(), None);
        pending.push(b'-');
        assert_eq!(pending.take(), Some(b'T'));
        assert!(pending.is_empty());
    }
}
