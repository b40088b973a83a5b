//! Text to dot/dash encoding.
//!
//! # Stream format
//!
//! ```text
//! "HI YOU"  ->  ".... .. " + " " + "-.-- --- ..- " + "  "
//!               |letters|   word   |   letters    |  end
//! ```
//!
//! - every encoded unit is followed by one space (letter boundary)
//! - a space in the input is written as one more space, giving two in a row
//!   (word boundary)
//! - the stream ends with two extra spaces, three in a row after the last
//!   unit (end of message)
//!
//! Characters without a table entry are written as a literal `?` unit.

use crate::buffer::MessageBuffer;
use crate::error::Result;
use crate::table::{to_code, SPACE, WILDCARD};

/// What a single `encode` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Input elements consumed
    pub consumed: usize,
    /// Elements appended to the output buffer
    pub written: usize,
    /// Input characters replaced by the wildcard
    pub unrecognized: usize,
}

/// Encode up to `max_len` input characters into `output`.
///
/// Encoding stops at the end of `input`, at a NUL element or after `max_len`
/// elements, whichever comes first. The end-of-message separator is always
/// written.
///
/// # Errors
/// Propagates buffer errors; output written before the failure stays in
/// `output`.
pub fn encode(input: &[u8], max_len: usize, output: &mut MessageBuffer) -> Result<EncodeSummary> {
    let start_len = output.len();
    let mut summary = EncodeSummary::default();

    for &chr in input.iter().take(max_len).take_while(|&&c| c != 0) {
        if chr == SPACE {
            output.append(SPACE)?;
        } else {
            match to_code(chr) {
                Some(code) => output.extend_from_slice(code.as_bytes())?,
                None => {
                    tracing::trace!(byte = chr, "no code for character, writing wildcard");
                    output.append(WILDCARD)?;
                    summary.unrecognized += 1;
                }
            }
            output.append(SPACE)?;
        }
        summary.consumed += 1;
    }

    output.extend_from_slice(&[SPACE, SPACE])?;
    summary.written = output.len() - start_len;

    tracing::debug!(
        consumed = summary.consumed,
        written = summary.written,
        unrecognized = summary.unrecognized,
        "encoded message"
    );

    Ok(summary)
}
