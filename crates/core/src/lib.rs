//! morse-codec-core: Morse encoding and decoding over a bounded message buffer
//!
//! This library converts text (A-Z, 0-9 and spaces) to a dot/dash stream
//! and back. It is fed by serial links and gesture classifiers and feeds
//! whatever plays or forwards the stream; none of those live here.
//!
//! # Architecture
//!
//! - `table`: The 36-entry symbol table
//! - `buffer`: Growable message buffer with a hard capacity ceiling
//! - `encoder`: Text to dot/dash stream
//! - `decoder`: Dot/dash stream to text
//! - `metrics`: Counters for codec activity
//!
//! # Example
//! ```
//! use morse_codec_core::{decode, encode, MessageBuffer};
//!
//! let mut code = MessageBuffer::new().unwrap();
//! encode(b"HI YOU", 6, &mut code).unwrap();
//! assert_eq!(code.as_str(), Some(".... ..  -.-- --- ..-   "));
//!
//! let mut text = MessageBuffer::new().unwrap();
//! decode(code.as_bytes(), code.len(), &mut text).unwrap();
//! assert_eq!(text.as_str(), Some("HI YOU"));
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: a full buffer is an error value, not an abort
//! - **Wildcards, not failures**: unknown characters and codes become `?`
//! - **Bounded memory**: buffers stop at their configured ceiling

pub mod buffer;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod table;

// Re-export commonly used types
pub use buffer::{BufferLimits, MessageBuffer};
pub use decoder::{decode, DecodeSummary};
pub use encoder::{encode, EncodeSummary};
pub use error::{BufferError, Error, Result};
pub use table::{from_code, to_code};
