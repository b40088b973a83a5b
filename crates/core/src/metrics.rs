//! Metrics collection and reporting for codec runs.
//!
//! Counts what went through the encoder and decoder: messages, elements in
//! and out, wildcard substitutions and round-trip verdicts.
//!
//! # Thread Safety
//!
//! `CodecMetrics` is NOT thread-safe. Wrap in `Arc<Mutex<CodecMetrics>>` or
//! keep one per thread and merge at the end.

use crate::decoder::DecodeSummary;
use crate::encoder::EncodeSummary;
use std::time::{Duration, Instant};

/// Counters for a codec session.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    // === Timing ===
    /// When the session started
    pub start_time: Instant,

    /// When the session ended (set on completion)
    pub end_time: Option<Instant>,

    // === Encoding ===
    /// Messages passed through `encode`
    pub messages_encoded: u64,

    /// Text characters consumed by the encoder
    pub chars_encoded: u64,

    /// Dot/dash stream elements produced by the encoder
    pub elements_produced: u64,

    /// Characters the encoder replaced by the wildcard
    pub encode_wildcards: u64,

    // === Decoding ===
    /// Messages passed through `decode`
    pub messages_decoded: u64,

    /// Stream elements consumed by the decoder
    pub elements_decoded: u64,

    /// Text characters produced by the decoder
    pub chars_produced: u64,

    /// Codes the decoder replaced by the wildcard
    pub decode_wildcards: u64,

    /// Decodes that stopped at an end-of-message separator
    pub messages_terminated: u64,

    // === Verification ===
    /// Round trips whose decoded text matched the input
    pub round_trips_passed: u64,

    /// Round trips whose decoded text differed from the input
    pub round_trips_failed: u64,
}

impl CodecMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            messages_encoded: 0,
            chars_encoded: 0,
            elements_produced: 0,
            encode_wildcards: 0,
            messages_decoded: 0,
            elements_decoded: 0,
            chars_produced: 0,
            decode_wildcards: 0,
            messages_terminated: 0,
            round_trips_passed: 0,
            round_trips_failed: 0,
        }
    }

    /// Account for one `encode` call.
    pub fn record_encode(&mut self, summary: &EncodeSummary) {
        self.messages_encoded += 1;
        self.chars_encoded += summary.consumed as u64;
        self.elements_produced += summary.written as u64;
        self.encode_wildcards += summary.unrecognized as u64;
    }

    /// Account for one `decode` call.
    pub fn record_decode(&mut self, summary: &DecodeSummary) {
        self.messages_decoded += 1;
        self.elements_decoded += summary.consumed as u64;
        self.chars_produced += summary.written as u64;
        self.decode_wildcards += summary.unrecognized as u64;
        if summary.end_of_message {
            self.messages_terminated += 1;
        }
    }

    /// Account for one round-trip verification.
    pub fn record_round_trip(&mut self, passed: bool) {
        if passed {
            self.round_trips_passed += 1;
        } else {
            self.round_trips_failed += 1;
        }
    }

    /// Mark the session as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of encoded characters that had no code.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn wildcard_rate(&self) -> f64 {
        if self.chars_encoded == 0 {
            0.0
        } else {
            self.encode_wildcards as f64 / self.chars_encoded as f64
        }
    }

    /// Average stream elements per encoded character.
    pub fn expansion_ratio(&self) -> f64 {
        if self.chars_encoded == 0 {
            0.0
        } else {
            self.elements_produced as f64 / self.chars_encoded as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Encoding ===");
        println!("Messages: {}", self.messages_encoded);
        println!("Characters in: {}", self.chars_encoded);
        println!("Elements out: {} ({:.2} per character)", self.elements_produced, self.expansion_ratio());
        println!("Wildcards: {} ({:.2}%)", self.encode_wildcards, self.wildcard_rate() * 100.0);
        println!();

        println!("=== Decoding ===");
        println!("Messages: {}", self.messages_decoded);
        println!("Elements in: {}", self.elements_decoded);
        println!("Characters out: {}", self.chars_produced);
        println!("Wildcards: {}", self.decode_wildcards);
        println!("Ended by separator: {}", self.messages_terminated);
        println!();

        if self.round_trips_passed + self.round_trips_failed > 0 {
            println!("=== Round Trips ===");
            println!("Passed: {}", self.round_trips_passed);
            println!("Failed: {}", self.round_trips_failed);
            println!();
        }
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.round_trips_failed > 0 {
            println!("✗ {} round trip(s) did not reproduce the input", self.round_trips_failed);
        } else if self.round_trips_passed > 0 {
            println!("✓ {} round trip(s) verified in {} ms", self.round_trips_passed, self.duration().as_millis());
        } else {
            println!("✓ Done in {} ms", self.duration().as_millis());
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             messages_encoded={}\n\
             chars_encoded={}\n\
             elements_produced={}\n\
             encode_wildcards={}\n\
             wildcard_rate={:.4}\n\
             messages_decoded={}\n\
             elements_decoded={}\n\
             chars_produced={}\n\
             decode_wildcards={}\n\
             messages_terminated={}\n\
             round_trips_passed={}\n\
             round_trips_failed={}\n",
            self.duration().as_millis(),
            self.messages_encoded,
            self.chars_encoded,
            self.elements_produced,
            self.encode_wildcards,
            self.wildcard_rate(),
            self.messages_decoded,
            self.elements_decoded,
            self.chars_produced,
            self.decode_wildcards,
            self.messages_terminated,
            self.round_trips_passed,
            self.round_trips_failed,
        )
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = CodecMetrics::new();
        assert!(metrics.end_time.is_none());
        assert_eq!(metrics.wildcard_rate(), 0.0);
        assert_eq!(metrics.expansion_ratio(), 0.0);
    }

    #[test]
    fn test_record_encode() {
        let mut metrics = CodecMetrics::new();
        metrics.record_encode(&EncodeSummary {
            consumed: 4,
            written: 12,
            unrecognized: 1,
        });

        assert_eq!(metrics.messages_encoded, 1);
        assert_eq!(metrics.wildcard_rate(), 0.25);
        assert_eq!(metrics.expansion_ratio(), 3.0);
    }

    #[test]
    fn test_record_decode() {
        let mut metrics = CodecMetrics::new();
        metrics.record_decode(&DecodeSummary {
            consumed: 14,
            written: 3,
            unrecognized: 0,
            end_of_message: true,
        });
        metrics.record_decode(&DecodeSummary {
            consumed: 7,
            written: 1,
            unrecognized: 1,
            end_of_message: false,
        });

        assert_eq!(metrics.messages_decoded, 2);
        assert_eq!(metrics.elements_decoded, 21);
        assert_eq!(metrics.chars_produced, 4);
        assert_eq!(metrics.decode_wildcards, 1);
        assert_eq!(metrics.messages_terminated, 1);
    }

    #[test]
    fn test_round_trips() {
        let mut metrics = CodecMetrics::new();
        metrics.record_round_trip(true);
        metrics.record_round_trip(true);
        metrics.record_round_trip(false);

        assert_eq!(metrics.round_trips_passed, 2);
        assert_eq!(metrics.round_trips_failed, 1);
    }

    #[test]
    fn test_duration_after_complete() {
        let mut metrics = CodecMetrics::new();
        std::thread::sleep(Duration::from_millis(5));
        metrics.complete();

        let first = metrics.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(metrics.duration(), first);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = CodecMetrics::new();
        metrics.record_encode(&EncodeSummary {
            consumed: 3,
            written: 14,
            unrecognized: 0,
        });

        let text = metrics.export_text();
        assert!(text.contains("messages_encoded=1"));
        assert!(text.contains("chars_encoded=3"));
        assert!(text.contains("elements_produced=14"));
        assert!(text.contains("round_trips_failed=0"));
    }
}
