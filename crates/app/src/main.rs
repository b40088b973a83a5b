//! morse-codec: encode, decode or round-trip text through the morse codec.

mod config;
mod input_gen;

use config::{Config, InputSource, Mode};
use morse_codec_core::{decode, encode, metrics::CodecMetrics, MessageBuffer, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    init_logging(config.verbose);

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(metrics) => {
            if config.print_metrics {
                metrics.print_summary();
            }
            metrics.print_result();

            if metrics.round_trips_failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "codec run failed");
            ExitCode::FAILURE
        }
    }
}

/// Install the fmt subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_input(config: &Config) -> Result<Vec<u8>> {
    let bytes = match &config.input {
        InputSource::Inline(text) => text.clone().into_bytes(),
        InputSource::File(path) => {
            let mut bytes = std::fs::read(path)?;
            // A trailing newline is an artefact of the file, not part of the message
            while matches!(bytes.last(), Some(b'\n' | b'\r')) {
                bytes.pop();
            }
            bytes
        }
        InputSource::Sample { words } => {
            let text = input_gen::generate_sample_text(config.seed, *words);
            tracing::info!(seed = config.seed, words, "generated sample text");
            text.into_bytes()
        }
    };
    Ok(bytes)
}

fn run(config: &Config) -> Result<CodecMetrics> {
    let input = load_input(config)?;
    let max_len = config.max_len.unwrap_or(input.len());
    let mut metrics = CodecMetrics::new();

    tracing::info!(mode = ?config.mode, elements = input.len(), max_len, "starting");

    match config.mode {
        Mode::Encode => {
            let mut code = MessageBuffer::with_limits(config.limits)?;
            metrics.record_encode(&encode(&input, max_len, &mut code)?);
            println!("{}", code);
        }
        Mode::Decode => {
            let mut text = MessageBuffer::with_limits(config.limits)?;
            let summary = decode(&input, max_len, &mut text)?;
            if !summary.end_of_message {
                tracing::warn!("stream ended without an end-of-message separator");
            }
            metrics.record_decode(&summary);
            println!("{}", text);
        }
        Mode::RoundTrip => {
            let mut code = MessageBuffer::with_limits(config.limits)?;
            metrics.record_encode(&encode(&input, max_len, &mut code)?);

            let mut text = MessageBuffer::with_limits(config.limits)?;
            metrics.record_decode(&decode(code.as_bytes(), code.len(), &mut text)?);

            let expected: Vec<u8> = input
                .iter()
                .take(max_len)
                .take_while(|&&b| b != 0)
                .map(|b| b.to_ascii_uppercase())
                .collect();
            let passed = text.as_bytes() == expected.as_slice();
            if !passed {
                tracing::warn!(
                    expected = %String::from_utf8_lossy(&expected),
                    actual = %text,
                    "round trip changed the message"
                );
            }
            metrics.record_round_trip(passed);

            println!("text: {}", String::from_utf8_lossy(&input));
            println!("code: {}", code);
            println!("back: {}", text);
        }
    }

    metrics.complete();
    Ok(metrics)
}
