//! Configuration for the morse-codec application.
//!
//! Handles parsing command-line arguments and filling in defaults. With no
//! arguments the tool generates seeded sample text and round-trips it; the
//! seed is printed so any run can be repeated.

use morse_codec_core::buffer::{BufferLimits, GROWTH_INCREMENT, MAX_CAPACITY};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// What to do with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text in, dot/dash stream out
    Encode,
    /// Dot/dash stream in, text out
    Decode,
    /// Encode, decode the result and compare with the input
    RoundTrip,
}

impl Mode {
    fn parse(name: &str) -> Result<Self, String> {
        match name {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            "round-trip" => Ok(Mode::RoundTrip),
            other => Err(format!("unknown mode: {} (expected encode, decode or round-trip)", other)),
        }
    }
}

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Given on the command line
    Inline(String),
    /// Read from a file
    File(PathBuf),
    /// Generated from the seed
    Sample { words: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Input text or stream
    pub input: InputSource,

    /// Operation to perform
    pub mode: Mode,

    /// Maximum input elements consumed (None = whole input)
    pub max_len: Option<usize>,

    /// Seed used for sample generation
    pub seed: u64,

    // === Buffers ===
    /// Sizing of the message buffers
    pub limits: BufferLimits,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,

    /// Log at info level instead of warn
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided a time-based seed is used.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input: Option<InputSource> = None;
        let mut mode: Option<Mode> = None;
        let mut max_len: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut sample_words: Option<usize> = None;
        let mut max_capacity: Option<usize> = None;
        let mut capacity_step: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--encode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encode requires text".to_string());
                    }
                    input = Some(InputSource::Inline(args[i].clone()));
                    mode = Some(Mode::Encode);
                }
                "--decode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decode requires a dot/dash stream".to_string());
                    }
                    input = Some(InputSource::Inline(args[i].clone()));
                    mode = Some(Mode::Decode);
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input = Some(InputSource::File(PathBuf::from(&args[i])));
                }
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires a name".to_string());
                    }
                    mode = Some(Mode::parse(&args[i])?);
                }
                "--round-trip" => {
                    mode = Some(Mode::RoundTrip);
                }
                "--max-len" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-len requires a number".to_string());
                    }
                    max_len = Some(args[i].parse().map_err(|_| "invalid max-len")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-words" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-words requires a number".to_string());
                    }
                    sample_words = Some(args[i].parse().map_err(|_| "invalid sample-words")?);
                }
                "--max-capacity" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-capacity requires a number".to_string());
                    }
                    max_capacity = Some(args[i].parse().map_err(|_| "invalid max-capacity")?);
                }
                "--capacity-step" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--capacity-step requires a number".to_string());
                    }
                    capacity_step = Some(args[i].parse().map_err(|_| "invalid capacity-step")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // No explicit input: generate a sample and round-trip it
        let input = input.unwrap_or_else(|| InputSource::Sample {
            words: sample_words.unwrap_or_else(|| rng.gen_range(3..=12)),
        });
        let mode = mode.unwrap_or(match input {
            InputSource::Sample { .. } => Mode::RoundTrip,
            _ => Mode::Encode,
        });

        let defaults = BufferLimits::default();
        let limits = BufferLimits {
            initial_capacity: defaults.initial_capacity,
            growth_increment: capacity_step.unwrap_or(GROWTH_INCREMENT),
            max_capacity: max_capacity.unwrap_or(MAX_CAPACITY),
        };
        limits.validate().map_err(|e| e.to_string())?;

        Ok(Config {
            input,
            mode,
            max_len,
            seed,
            limits,
            print_config,
            print_metrics,
            verbose,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input {
            InputSource::Inline(text) => println!("Input: {:?}", text),
            InputSource::File(path) => println!("Input file: {}", path.display()),
            InputSource::Sample { words } => println!("Input: {} generated words", words),
        }
        println!("Mode: {:?}", self.mode);
        match self.max_len {
            Some(n) => println!("Max length: {} elements", n),
            None => println!("Max length: whole input"),
        }
        println!("Seed: {}", self.seed);
        println!();
        println!("=== Buffers ===");
        println!("Initial capacity: {}", self.limits.initial_capacity);
        println!("Growth step: {}", self.limits.growth_increment);
        println!("Max capacity: {}", self.limits.max_capacity);
        println!();
    }
}

fn print_help() {
    println!("morse-codec: Morse encoder/decoder");
    println!();
    println!("USAGE:");
    println!("    morse-codec [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --encode <TEXT>         Encode TEXT to dots and dashes");
    println!("    --decode <CODE>         Decode a dot/dash stream");
    println!("    --in <PATH>             Read input from a file");
    println!("    --mode <MODE>           encode, decode or round-trip (default: encode)");
    println!("    --round-trip            Encode, decode and compare");
    println!("    --max-len <N>           Consume at most N input elements");
    println!();
    println!("    --seed <N>              Seed for generated sample text");
    println!("    --sample-words <N>      Words of sample text (default: random 3-12)");
    println!();
    println!("    --max-capacity <N>      Buffer ceiling (default: 60000)");
    println!("    --capacity-step <N>     Buffer growth step (default: 100)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print metrics summary");
    println!("    --verbose, -v           Log codec activity (RUST_LOG overrides)");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    morse-codec                              # Round-trip random sample text");
    println!("    morse-codec --seed 42                    # Deterministic sample");
    println!("    morse-codec --encode \"SOS\"               # ... --- ...");
    println!("    morse-codec --decode \"... --- ...   \"    # SOS");
    println!("    morse-codec --in msg.txt --round-trip    # Verify a file survives");
    println!();
}
