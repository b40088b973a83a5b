//! Sample text generation.
//!
//! When no input is given we generate words drawn from the codec alphabet,
//! separated by single spaces, so that every run is a valid round trip.
//! Letters are weighted over digits to look a little like real traffic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Generate `words` words of sample text.
///
/// Words are 1 to 8 characters long. Output is fully determined by `seed`.
pub fn generate_sample_text(seed: u64, words: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::new();

    for n in 0..words {
        if n > 0 {
            text.push(' ');
        }

        let len = rng.gen_range(1..=8);
        for _ in 0..len {
            // 80% letters, 20% digits
            let pool = if rng.gen_bool(0.8) { LETTERS } else { DIGITS };
            text.push(pool[rng.gen_range(0..pool.len())] as char);
        }
    }

    text
}
