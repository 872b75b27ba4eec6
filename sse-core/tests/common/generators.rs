//! Stochastic content generators for chunk-boundary tests
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("SSE_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// A random line terminator: CR LF, CR or LF
    pub fn eol(&mut self) -> &'static [u8] {
        match self.rng.gen_range(0..3) {
            0 => b"\r\n",
            1 => b"\r",
            _ => b"\n",
        }
    }

    /// Short printable payload without line terminators
    pub fn word(&mut self) -> Vec<u8> {
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789 {}\":,";
        let len = self.rng.gen_range(1..12);
        let mut word: Vec<u8> = (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect();
        // Keep payloads free of surrounding whitespace so trimming is a no-op.
        word[0] = b'x';
        if let Some(last) = word.last_mut() {
            *last = b'y';
        }
        word
    }

    /// A stream of events, each line ending with a random terminator
    pub fn stream(&mut self, events: usize) -> Vec<u8> {
        let mut out = Vec::new();
        for _ in 0..events {
            if self.chance(0.3) {
                out.extend(self.eol());
            }
            if self.chance(0.3) {
                out.extend(b"id: ");
                out.extend(self.word());
                out.extend(self.eol());
            }
            if self.chance(0.3) {
                out.extend(b"event: ");
                out.extend(self.word());
                out.extend(self.eol());
            }
            if self.chance(0.2) {
                out.extend(format!("retry: {}", self.rng.gen_range(0..10_000)).as_bytes());
                out.extend(self.eol());
            }
            if self.chance(0.2) {
                out.extend(b": ");
                out.extend(self.word());
                out.extend(self.eol());
            }
            for _ in 0..self.rng.gen_range(1..4) {
                out.extend(b"data: ");
                out.extend(self.word());
                out.extend(self.eol());
            }
            out.extend(self.eol());
        }
        out
    }

    /// Cut `input` into random chunks of 1..=max bytes
    pub fn chunks(&mut self, input: &[u8], max: usize) -> Vec<Vec<u8>> {
        let mut chunks = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let len = self.rng.gen_range(1..=max).min(input.len() - pos);
            chunks.push(input[pos..pos + len].to_vec());
            pos += len;
        }
        chunks
    }
}
