use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use vecdist_bench::config::FULL_SIZES;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

fn write_row<W: Write>(out: &mut W, len: usize, rng: &mut SimpleRng) -> std::io::Result<()> {
    for i in 0..len {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{:.4}", rng.uniform(-100.0, 100.0))?;
    }
    out.write_all(b"\n")
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources/test.in"));

    let mut rng = SimpleRng::new(42);
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    for &size in &FULL_SIZES {
        write_row(&mut out, size, &mut rng).context("writing vector A")?;
        write_row(&mut out, size, &mut rng).context("writing vector B")?;
        log::debug!("wrote pair of length {size}");
    }
    out.flush().context("flushing output")?;

    println!(
        "Wrote {} vector pairs to {}",
        FULL_SIZES.len(),
        output_path.display()
    );
    Ok(())
}
