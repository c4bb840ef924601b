//! Times filter creation and block processing on every available backend.
//!
//! Run with `cargo run --release --example profile`.

use std::time::Instant;

use anyhow::Result;
use biquad_filters::{Backend, BiquadFilter, FilterConfig, FilterKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZES: [usize; 6] = [16, 64, 256, 1024, 4096, 8192];
const ITERATIONS: usize = 200;

/// Timing for one backend and block size.
#[derive(Debug, Clone, Copy)]
struct Timing {
    avg_us: f64,
    min_us: f64,
    ns_per_sample: f64,
}

fn time_blocks(backend: Backend, input: &[f32]) -> Result<Timing> {
    let config = FilterConfig::new(1000.0, SAMPLE_RATE, std::f32::consts::FRAC_1_SQRT_2);
    let mut filter = BiquadFilter::with_backend(FilterKind::LowPass, config, backend)?;
    let mut buffer = input.to_vec();
    let mut times = Vec::with_capacity(ITERATIONS);

    for _ in 0..ITERATIONS {
        buffer.copy_from_slice(input);
        let start = Instant::now();
        filter.process_block(&mut buffer)?;
        times.push(start.elapsed().as_secs_f64() * 1e6);
    }

    let avg_us = times.iter().sum::<f64>() / times.len() as f64;
    let min_us = times.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(Timing {
        avg_us,
        min_us,
        ns_per_sample: avg_us * 1000.0 / input.len() as f64,
    })
}

fn time_creation() -> Result<f64> {
    let start = Instant::now();
    for kind in FilterKind::ALL {
        for step in 0..ITERATIONS {
            let config = FilterConfig::new(100.0 + step as f64 * 10.0, SAMPLE_RATE, 0.9)
                .with_gain(3.0);
            BiquadFilter::new(kind, config)?;
        }
    }
    Ok(start.elapsed().as_secs_f64() * 1e6 / (ITERATIONS * FilterKind::ALL.len()) as f64)
}

fn time_single(input: &[f32]) -> Result<f64> {
    let mut filter = BiquadFilter::low_pass(1000.0, SAMPLE_RATE, std::f32::consts::FRAC_1_SQRT_2)?;
    let mut sink = 0.0_f32;
    let start = Instant::now();
    for &x in input {
        sink += filter.process(x)?;
    }
    let elapsed = start.elapsed().as_secs_f64() * 1e9 / input.len() as f64;
    std::hint::black_box(sink);
    Ok(elapsed)
}

fn main() -> Result<()> {
    println!("Biquad Filter Profile\n");
    println!("Detected backend: {}", Backend::detect());
    println!("Filter creation: {:.3} us per filter\n", time_creation()?);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let input: Vec<f32> = (0..*BLOCK_SIZES.iter().max().unwrap_or(&0))
        .map(|_| rng.gen_range(-1.0_f32..1.0_f32))
        .collect();

    println!("Single-sample: {:.3} ns/sample\n", time_single(&input)?);

    println!(
        "{:<8} {:>8} {:>12} {:>12} {:>12}",
        "backend", "block", "avg (us)", "min (us)", "ns/sample"
    );
    for backend in Backend::available() {
        for size in BLOCK_SIZES {
            let timing = time_blocks(backend, &input[..size])?;
            println!(
                "{:<8} {:>8} {:>12.3} {:>12.3} {:>12.3}",
                backend.name(),
                size,
                timing.avg_us,
                timing.min_us,
                timing.ns_per_sample
            );
        }
    }

    Ok(())
}
