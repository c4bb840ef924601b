//! Filters a WAV file through a biquad and writes the result.
//!
//! ```text
//! cargo run --example filter_wav -- <input.wav> <output.wav> [kind] [cutoff] [q] [gain_db]
//! ```
//!
//! `kind` is a response name such as `low_pass`, `notch` or `peaking_eq`
//! (default `low_pass`).

use anyhow::{Context, Result, anyhow};
use biquad_filters::{BiquadFilter, FilterConfig, FilterKind};

fn parse_kind(name: &str) -> Result<FilterKind> {
    let wanted = name.to_lowercase().replace('-', "_");
    FilterKind::ALL
        .into_iter()
        .find(|kind| kind.name().to_lowercase().replace([' ', '-'], "_") == wanted)
        .ok_or_else(|| anyhow!("unknown filter kind '{}'", name))
}

fn read_channels(path: &str) -> Result<(hound::WavSpec, Vec<Vec<f32>>)> {
    let mut reader = hound::WavReader::open(path).with_context(|| format!("opening {}", path))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<_, _>>()?
        }
    };

    if samples.is_empty() {
        return Err(anyhow!("{} contains no samples", path));
    }

    // De-interleave
    let channels = spec.channels as usize;
    let mut split = vec![Vec::with_capacity(samples.len() / channels); channels];
    for frame in samples.chunks(channels) {
        for (channel, &sample) in split.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    Ok((spec, split))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        return Err(anyhow!(
            "usage: {} <input.wav> <output.wav> [kind] [cutoff] [q] [gain_db]",
            args[0]
        ));
    }

    let kind = parse_kind(args.get(3).map(String::as_str).unwrap_or("low_pass"))?;
    let cutoff: f32 = args.get(4).map_or(Ok(1000.0), |s| s.parse())?;
    let q: f32 = args.get(5).map_or(Ok(std::f32::consts::FRAC_1_SQRT_2), |s| s.parse())?;
    let gain: f32 = args.get(6).map_or(Ok(0.0), |s| s.parse())?;

    let (spec, mut channels) = read_channels(&args[1])?;
    let config = FilterConfig::new(cutoff, spec.sample_rate, q).with_gain(gain);

    // One filter per channel so their memories stay independent
    for channel in channels.iter_mut() {
        let mut filter = BiquadFilter::new(kind, config)?;
        filter.process_block(channel)?;
    }

    let out_spec = hound::WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&args[2], out_spec)?;
    let frames = channels[0].len();
    for i in 0..frames {
        for channel in &channels {
            writer.write_sample(channel[i])?;
        }
    }
    writer.finalize()?;

    println!(
        "Wrote {} frames through a {} filter ({} Hz, Q {}, {} dB) to {}",
        frames, kind, cutoff, q, gain, args[2]
    );
    Ok(())
}
