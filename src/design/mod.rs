//! Coefficient design for each filter response.
//!
//! Every function here is pure: it maps musical parameters to raw (not yet
//! normalized) [`Coefficients`] using Robert Bristow-Johnson's Audio EQ
//! Cookbook bilinear-transform equations. No validation happens at this layer;
//! [`crate::filters::BiquadFilter`] checks parameters before calling in.
//!
//! With `w0 = 2*pi*cutoff/sample_rate`, `alpha = sin(w0)/(2*Q)` and, for the
//! gain-bearing responses, `A = 10^(gain/40)`.

mod bandwidth;
mod pass;
mod shelf;

pub use self::bandwidth::{bandwidth_from_q, q_from_bandwidth};
pub use self::pass::{all_pass, band_pass, high_pass, low_pass, notch};
pub use self::shelf::{high_shelf, low_shelf, peaking_eq};

#[cfg(doc)]
use crate::engine::Coefficients;
use crate::Sample;

/// Angular quantities shared by every response.
#[derive(Debug, Clone, Copy)]
struct Warped<T> {
    cos_w0: T,
    alpha: T,
}

impl<T: Sample> Warped<T> {
    fn new(cutoff: T, sample_rate: u32, q: T) -> Self {
        let two = T::from_f64(2.0);
        let w0 = two * T::PI() * cutoff / T::from_f64(f64::from(sample_rate));
        let (sin_w0, cos_w0) = w0.sin_cos();
        Self {
            cos_w0,
            alpha: sin_w0 / (two * q),
        }
    }
}

/// Amplitude `A = 10^(gain_db/40)`, the square root of the linear peak gain.
fn shelf_amplitude<T: Sample>(gain_db: T) -> T {
    T::from_f64(10.0).powf(gain_db / T::from_f64(40.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warped_quarter_sample_rate() {
        let w = Warped::new(11025.0_f64, 44100, std::f64::consts::FRAC_1_SQRT_2);
        assert!(w.cos_w0.abs() < 1e-15);
        assert!((w.alpha - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_shelf_amplitude() {
        assert_eq!(shelf_amplitude(0.0_f64), 1.0);
        assert!((shelf_amplitude(40.0_f64) - 10.0).abs() < 1e-12);
        assert!((shelf_amplitude(-6.0_f32).powi(2) - 0.501_187).abs() < 1e-5);
    }
}
