//! Pass, reject and phase responses: low-pass, high-pass, band-pass, notch, all-pass.
//!
//! All five share the denominator `(1 + alpha, -2*cos(w0), 1 - alpha)`.

use super::Warped;
use crate::Sample;
use crate::engine::Coefficients;

fn with_common_denominator<T: Sample>(w: Warped<T>, b0: T, b1: T, b2: T) -> Coefficients<T> {
    let two = T::from_f64(2.0);
    Coefficients::new(
        b0,
        b1,
        b2,
        T::one() + w.alpha,
        -two * w.cos_w0,
        T::one() - w.alpha,
    )
}

/// Second-order low-pass: attenuates frequencies above the cutoff.
///
/// # Examples
///
/// ```
/// use biquad_filters::design::low_pass;
///
/// let c = low_pass(1000.0_f64, 44100, std::f64::consts::FRAC_1_SQRT_2);
/// // Unity gain at DC
/// assert!((c.magnitude(0.0, 44100) - 1.0).abs() < 1e-9);
/// ```
pub fn low_pass<T: Sample>(cutoff: T, sample_rate: u32, q: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let b1 = T::one() - w.cos_w0;
    let b0 = b1 / T::from_f64(2.0);
    with_common_denominator(w, b0, b1, b0)
}

/// Second-order high-pass: attenuates frequencies below the cutoff.
pub fn high_pass<T: Sample>(cutoff: T, sample_rate: u32, q: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let b1 = -(T::one() + w.cos_w0);
    let b0 = -b1 / T::from_f64(2.0);
    with_common_denominator(w, b0, b1, b0)
}

/// Band-pass centred on `cutoff`.
///
/// With `constant_skirt_gain` the peak gain equals Q; otherwise the peak is
/// held at 0 dB.
pub fn band_pass<T: Sample>(
    cutoff: T,
    sample_rate: u32,
    q: T,
    constant_skirt_gain: bool,
) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let b0 = if constant_skirt_gain { q * w.alpha } else { w.alpha };
    with_common_denominator(w, b0, T::zero(), -b0)
}

/// Notch (band-reject): removes a narrow band around `cutoff`.
pub fn notch<T: Sample>(cutoff: T, sample_rate: u32, q: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let two = T::from_f64(2.0);
    with_common_denominator(w, T::one(), -two * w.cos_w0, T::one())
}

/// All-pass: unity magnitude everywhere, phase rotates through 180 degrees at `cutoff`.
pub fn all_pass<T: Sample>(cutoff: T, sample_rate: u32, q: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let two = T::from_f64(2.0);
    with_common_denominator(w, T::one() - w.alpha, -two * w.cos_w0, T::one() + w.alpha)
}
