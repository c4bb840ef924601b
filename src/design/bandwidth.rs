//! Conversion between Q and bandwidth in octaves.

use crate::Sample;

/// Converts a bandwidth in octaves to the equivalent Q factor.
///
/// `Q = 1 / (2 * sinh(ln(2)/2 * bandwidth))`
///
/// # Examples
///
/// ```
/// use biquad_filters::design::q_from_bandwidth;
///
/// let q = q_from_bandwidth(1.0_f64);
/// assert!((q - std::f64::consts::SQRT_2).abs() < 1e-3);
/// ```
pub fn q_from_bandwidth<T: Sample>(bandwidth: T) -> T {
    let two = T::from_f64(2.0);
    T::one() / (two * (T::LN_2() / two * bandwidth).sinh())
}

/// Converts a Q factor to the equivalent bandwidth in octaves.
///
/// `bandwidth = 2 * asinh(1 / (2*Q)) / ln(2)`
pub fn bandwidth_from_q<T: Sample>(q: T) -> T {
    let two = T::from_f64(2.0);
    two * (T::one() / (two * q)).asinh() / T::LN_2()
}
