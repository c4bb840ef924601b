//! Gain-bearing responses: peaking EQ, low shelf and high shelf.

use super::{Warped, shelf_amplitude};
use crate::Sample;
use crate::engine::Coefficients;

/// Peaking (bell) EQ: boosts or cuts by `gain_db` around `cutoff`.
///
/// # Examples
///
/// ```
/// use biquad_filters::design::peaking_eq;
///
/// let c = peaking_eq(1000.0_f64, 48000, 1.0, 6.0);
/// assert!((c.magnitude_db(1000.0, 48000) - 6.0).abs() < 1e-9);
/// ```
pub fn peaking_eq<T: Sample>(cutoff: T, sample_rate: u32, q: T, gain_db: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let a = shelf_amplitude(gain_db);
    let one = T::one();
    let mid = -T::from_f64(2.0) * w.cos_w0;

    Coefficients::new(
        one + w.alpha * a,
        mid,
        one - w.alpha * a,
        one + w.alpha / a,
        mid,
        one - w.alpha / a,
    )
}

/// Low shelf: applies `gain_db` below `cutoff`, unity gain above.
pub fn low_shelf<T: Sample>(cutoff: T, sample_rate: u32, q: T, gain_db: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let a = shelf_amplitude(gain_db);
    let one = T::one();
    let two = T::from_f64(2.0);
    let slope = two * a.sqrt() * w.alpha;
    let (ap1, am1) = (a + one, a - one);

    Coefficients::new(
        a * (ap1 - am1 * w.cos_w0 + slope),
        two * a * (am1 - ap1 * w.cos_w0),
        a * (ap1 - am1 * w.cos_w0 - slope),
        ap1 + am1 * w.cos_w0 + slope,
        -two * (am1 + ap1 * w.cos_w0),
        ap1 + am1 * w.cos_w0 - slope,
    )
}

/// High shelf: applies `gain_db` above `cutoff`, unity gain below.
pub fn high_shelf<T: Sample>(cutoff: T, sample_rate: u32, q: T, gain_db: T) -> Coefficients<T> {
    let w = Warped::new(cutoff, sample_rate, q);
    let a = shelf_amplitude(gain_db);
    let one = T::one();
    let two = T::from_f64(2.0);
    let slope = two * a.sqrt() * w.alpha;
    let (ap1, am1) = (a + one, a - one);

    Coefficients::new(
        a * (ap1 + am1 * w.cos_w0 + slope),
        -two * a * (am1 + ap1 * w.cos_w0),
        a * (ap1 + am1 * w.cos_w0 - slope),
        ap1 - am1 * w.cos_w0 + slope,
        two * (am1 - ap1 * w.cos_w0),
        ap1 - am1 * w.cos_w0 - slope,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const FS: u32 = 48000;

    fn close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_peaking_boost_and_cut() {
        let boost = peaking_eq(1000.0_f64, FS, 1.0, 6.0);
        close(boost.magnitude_db(1000.0, FS), 6.0, 1e-9);
        close(boost.magnitude_db(20.0, FS), 0.0, 0.01);
        close(boost.magnitude_db(20000.0, FS), 0.0, 0.01);

        let cut = peaking_eq(1000.0_f64, FS, 1.0, -6.0);
        close(cut.magnitude_db(1000.0, FS), -6.0, 1e-9);
    }

    #[test]
    fn test_peaking_zero_gain_is_flat() {
        let c = peaking_eq(1000.0_f64, FS, 2.0, 0.0);
        assert_eq!(c.b0, c.a0);
        assert_eq!(c.b2, c.a2);
        for freq in [50.0, 1000.0, 15000.0] {
            close(c.magnitude(freq, FS), 1.0, 1e-12);
        }
    }

    #[test]
    fn test_low_shelf_response() {
        let c = low_shelf(200.0_f64, FS, FRAC_1_SQRT_2, 9.0);
        close(c.magnitude_db(0.0, FS), 9.0, 1e-6);
        close(c.magnitude_db(20000.0, FS), 0.0, 1e-3);
        // Half the shelf gain at the corner
        close(c.magnitude_db(200.0, FS), 4.5, 1e-6);
        assert!(c.is_stable());
    }

    #[test]
    fn test_high_shelf_response() {
        let c = high_shelf(5000.0_f64, FS, FRAC_1_SQRT_2, -12.0);
        close(c.magnitude_db(24000.0, FS), -12.0, 1e-6);
        close(c.magnitude_db(0.0, FS), 0.0, 1e-6);
        close(c.magnitude_db(5000.0, FS), -6.0, 1e-6);
        assert!(c.is_stable());
    }

    #[test]
    fn test_shelves_mirror_each_other() {
        let low = low_shelf(1000.0_f64, FS, 1.0, 6.0);
        let high = high_shelf(1000.0_f64, FS, 1.0, -6.0);
        // A low boost equals a high cut plus a broadband boost
        for freq in [30.0, 1000.0, 18000.0] {
            close(
                low.magnitude_db(freq, FS),
                high.magnitude_db(freq, FS) + 6.0,
                1e-6,
            );
        }
    }

    #[test]
    fn test_shelves_at_nyquist_are_valid() {
        assert!(low_shelf(24000.0_f64, FS, FRAC_1_SQRT_2, 6.0).normalized().is_ok());
        assert!(high_shelf(24000.0_f32, FS, std::f32::consts::FRAC_1_SQRT_2, 6.0)
            .normalized()
            .is_ok());
    }
}
