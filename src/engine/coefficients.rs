//! Transfer-function coefficients and delay-line state.

use crate::Sample;
use crate::error::ConstructionError;

/// The six taps of a biquad transfer function.
///
/// ```text
///         b0 + b1*z^-1 + b2*z^-2
/// H(z) = ------------------------
///         a0 + a1*z^-1 + a2*z^-2
/// ```
///
/// # Examples
///
/// ```
/// use biquad_filters::Coefficients;
///
/// let raw = Coefficients::new(2.0_f64, 0.0, 0.0, 2.0, 1.0, 0.0);
/// let normalized = raw.normalized().unwrap();
/// assert_eq!(normalized.b0, 1.0);
/// assert_eq!(normalized.a0, 1.0);
/// assert_eq!(normalized.a1, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Feedforward coefficient for x[n]
    pub b0: T,
    /// Feedforward coefficient for x[n-1]
    pub b1: T,
    /// Feedforward coefficient for x[n-2]
    pub b2: T,
    /// Output scale; always 1 once normalized
    pub a0: T,
    /// Feedback coefficient for y[n-1]
    pub a1: T,
    /// Feedback coefficient for y[n-2]
    pub a2: T,
}

impl<T: Sample> Coefficients<T> {
    /// Creates a coefficient set from raw taps.
    pub fn new(b0: T, b1: T, b2: T, a0: T, a1: T, a2: T) -> Self {
        Self {
            b0,
            b1,
            b2,
            a0,
            a1,
            a2,
        }
    }

    /// Coefficients that pass every sample through unchanged.
    pub fn identity() -> Self {
        let (zero, one) = (T::zero(), T::one());
        Self::new(one, zero, zero, one, zero, zero)
    }

    /// Divides every tap by `a0`, leaving `a0 == 1`.
    ///
    /// Fails when `a0` is zero or not finite, or when any resulting tap is
    /// infinite or NaN.
    pub fn normalized(self) -> Result<Self, ConstructionError> {
        if self.a0.is_zero() || !self.a0.is_finite() {
            return Err(ConstructionError::DegenerateDenominator);
        }

        let a0_inv = T::one() / self.a0;
        let normalized = Self {
            b0: self.b0 * a0_inv,
            b1: self.b1 * a0_inv,
            b2: self.b2 * a0_inv,
            a0: T::one(),
            a1: self.a1 * a0_inv,
            a2: self.a2 * a0_inv,
        };

        let taps = [
            normalized.b0,
            normalized.b1,
            normalized.b2,
            normalized.a1,
            normalized.a2,
        ];
        if !taps.iter().all(|tap| tap.is_finite()) {
            return Err(ConstructionError::NonFiniteCoefficients);
        }

        Ok(normalized)
    }

    /// Returns true if both poles lie strictly inside the unit circle.
    ///
    /// Uses the stability triangle for a monic denominator `1 + a1*z^-1 + a2*z^-2`.
    pub fn is_stable(&self) -> bool {
        let a1 = self.a1 / self.a0;
        let a2 = self.a2 / self.a0;
        a2.abs() < T::one() && a1.abs() < T::one() + a2
    }

    /// Magnitude of the frequency response at `frequency` Hz (linear, not dB).
    pub fn magnitude(&self, frequency: T, sample_rate: u32) -> T {
        let two = T::from_f64(2.0);
        let w = two * T::PI() * frequency / T::from_f64(f64::from(sample_rate));
        let (sin_w, cos_w) = w.sin_cos();
        let (sin_2w, cos_2w) = (two * w).sin_cos();

        let num_re = self.b0 + self.b1 * cos_w + self.b2 * cos_2w;
        let num_im = -(self.b1 * sin_w + self.b2 * sin_2w);
        let den_re = self.a0 + self.a1 * cos_w + self.a2 * cos_2w;
        let den_im = -(self.a1 * sin_w + self.a2 * sin_2w);

        num_re.hypot(num_im) / den_re.hypot(den_im)
    }

    /// Magnitude of the frequency response at `frequency` Hz in decibels.
    pub fn magnitude_db(&self, frequency: T, sample_rate: u32) -> T {
        T::from_f64(20.0) * self.magnitude(frequency, sample_rate).log10()
    }

    pub(crate) fn feed_forward_taps(&self) -> [T; 3] {
        [self.b0, self.b1, self.b2]
    }
}

impl<T: Sample> Default for Coefficients<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// The filter's memory: the two previous inputs and outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State<T> {
    /// Input at t-1
    pub x1: T,
    /// Input at t-2
    pub x2: T,
    /// Output at t-1
    pub y1: T,
    /// Output at t-2
    pub y2: T,
}
