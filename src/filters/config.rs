//! User-facing filter parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Sample;
use crate::error::ValidationError;

const DEFAULT_CUTOFF_HZ: f64 = 1000.0;
const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// The parameters a filter's coefficients are designed from.
///
/// # Examples
///
/// ```
/// use biquad_filters::FilterConfig;
///
/// let config = FilterConfig::<f64>::new(250.0, 48000, 0.9)
///     .with_gain(-4.5)
///     .with_bypass(false);
/// assert!(config.validate().is_ok());
/// assert!(config.with_sample_rate(400).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "T: Sample + Deserialize<'de>"))
)]
pub struct FilterConfig<T> {
    /// Cutoff or center frequency in Hz
    #[cfg_attr(feature = "serde", serde(alias = "freq", alias = "frequency_hz"))]
    pub cutoff: T,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Quality factor
    #[cfg_attr(feature = "serde", serde(alias = "q"))]
    pub q_factor: T,
    /// Gain in dB (peaking and shelf responses only)
    #[cfg_attr(feature = "serde", serde(alias = "gain_db"))]
    pub gain: T,
    /// Band-pass normalization: skirt gain (true) or 0 dB peak (false)
    pub constant_skirt_gain: bool,
    /// When set, processing is refused
    pub bypass: bool,
}

impl<T: Sample> FilterConfig<T> {
    /// Creates a configuration with 0 dB gain, peak-normalized band-pass and no bypass.
    pub fn new(cutoff: T, sample_rate: u32, q_factor: T) -> Self {
        Self {
            cutoff,
            sample_rate,
            q_factor,
            gain: T::zero(),
            constant_skirt_gain: false,
            bypass: false,
        }
    }

    /// Returns a copy with a different cutoff.
    pub fn with_cutoff(mut self, cutoff: T) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Returns a copy with a different Q factor.
    pub fn with_q_factor(mut self, q_factor: T) -> Self {
        self.q_factor = q_factor;
        self
    }

    /// Returns a copy with a different gain in dB.
    pub fn with_gain(mut self, gain: T) -> Self {
        self.gain = gain;
        self
    }

    /// Returns a copy with the band-pass normalization flag set.
    pub fn with_constant_skirt_gain(mut self, constant_skirt_gain: bool) -> Self {
        self.constant_skirt_gain = constant_skirt_gain;
        self
    }

    /// Returns a copy with the bypass flag set.
    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> T {
        T::from_f64(f64::from(self.sample_rate)) / T::from_f64(2.0)
    }

    /// Checks every parameter.
    ///
    /// Sample rate, cutoff and Q must be positive, gain finite, and the cutoff
    /// may not exceed [`nyquist`](Self::nyquist). The cutoff may equal it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_rate == 0 {
            return Err(ValidationError::InvalidSampleRate(self.sample_rate));
        }
        if !is_positive(self.cutoff) {
            return Err(ValidationError::InvalidCutoff(self.cutoff.as_f64()));
        }
        if !is_positive(self.q_factor) {
            return Err(ValidationError::InvalidQFactor(self.q_factor.as_f64()));
        }
        if !self.gain.is_finite() {
            return Err(ValidationError::InvalidGain(self.gain.as_f64()));
        }

        let nyquist = self.nyquist();
        if self.cutoff > nyquist {
            return Err(ValidationError::AboveNyquist {
                cutoff: self.cutoff.as_f64(),
                nyquist: nyquist.as_f64(),
            });
        }

        Ok(())
    }
}

impl<T: Sample> Default for FilterConfig<T> {
    fn default() -> Self {
        Self::new(
            T::from_f64(DEFAULT_CUTOFF_HZ),
            DEFAULT_SAMPLE_RATE,
            T::FRAC_1_SQRT_2(),
        )
    }
}

/// Strictly positive and finite (rejects NaN).
pub(crate) fn is_positive<T: Sample>(value: T) -> bool {
    value > T::zero() && value.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FilterConfig::<f32>::default();
        assert_eq!(config.cutoff, 1000.0);
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.q_factor, std::f32::consts::FRAC_1_SQRT_2);
        assert!(!config.bypass);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_each_bad_parameter() {
        let ok = FilterConfig::<f64>::new(1000.0, 44100, 0.7);
        assert_eq!(
            ok.with_sample_rate(0).validate(),
            Err(ValidationError::InvalidSampleRate(0))
        );
        assert_eq!(
            ok.with_cutoff(0.0).validate(),
            Err(ValidationError::InvalidCutoff(0.0))
        );
        assert_eq!(
            ok.with_cutoff(-10.0).validate(),
            Err(ValidationError::InvalidCutoff(-10.0))
        );
        assert_eq!(
            ok.with_q_factor(0.0).validate(),
            Err(ValidationError::InvalidQFactor(0.0))
        );
        assert!(matches!(
            ok.with_q_factor(f64::NAN).validate(),
            Err(ValidationError::InvalidQFactor(_))
        ));
        assert!(matches!(
            ok.with_gain(f64::INFINITY).validate(),
            Err(ValidationError::InvalidGain(_))
        ));
    }

    #[test]
    fn test_nyquist_boundary() {
        let at = FilterConfig::<f64>::new(22050.0, 44100, 0.7);
        assert!(at.validate().is_ok());
        assert_eq!(
            at.with_cutoff(22050.000001).validate(),
            Err(ValidationError::AboveNyquist {
                cutoff: 22050.000001,
                nyquist: 22050.0
            })
        );
    }

    #[test]
    fn test_negative_gain_is_allowed() {
        let config = FilterConfig::<f32>::new(1000.0, 48000, 1.0).with_gain(-24.0);
        assert!(config.validate().is_ok());
    }
}
