//! Error types reported by filter construction, parameter changes and processing.
//!
//! Every failure is returned to the caller; nothing in the crate panics on bad
//! input, and a filter is left in its last valid state after any error.

use std::fmt;

use crate::engine::Backend;

/// A single parameter value was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Cutoff frequency was zero, negative or not finite
    InvalidCutoff(f64),
    /// Sample rate was zero
    InvalidSampleRate(u32),
    /// Q factor was zero, negative or not finite
    InvalidQFactor(f64),
    /// Bandwidth (in octaves) was zero, negative or not finite
    InvalidBandwidth(f64),
    /// Gain (in dB) was not finite
    InvalidGain(f64),
    /// Cutoff frequency lies above half the sample rate
    AboveNyquist { cutoff: f64, nyquist: f64 },
    /// The parameters produced an unusable transfer function (zero `a0` or
    /// non-finite coefficients)
    DegenerateResponse,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCutoff(v) => write!(f, "invalid cutoff frequency: {} Hz", v),
            ValidationError::InvalidSampleRate(v) => write!(f, "invalid sample rate: {} Hz", v),
            ValidationError::InvalidQFactor(v) => write!(f, "invalid Q factor: {}", v),
            ValidationError::InvalidBandwidth(v) => {
                write!(f, "invalid bandwidth: {} octaves", v)
            }
            ValidationError::InvalidGain(v) => write!(f, "invalid gain: {} dB", v),
            ValidationError::AboveNyquist { cutoff, nyquist } => write!(
                f,
                "cutoff frequency {} Hz exceeds the Nyquist frequency {} Hz",
                cutoff, nyquist
            ),
            ValidationError::DegenerateResponse => {
                write!(f, "parameters produce a degenerate transfer function")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A filter or engine could not be created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstructionError {
    /// The `a0` coefficient was zero or not finite
    DegenerateDenominator,
    /// A normalized coefficient overflowed to infinity or NaN
    NonFiniteCoefficients,
    /// One of the filter parameters was rejected
    InvalidParameter(ValidationError),
    /// The requested block backend is not available on this CPU or build
    UnsupportedBackend(Backend),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::DegenerateDenominator => {
                write!(f, "a0 coefficient must be finite and non-zero")
            }
            ConstructionError::NonFiniteCoefficients => {
                write!(f, "coefficients must all be finite")
            }
            ConstructionError::InvalidParameter(err) => write!(f, "invalid parameter: {}", err),
            ConstructionError::UnsupportedBackend(backend) => {
                write!(f, "block backend '{}' is not supported here", backend)
            }
        }
    }
}

impl std::error::Error for ConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstructionError::InvalidParameter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ConstructionError {
    fn from(value: ValidationError) -> Self {
        ConstructionError::InvalidParameter(value)
    }
}

/// Samples could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingError {
    /// The buffer contained no samples
    EmptyBuffer,
    /// The filter is bypassed and refuses to process
    Bypassed,
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::EmptyBuffer => write!(f, "sample buffer is empty"),
            ProcessingError::Bypassed => write!(f, "filter is bypassed"),
        }
    }
}

impl std::error::Error for ProcessingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_converts_into_construction_error() {
        let err: ConstructionError = ValidationError::InvalidSampleRate(0).into();
        assert_eq!(
            err,
            ConstructionError::InvalidParameter(ValidationError::InvalidSampleRate(0))
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_messages() {
        let err = ValidationError::AboveNyquist {
            cutoff: 30000.0,
            nyquist: 22050.0,
        };
        assert_eq!(
            err.to_string(),
            "cutoff frequency 30000 Hz exceeds the Nyquist frequency 22050 Hz"
        );
        assert_eq!(ProcessingError::Bypassed.to_string(), "filter is bypassed");
        assert_eq!(
            ConstructionError::UnsupportedBackend(Backend::Avx).to_string(),
            "block backend 'avx' is not supported here"
        );
        assert_eq!(
            ConstructionError::NonFiniteCoefficients.to_string(),
            "coefficients must all be finite"
        );
    }
}
