//! The closed set of filter responses.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::FilterConfig;
use crate::Sample;
use crate::design;
use crate::engine::Coefficients;

/// The response a [`BiquadFilter`](super::BiquadFilter) implements.
///
/// Fixed when the filter is built; each variant maps to one design function
/// in [`crate::design`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterKind {
    /// Low-pass filter - attenuates frequencies above the cutoff
    LowPass,
    /// High-pass filter - attenuates frequencies below the cutoff
    HighPass,
    /// Band-pass filter - passes frequencies near the center, attenuates others
    BandPass,
    /// Notch/band-reject filter - attenuates frequencies near the center
    Notch,
    /// All-pass filter - passes all frequencies but shifts phase
    AllPass,
    /// Peaking EQ - boosts or cuts a band around the center
    PeakingEq,
    /// Low shelf - boosts or cuts everything below the cutoff
    LowShelf,
    /// High shelf - boosts or cuts everything above the cutoff
    HighShelf,
}

impl FilterKind {
    /// Every response, in declaration order.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::LowPass,
        FilterKind::HighPass,
        FilterKind::BandPass,
        FilterKind::Notch,
        FilterKind::AllPass,
        FilterKind::PeakingEq,
        FilterKind::LowShelf,
        FilterKind::HighShelf,
    ];

    /// Computes raw coefficients for this response from `config`.
    pub fn design<T: Sample>(self, config: &FilterConfig<T>) -> Coefficients<T> {
        let (fc, fs, q) = (config.cutoff, config.sample_rate, config.q_factor);
        match self {
            FilterKind::LowPass => design::low_pass(fc, fs, q),
            FilterKind::HighPass => design::high_pass(fc, fs, q),
            FilterKind::BandPass => design::band_pass(fc, fs, q, config.constant_skirt_gain),
            FilterKind::Notch => design::notch(fc, fs, q),
            FilterKind::AllPass => design::all_pass(fc, fs, q),
            FilterKind::PeakingEq => design::peaking_eq(fc, fs, q, config.gain),
            FilterKind::LowShelf => design::low_shelf(fc, fs, q, config.gain),
            FilterKind::HighShelf => design::high_shelf(fc, fs, q, config.gain),
        }
    }

    /// Returns true if the gain parameter affects this response.
    pub fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterKind::PeakingEq | FilterKind::LowShelf | FilterKind::HighShelf
        )
    }

    /// Returns true if the constant-skirt-gain flag affects this response.
    pub fn uses_skirt_gain(self) -> bool {
        self == FilterKind::BandPass
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::LowPass => "low-pass",
            FilterKind::HighPass => "high-pass",
            FilterKind::BandPass => "band-pass",
            FilterKind::Notch => "notch",
            FilterKind::AllPass => "all-pass",
            FilterKind::PeakingEq => "peaking EQ",
            FilterKind::LowShelf => "low shelf",
            FilterKind::HighShelf => "high shelf",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
