//! Parameterized biquad filters.
//!
//! This module provides [`BiquadFilter`], which owns a set of musical
//! parameters (cutoff, sample rate, Q, gain, ...) and keeps a
//! [`BiquadEngine`] in sync with them. The coefficients come from Robert
//! Bristow-Johnson's Audio EQ Cookbook formulas in [`crate::design`].

use log::{debug, trace};

use super::config::is_positive;
use super::{FilterConfig, FilterKind};
use crate::Sample;
use crate::design::{bandwidth_from_q, q_from_bandwidth};
use crate::engine::{Backend, BiquadEngine, Coefficients, State};
use crate::error::{ConstructionError, ProcessingError, ValidationError};

/// A biquad filter with a fixed response and adjustable parameters.
///
/// Changing any parameter recomputes the coefficients and clears the
/// filter's memory, so the next sample starts from silence. Bypass is the
/// exception: it leaves coefficients and memory untouched, and while it is
/// set every `process` call fails instead of passing audio through.
///
/// A filter is not internally synchronized; drive each instance from one
/// stream at a time. Separate instances are fully independent.
///
/// # Examples
///
/// ```
/// use biquad_filters::BiquadFilter;
///
/// let mut filter = BiquadFilter::<f32>::low_pass(1000.0, 44100, 0.707).unwrap();
/// let mut block = [1.0_f32; 64];
/// filter.process_block(&mut block).unwrap();
/// assert!(block[0] < block[63]);
///
/// filter.set_cutoff(2000.0).unwrap();
/// assert!(filter.set_cutoff(30000.0).is_err());
/// assert_eq!(filter.cutoff(), 2000.0);
/// ```
#[derive(Debug, Clone)]
pub struct BiquadFilter<T: Sample> {
    kind: FilterKind,
    config: FilterConfig<T>,
    engine: BiquadEngine<T>,
}

impl<T: Sample> BiquadFilter<T> {
    /// Creates a filter of the given kind from a full configuration.
    ///
    /// Fails when the sample rate, cutoff or Q is not positive, the gain is
    /// not finite, or the cutoff lies above half the sample rate.
    pub fn new(kind: FilterKind, config: FilterConfig<T>) -> Result<Self, ConstructionError> {
        Self::with_backend(kind, config, Backend::detect())
    }

    /// Like [`new`](Self::new), pinning the engine to a block backend.
    pub fn with_backend(
        kind: FilterKind,
        config: FilterConfig<T>,
        backend: Backend,
    ) -> Result<Self, ConstructionError> {
        config.validate()?;
        let engine = BiquadEngine::with_backend(kind.design(&config), backend)?;

        debug!(
            "created {} filter: cutoff {:?} Hz, sample rate {} Hz, Q {:?}, backend {}",
            kind, config.cutoff, config.sample_rate, config.q_factor, backend
        );

        Ok(Self {
            kind,
            config,
            engine,
        })
    }

    /// Creates a low-pass filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff` - Cutoff frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    /// * `q` - Q factor; 1/sqrt(2) gives a Butterworth response
    pub fn low_pass(cutoff: T, sample_rate: u32, q: T) -> Result<Self, ConstructionError> {
        Self::new(FilterKind::LowPass, FilterConfig::new(cutoff, sample_rate, q))
    }

    /// Creates a high-pass filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff` - Cutoff frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    /// * `q` - Q factor
    pub fn high_pass(cutoff: T, sample_rate: u32, q: T) -> Result<Self, ConstructionError> {
        Self::new(FilterKind::HighPass, FilterConfig::new(cutoff, sample_rate, q))
    }

    /// Creates a band-pass filter.
    ///
    /// # Arguments
    ///
    /// * `center` - Center frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    /// * `q` - Q factor. Higher = narrower band
    /// * `constant_skirt_gain` - Peak gain equals Q when set; 0 dB peak otherwise
    pub fn band_pass(
        center: T,
        sample_rate: u32,
        q: T,
        constant_skirt_gain: bool,
    ) -> Result<Self, ConstructionError> {
        let config =
            FilterConfig::new(center, sample_rate, q).with_constant_skirt_gain(constant_skirt_gain);
        Self::new(FilterKind::BandPass, config)
    }

    /// Creates a notch (band-reject) filter.
    pub fn notch(center: T, sample_rate: u32, q: T) -> Result<Self, ConstructionError> {
        Self::new(FilterKind::Notch, FilterConfig::new(center, sample_rate, q))
    }

    /// Creates an all-pass filter. Useful for phase alignment and phasers.
    pub fn all_pass(frequency: T, sample_rate: u32, q: T) -> Result<Self, ConstructionError> {
        Self::new(FilterKind::AllPass, FilterConfig::new(frequency, sample_rate, q))
    }

    /// Creates a peaking EQ that boosts or cuts `gain_db` around `center`.
    pub fn peaking_eq(
        center: T,
        sample_rate: u32,
        q: T,
        gain_db: T,
    ) -> Result<Self, ConstructionError> {
        let config = FilterConfig::new(center, sample_rate, q).with_gain(gain_db);
        Self::new(FilterKind::PeakingEq, config)
    }

    /// Creates a low shelf that boosts or cuts `gain_db` below `cutoff`.
    pub fn low_shelf(
        cutoff: T,
        sample_rate: u32,
        q: T,
        gain_db: T,
    ) -> Result<Self, ConstructionError> {
        let config = FilterConfig::new(cutoff, sample_rate, q).with_gain(gain_db);
        Self::new(FilterKind::LowShelf, config)
    }

    /// Creates a high shelf that boosts or cuts `gain_db` above `cutoff`.
    pub fn high_shelf(
        cutoff: T,
        sample_rate: u32,
        q: T,
        gain_db: T,
    ) -> Result<Self, ConstructionError> {
        let config = FilterConfig::new(cutoff, sample_rate, q).with_gain(gain_db);
        Self::new(FilterKind::HighShelf, config)
    }

    /// Filters one sample.
    pub fn process(&mut self, sample: T) -> Result<T, ProcessingError> {
        if self.config.bypass {
            return Err(ProcessingError::Bypassed);
        }
        Ok(self.engine.process(sample))
    }

    /// Filters a buffer in place. Fails, leaving the buffer untouched, when
    /// bypassed or given an empty buffer.
    pub fn process_block(&mut self, samples: &mut [T]) -> Result<(), ProcessingError> {
        if self.config.bypass {
            return Err(ProcessingError::Bypassed);
        }
        self.engine.process_block(samples)
    }

    /// Clears the filter's memory without touching its parameters.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The response this filter was built with.
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Cutoff (or center) frequency in Hz.
    pub fn cutoff(&self) -> T {
        self.config.cutoff
    }

    /// Sets the cutoff frequency. It must be positive and at most half the sample rate.
    pub fn set_cutoff(&mut self, cutoff: T) -> Result<(), ValidationError> {
        self.apply(self.config.with_cutoff(cutoff))
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// Sets the sample rate. It must be positive and at least twice the cutoff.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> Result<(), ValidationError> {
        self.apply(self.config.with_sample_rate(sample_rate))
    }

    /// Quality factor.
    pub fn q_factor(&self) -> T {
        self.config.q_factor
    }

    /// Sets the quality factor. It must be positive.
    pub fn set_q_factor(&mut self, q_factor: T) -> Result<(), ValidationError> {
        self.apply(self.config.with_q_factor(q_factor))
    }

    /// Bandwidth in octaves, derived from the current Q.
    pub fn bandwidth(&self) -> T {
        bandwidth_from_q(self.config.q_factor)
    }

    /// Sets the bandwidth in octaves by converting it to Q.
    pub fn set_bandwidth(&mut self, bandwidth: T) -> Result<(), ValidationError> {
        let q = q_from_bandwidth(bandwidth);
        if !is_positive(bandwidth) || !is_positive(q) {
            return Err(ValidationError::InvalidBandwidth(bandwidth.as_f64()));
        }
        self.set_q_factor(q)
    }

    /// Gain in dB.
    pub fn gain(&self) -> T {
        self.config.gain
    }

    /// Sets the gain in dB. Only peaking and shelf responses are affected,
    /// but the value is stored (and the memory cleared) for every kind.
    pub fn set_gain(&mut self, gain: T) -> Result<(), ValidationError> {
        self.apply(self.config.with_gain(gain))
    }

    /// Band-pass normalization flag.
    pub fn constant_skirt_gain(&self) -> bool {
        self.config.constant_skirt_gain
    }

    /// Chooses skirt-gain (true) or 0 dB peak (false) band-pass normalization.
    pub fn set_constant_skirt_gain(
        &mut self,
        constant_skirt_gain: bool,
    ) -> Result<(), ValidationError> {
        self.apply(self.config.with_constant_skirt_gain(constant_skirt_gain))
    }

    /// Returns true while processing is refused.
    pub fn is_bypassed(&self) -> bool {
        self.config.bypass
    }

    /// Enables or disables bypass. Coefficients and memory are kept.
    pub fn set_bypass(&mut self, bypass: bool) {
        self.config.bypass = bypass;
    }

    /// A snapshot of every parameter.
    pub fn configuration(&self) -> FilterConfig<T> {
        self.config
    }

    /// Replaces every parameter at once. Either all of `config` is applied or,
    /// on error, none of it.
    pub fn set_configuration(&mut self, config: FilterConfig<T>) -> Result<(), ValidationError> {
        // Bypass alone never touches coefficients or memory
        if config.with_bypass(self.config.bypass) == self.config {
            self.set_bypass(config.bypass);
            return Ok(());
        }
        self.apply(config)
    }

    /// The normalized coefficients currently in use.
    pub fn coefficients(&self) -> &Coefficients<T> {
        self.engine.coefficients()
    }

    /// The filter's current memory.
    pub fn state(&self) -> &State<T> {
        self.engine.state()
    }

    /// The block backend the engine dispatches to.
    pub fn backend(&self) -> Backend {
        self.engine.backend()
    }

    /// Samples processed since the last parameter change or reset.
    pub fn processed_samples(&self) -> u64 {
        self.engine.processed_samples()
    }

    fn apply(&mut self, candidate: FilterConfig<T>) -> Result<(), ValidationError> {
        candidate.validate()?;
        self.engine
            .set_coefficients(self.kind.design(&candidate))
            .map_err(|_| ValidationError::DegenerateResponse)?;

        trace!(
            "{} filter retuned: cutoff {:?} Hz, sample rate {} Hz, Q {:?}, gain {:?} dB",
            self.kind, candidate.cutoff, candidate.sample_rate, candidate.q_factor, candidate.gain
        );

        self.config = candidate;
        Ok(())
    }
}
