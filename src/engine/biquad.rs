//! The biquad recurrence evaluator.

use super::{Backend, Coefficients, State};
use crate::Sample;
use crate::error::{ConstructionError, ProcessingError};

/// Number of samples staged per vectorized block.
const BLOCK: usize = 64;

/// A single-channel Direct Form I biquad section.
///
/// Holds normalized coefficients and the delay state, and evaluates
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// one sample at a time or over whole buffers. State carries across calls.
/// An engine is not internally synchronized; drive each instance from one
/// stream at a time.
///
/// # Examples
///
/// ```
/// use biquad_filters::{BiquadEngine, Coefficients};
///
/// let mut engine = BiquadEngine::new(Coefficients::<f32>::identity()).unwrap();
/// let mut ramp = [0.0, 1.0, 2.0, 3.0, 4.0];
/// engine.process_block(&mut ramp).unwrap();
/// assert_eq!(ramp, [0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone)]
pub struct BiquadEngine<T: Sample> {
    coefficients: Coefficients<T>,
    state: State<T>,
    backend: Backend,
    processed: u64,
}

impl<T: Sample> BiquadEngine<T> {
    /// Creates an engine using the backend chosen by [`Backend::detect`].
    ///
    /// Fails when `a0` is zero or not finite.
    pub fn new(coefficients: Coefficients<T>) -> Result<Self, ConstructionError> {
        Self::with_backend(coefficients, Backend::detect())
    }

    /// Creates an engine pinned to a specific block backend.
    pub fn with_backend(
        coefficients: Coefficients<T>,
        backend: Backend,
    ) -> Result<Self, ConstructionError> {
        if !backend.is_supported() {
            return Err(ConstructionError::UnsupportedBackend(backend));
        }

        Ok(Self {
            coefficients: coefficients.normalized()?,
            state: State::default(),
            backend,
            processed: 0,
        })
    }

    /// Filters one sample and advances the state by one step.
    #[inline]
    pub fn process(&mut self, sample: T) -> T {
        let c = &self.coefficients;
        let s = &mut self.state;

        let output = c.b0 * sample + c.b1 * s.x1 + c.b2 * s.x2 - c.a1 * s.y1 - c.a2 * s.y2;

        s.x2 = s.x1;
        s.x1 = sample;
        s.y2 = s.y1;
        s.y1 = output;

        self.processed += 1;
        output
    }

    /// Filters a buffer in place, in index order.
    ///
    /// The result and final state are identical to calling [`process`](Self::process)
    /// on each element in turn, whichever backend is active. An empty buffer
    /// is rejected and nothing changes.
    pub fn process_block(&mut self, samples: &mut [T]) -> Result<(), ProcessingError> {
        if samples.is_empty() {
            return Err(ProcessingError::EmptyBuffer);
        }

        match self.backend {
            Backend::Scalar => {
                for sample in samples.iter_mut() {
                    *sample = self.process(*sample);
                }
            }
            backend => self.process_vectorized(backend, samples),
        }

        Ok(())
    }

    /// Runs the feed-forward half through the vector kernel, then resolves
    /// the feedback half sequentially.
    fn process_vectorized(&mut self, backend: Backend, samples: &mut [T]) {
        let taps = self.coefficients.feed_forward_taps();
        let (a1, a2) = (self.coefficients.a1, self.coefficients.a2);
        let mut history = [T::zero(); BLOCK + 2];

        for chunk in samples.chunks_mut(BLOCK) {
            let len = chunk.len();
            history[0] = self.state.x2;
            history[1] = self.state.x1;
            history[2..len + 2].copy_from_slice(chunk);

            T::feed_forward(backend, taps, &history[..len + 2], chunk);

            for sample in chunk.iter_mut() {
                let output = *sample - a1 * self.state.y1 - a2 * self.state.y2;
                self.state.y2 = self.state.y1;
                self.state.y1 = output;
                *sample = output;
            }

            self.state.x2 = history[len];
            self.state.x1 = history[len + 1];
            self.processed += len as u64;
        }
    }

    /// Replaces the coefficients and clears the state.
    ///
    /// On failure the engine keeps its previous coefficients and state.
    pub fn set_coefficients(&mut self, coefficients: Coefficients<T>) -> Result<(), ConstructionError> {
        self.coefficients = coefficients.normalized()?;
        self.reset();
        Ok(())
    }

    /// Zeroes the delay state and the processed-sample counter.
    pub fn reset(&mut self) {
        self.state = State::default();
        self.processed = 0;
    }

    /// The normalized coefficients currently in use.
    pub fn coefficients(&self) -> &Coefficients<T> {
        &self.coefficients
    }

    /// The current delay state.
    pub fn state(&self) -> &State<T> {
        &self.state
    }

    /// The block backend this engine dispatches to.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Samples processed since construction or the last reset. Diagnostic only.
    pub fn processed_samples(&self) -> u64 {
        self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn engine<T: Sample>(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> BiquadEngine<T> {
        let c = Coefficients::new(
            T::from_f64(b0),
            T::from_f64(b1),
            T::from_f64(b2),
            T::from_f64(a0),
            T::from_f64(a1),
            T::from_f64(a2),
        );
        BiquadEngine::new(c).unwrap()
    }

    fn noise(len: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_identity_passes_samples() {
        let mut filter = engine::<f64>(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        for x in [0.0, 1.0, -0.5, 123.25, f64::MIN_POSITIVE] {
            assert_eq!(filter.process(x), x);
        }
    }

    #[test]
    fn test_zero_numerator_outputs_zero() {
        let mut filter = engine::<f32>(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        for x in [1.0, -3.0, 0.25] {
            assert_eq!(filter.process(x), 0.0);
        }
    }

    #[test]
    fn test_sign_inversion() {
        let mut filter = engine::<f64>(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        for x in [1.0, -3.0, 0.25] {
            assert_eq!(filter.process(x), -x);
        }
    }

    #[test]
    fn test_rejects_zero_a0() {
        let c = Coefficients::new(1.0_f64, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            BiquadEngine::new(c).unwrap_err(),
            ConstructionError::DegenerateDenominator
        );
    }

    #[test]
    fn test_normalizes_on_construction() {
        let filter = engine::<f64>(2.0, 4.0, 2.0, 2.0, 1.0, 0.5);
        let c = filter.coefficients();
        assert_eq!((c.b0, c.b1, c.b2, c.a0, c.a1, c.a2), (1.0, 2.0, 1.0, 1.0, 0.5, 0.25));
    }

    #[test]
    fn test_recurrence_uses_previous_state() {
        // y[n] = x[n] + 0.5*x[n-1] - 0.25*y[n-1]
        let mut filter = engine::<f64>(1.0, 0.5, 0.0, 1.0, 0.25, 0.0);
        assert_eq!(filter.process(1.0), 1.0);
        assert_eq!(filter.process(0.0), 0.5 - 0.25);
        assert_eq!(filter.process(0.0), -0.25 * 0.25);
        assert_eq!(filter.processed_samples(), 3);
    }

    #[test]
    fn test_state_shifts() {
        let mut filter = engine::<f64>(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        filter.process(1.0);
        filter.process(2.0);
        assert_eq!(
            *filter.state(),
            State {
                x1: 2.0,
                x2: 1.0,
                y1: 2.0,
                y2: 1.0
            }
        );
    }

    #[test]
    fn test_empty_block_rejected() {
        let mut filter = engine::<f32>(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let mut empty: [f32; 0] = [];
        assert_eq!(filter.process_block(&mut empty), Err(ProcessingError::EmptyBuffer));
        assert_eq!(filter.processed_samples(), 0);
    }

    #[test]
    fn test_reset_clears_state_and_counter() {
        let mut filter = engine::<f64>(0.5, 0.5, 0.0, 1.0, -0.5, 0.0);
        let first = filter.process(1.0);
        filter.process(0.3);
        filter.reset();
        assert_eq!(*filter.state(), State::default());
        assert_eq!(filter.processed_samples(), 0);
        assert_eq!(filter.process(1.0), first);
    }

    #[test]
    fn test_set_coefficients_resets_state() {
        let mut filter = engine::<f64>(1.0, 0.0, 0.0, 1.0, -0.9, 0.0);
        filter.process(1.0);
        let replacement = Coefficients::new(0.5, 0.0, 0.0, 1.0, 0.0, 0.0);
        filter.set_coefficients(replacement).unwrap();
        assert_eq!(*filter.state(), State::default());
        assert_eq!(filter.process(1.0), 0.5);
    }

    #[test]
    fn test_set_coefficients_failure_keeps_everything() {
        let mut filter = engine::<f64>(1.0, 0.0, 0.0, 1.0, -0.9, 0.0);
        filter.process(1.0);
        let before = (*filter.coefficients(), *filter.state());
        let bad = Coefficients::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(filter.set_coefficients(bad).is_err());
        assert_eq!((*filter.coefficients(), *filter.state()), before);
    }

    #[test]
    fn test_unsupported_backend_rejected() {
        let c = Coefficients::<f32>::identity();
        for backend in Backend::ALL {
            let result = BiquadEngine::with_backend(c, backend);
            assert_eq!(result.is_ok(), backend.is_supported());
        }
    }

    #[test]
    fn test_block_matches_per_sample_on_every_backend() {
        let raw = Coefficients::new(0.0675, 0.135, 0.0675, 1.143, -1.6, 0.687);
        let input = noise(4096 + 5, 7);

        for len in [1, 3, 16, 63, 64, 65, 4096 + 5] {
            let mut reference = BiquadEngine::with_backend(raw, Backend::Scalar).unwrap();
            let expected: Vec<f64> = input[..len].iter().map(|&x| reference.process(x)).collect();

            for backend in Backend::available() {
                let mut filter = BiquadEngine::with_backend(raw, backend).unwrap();
                let mut block = input[..len].to_vec();
                filter.process_block(&mut block).unwrap();
                assert_eq!(block, expected, "backend {} len {}", backend, len);
                assert_eq!(filter.state(), reference.state());
                assert_eq!(filter.processed_samples(), len as u64);
            }
        }
    }

    #[test]
    fn test_state_carries_across_blocks() {
        let raw = Coefficients::new(0.2_f32, 0.3, 0.1, 1.0, -0.4, 0.2);
        let input: Vec<f32> = noise(200, 11).into_iter().map(|x| x as f32).collect();

        for backend in Backend::available() {
            let mut whole = BiquadEngine::with_backend(raw, backend).unwrap();
            let mut expected = input.clone();
            whole.process_block(&mut expected).unwrap();

            let mut split = BiquadEngine::with_backend(raw, backend).unwrap();
            let mut pieces = input.clone();
            let (head, tail) = pieces.split_at_mut(37);
            split.process_block(head).unwrap();
            let (mid, rest) = tail.split_at_mut(1);
            split.process_block(mid).unwrap();
            split.process_block(rest).unwrap();

            assert_eq!(pieces, expected, "backend {}", backend);
        }
    }
}
