//! Floating-point sample types the filters operate on.

use std::fmt::Debug;

use num_traits::{Float, FloatConst};

use crate::engine::{Backend, kernels};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point type that can flow through a biquad filter.
///
/// Implemented for `f32` and `f64`. The trait is sealed: the vectorized
/// block kernels exist only for these two types.
///
/// # Examples
///
/// ```
/// use biquad_filters::{BiquadFilter, Sample};
///
/// fn settle<T: Sample>(filter: &mut BiquadFilter<T>, value: T) -> T {
///     let mut last = T::zero();
///     for _ in 0..256 {
///         last = filter.process(value).unwrap_or(last);
///     }
///     last
/// }
///
/// let mut filter = BiquadFilter::<f32>::low_pass(1000.0, 44100, 0.707).unwrap();
/// assert!((settle(&mut filter, 1.0) - 1.0).abs() < 1e-3);
/// ```
pub trait Sample: Float + FloatConst + Default + Debug + Send + Sync + 'static + sealed::Sealed {
    /// Converts an `f64` literal or parameter into this type.
    fn from_f64(value: f64) -> Self;

    /// Widens this value to `f64` (used for error payloads and logging).
    fn as_f64(self) -> f64;

    /// Computes `out[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]` where `x[n]` is
    /// `history[n + 2]`, using the kernel for `backend`.
    ///
    /// Backends the running CPU does not support fall back to the scalar kernel.
    #[doc(hidden)]
    fn feed_forward(backend: Backend, taps: [Self; 3], history: &[Self], out: &mut [Self]);
}

impl Sample for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn feed_forward(backend: Backend, taps: [Self; 3], history: &[Self], out: &mut [Self]) {
        kernels::feed_forward_f32(backend, taps, history, out);
    }
}

impl Sample for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn feed_forward(backend: Backend, taps: [Self; 3], history: &[Self], out: &mut [Self]) {
        kernels::feed_forward_f64(backend, taps, history, out);
    }
}
