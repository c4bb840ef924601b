//! The numerical core: normalized coefficients, delay state and the
//! recurrence evaluator with its CPU-dispatched block paths.
//!
//! [`BiquadEngine`] knows nothing about cutoff frequencies or Q; it runs
//! whatever [`Coefficients`] it is given. Use [`crate::filters::BiquadFilter`]
//! to work in terms of musical parameters instead.

mod backend;
mod biquad;
mod coefficients;
pub(crate) mod kernels;

pub use self::backend::Backend;
pub use self::biquad::BiquadEngine;
pub use self::coefficients::{Coefficients, State};
