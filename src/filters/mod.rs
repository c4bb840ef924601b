//! Parameterized filters built on the biquad engine.
//!
//! [`BiquadFilter`] pairs a [`FilterKind`] with a validated [`FilterConfig`]
//! and keeps the engine's coefficients in step with every parameter change.

mod biquad;
mod config;
mod kind;

pub use self::biquad::BiquadFilter;
pub use self::config::FilterConfig;
pub use self::kind::FilterKind;
