//! Biquad Filters - second-order IIR filtering for audio
//!
//! This library provides three layers:
//!
//! - [`engine`]: the Direct Form I recurrence over normalized coefficients,
//!   with block processing dispatched to a vector backend picked at runtime
//! - [`design`]: Audio EQ Cookbook coefficient formulas for eight responses,
//!   plus Q/bandwidth conversion
//! - [`filters`]: [`BiquadFilter`], a validated, parameterized filter that
//!   keeps an engine in step with its settings
//!
//! Both `f32` and `f64` samples are supported.
//!
//! # Features
//!
//! - `simd` (default): vectorized block backends, selected at runtime
//! - `serde`: `Serialize`/`Deserialize` for [`FilterConfig`] and [`FilterKind`]
//!
//! The `serde` tests are feature-gated; run the full suite with
//! `cargo test --all-features`.
//!
//! # Examples
//!
//! ```
//! use biquad_filters::BiquadFilter;
//!
//! let mut eq = BiquadFilter::<f64>::peaking_eq(1000.0, 48000, 1.0, 6.0).unwrap();
//! let mut buffer = vec![0.5; 256];
//! eq.process_block(&mut buffer).unwrap();
//! ```

pub mod design;
pub mod engine;
pub mod error;
pub mod filters;
mod sample;

// Re-export commonly used types at the crate root
pub use engine::{Backend, BiquadEngine, Coefficients, State};
pub use error::{ConstructionError, ProcessingError, ValidationError};
pub use filters::{BiquadFilter, FilterConfig, FilterKind};
pub use sample::Sample;
