//! Runtime selection of the block-processing backend.

use std::fmt;
use std::sync::OnceLock;

use log::debug;

/// Instruction set used for the vectorizable half of block processing.
///
/// All backends produce bit-identical output; they differ only in how many
/// feed-forward products are computed per instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Plain per-sample recurrence
    Scalar,
    /// 128-bit x86 vectors (4 x f32, 2 x f64)
    Sse2,
    /// 256-bit x86 vectors (8 x f32, 4 x f64)
    Avx,
    /// 128-bit AArch64 vectors (4 x f32, 2 x f64)
    Neon,
}

impl Backend {
    /// Every backend, in ascending order of preference.
    pub const ALL: [Backend; 4] = [Backend::Scalar, Backend::Neon, Backend::Sse2, Backend::Avx];

    /// Returns the preferred backend for the running CPU.
    ///
    /// The CPU is probed once per process; later calls return the cached choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_filters::Backend;
    ///
    /// let backend = Backend::detect();
    /// assert!(backend.is_supported());
    /// assert_eq!(backend, Backend::detect());
    /// ```
    pub fn detect() -> Backend {
        static SELECTED: OnceLock<Backend> = OnceLock::new();

        *SELECTED.get_or_init(|| {
            let backend = Backend::ALL
                .iter()
                .rev()
                .copied()
                .find(|backend| backend.is_supported())
                .unwrap_or(Backend::Scalar);
            debug!("selected '{}' block backend", backend);
            backend
        })
    }

    /// Returns true if this backend can run on the current CPU and build.
    pub fn is_supported(self) -> bool {
        match self {
            Backend::Scalar => true,
            Backend::Sse2 => sse2_available(),
            Backend::Avx => avx_available(),
            Backend::Neon => neon_available(),
        }
    }

    /// Lists every backend usable on this machine, scalar first.
    pub fn available() -> Vec<Backend> {
        Backend::ALL
            .iter()
            .copied()
            .filter(|backend| backend.is_supported())
            .collect()
    }

    /// Vector width in bytes (scalar counts as one 8-byte lane).
    pub fn register_bytes(self) -> usize {
        match self {
            Backend::Scalar => 8,
            Backend::Sse2 | Backend::Neon => 16,
            Backend::Avx => 32,
        }
    }

    /// Short lowercase name of the backend.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Sse2 => "sse2",
            Backend::Avx => "avx",
            Backend::Neon => "neon",
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::detect()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
fn sse2_available() -> bool {
    std::arch::is_x86_feature_detected!("sse2")
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
fn avx_available() -> bool {
    std::arch::is_x86_feature_detected!("avx")
}

#[cfg(not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))))]
fn sse2_available() -> bool {
    false
}

#[cfg(not(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64"))))]
fn avx_available() -> bool {
    false
}

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
fn neon_available() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(not(all(feature = "simd", target_arch = "aarch64")))]
fn neon_available() -> bool {
    false
}
