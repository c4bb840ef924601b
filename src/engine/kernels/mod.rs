//! Feed-forward kernels used by block processing.
//!
//! Each kernel computes `out[n] = b0*h[n+2] + b1*h[n+1] + b2*h[n]` for a
//! history slice `h` holding the two previous inputs followed by the block.
//! The products and sums are evaluated in exactly that order with separate
//! multiply and add instructions, so every kernel matches the scalar
//! recurrence bit for bit.

use crate::engine::Backend;

mod scalar;

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
mod x86;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod neon;

macro_rules! dispatch {
    ($name:ident, $ty:ty, $avx:ident, $sse2:ident, $neon:ident) => {
        pub(crate) fn $name(backend: Backend, taps: [$ty; 3], history: &[$ty], out: &mut [$ty]) {
            let len = out.len().min(history.len().saturating_sub(2));
            let history = &history[..(len + 2).min(history.len())];
            let out = &mut out[..len];

            match backend {
                #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
                // SAFETY: AVX support was just confirmed and the slices are length-matched.
                Backend::Avx if backend.is_supported() => unsafe { x86::$avx(taps, history, out) },
                #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
                // SAFETY: SSE2 support was just confirmed and the slices are length-matched.
                Backend::Sse2 if backend.is_supported() => unsafe { x86::$sse2(taps, history, out) },
                #[cfg(all(feature = "simd", target_arch = "aarch64"))]
                // SAFETY: NEON support was just confirmed and the slices are length-matched.
                Backend::Neon if backend.is_supported() => unsafe { neon::$neon(taps, history, out) },
                _ => scalar::feed_forward(taps, history, out),
            }
        }
    };
}

dispatch!(feed_forward_f32, f32, avx_f32, sse2_f32, neon_f32);
dispatch!(feed_forward_f64, f64, avx_f64, sse2_f64, neon_f64);
