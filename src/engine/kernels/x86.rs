//! SSE2 and AVX feed-forward kernels.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::scalar;

macro_rules! x86_kernel {
    (
        $name:ident, $feature:tt, $ty:ty, $lanes:expr,
        $splat:ident, $load:ident, $mul:ident, $add:ident, $store:ident
    ) => {
        /// # Safety
        ///
        #[doc = concat!("The CPU must support `", $feature, "`, and `history.len()` must equal `out.len() + 2`.")]
        #[target_feature(enable = $feature)]
        pub(super) unsafe fn $name(taps: [$ty; 3], history: &[$ty], out: &mut [$ty]) {
            const LANES: usize = $lanes;
            let body = out.len() - out.len() % LANES;
            let h = history.as_ptr();
            let o = out.as_mut_ptr();

            // SAFETY: n + LANES <= body <= out.len(), and history is two longer,
            // so every unaligned load and store stays in bounds.
            unsafe {
                let b0 = $splat(taps[0]);
                let b1 = $splat(taps[1]);
                let b2 = $splat(taps[2]);

                let mut n = 0;
                while n < body {
                    let x0 = $load(h.add(n + 2));
                    let x1 = $load(h.add(n + 1));
                    let x2 = $load(h.add(n));
                    let acc = $add($mul(b0, x0), $mul(b1, x1));
                    let acc = $add(acc, $mul(b2, x2));
                    $store(o.add(n), acc);
                    n += LANES;
                }
            }

            scalar::feed_forward(taps, &history[body..], &mut out[body..]);
        }
    };
}

x86_kernel!(sse2_f32, "sse2", f32, 4, _mm_set1_ps, _mm_loadu_ps, _mm_mul_ps, _mm_add_ps, _mm_storeu_ps);
x86_kernel!(sse2_f64, "sse2", f64, 2, _mm_set1_pd, _mm_loadu_pd, _mm_mul_pd, _mm_add_pd, _mm_storeu_pd);
x86_kernel!(avx_f32, "avx", f32, 8, _mm256_set1_ps, _mm256_loadu_ps, _mm256_mul_ps, _mm256_add_ps, _mm256_storeu_ps);
x86_kernel!(avx_f64, "avx", f64, 4, _mm256_set1_pd, _mm256_loadu_pd, _mm256_mul_pd, _mm256_add_pd, _mm256_storeu_pd);
