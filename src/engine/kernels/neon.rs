//! AArch64 NEON feed-forward kernels.

use std::arch::aarch64::*;

use super::scalar;

macro_rules! neon_kernel {
    (
        $name:ident, $ty:ty, $lanes:expr,
        $splat:ident, $load:ident, $mul:ident, $add:ident, $store:ident
    ) => {
        /// # Safety
        ///
        /// The CPU must support NEON, and `history.len()` must equal `out.len() + 2`.
        #[target_feature(enable = "neon")]
        pub(super) unsafe fn $name(taps: [$ty; 3], history: &[$ty], out: &mut [$ty]) {
            const LANES: usize = $lanes;
            let body = out.len() - out.len() % LANES;
            let h = history.as_ptr();
            let o = out.as_mut_ptr();

            // SAFETY: n + LANES <= body <= out.len(), and history is two longer.
            // vmulq/vaddq lower to separate fmul/fadd, never a fused fmla.
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

neon_kernel!(neon_f32, f32, 4, vdupq_n_f32, vld1q_f32, vmulq_f32, vaddq_f32, vst1q_f32);
neon_kernel!(neon_f64, f64, 2, vdupq_n_f64, vld1q_f64, vmulq_f64, vaddq_f64, vst1q_f64);
