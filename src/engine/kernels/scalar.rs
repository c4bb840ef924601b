use num_traits::Float;

/// Portable feed-forward kernel, also used for the tail of every vector kernel.
#[inline]
pub(super) fn feed_forward<T: Float>(taps: [T; 3], history: &[T], out: &mut [T]) {
    let [b0, b1, b2] = taps;
    for (y, x) in out.iter_mut().zip(history.windows(3)) {
        *y = b0 * x[2] + b1 * x[1] + b2 * x[0];
    }
}
