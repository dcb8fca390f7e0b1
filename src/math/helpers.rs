use rand::Rng;
use rand::rngs::ThreadRng;

/// The maximum distance [`randomise`] moves a value in either direction.
pub const RANDOMISE_SPREAD: f32 = 0.2;

/// Returns the absolute difference between `a` and `b`. The result can't overflow, even for
/// [`i64::MIN`] and [`i64::MAX`].
pub const fn difference(a: i64, b: i64) -> u64 {
    a.abs_diff(b)
}

/// Converts cartesian coordinates to polar ones, returning `(r, theta)` where `theta` is
/// measured in degrees from the positive y axis towards the positive x axis.
///
/// # Examples
/// ```
/// # use dzlib::math::cartesian_to_polar;
/// let (r, theta) = cartesian_to_polar(3.0, 4.0);
/// assert!((r - 5.0).abs() < 1e-12);
/// assert!((theta - 36.8699).abs() < 1e-4);
/// ```
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), x.atan2(y).to_degrees())
}

/// Returns a value drawn uniformly from `[value - 0.2, value + 0.2)`.
pub fn randomise(value: f32) -> f32 {
    value - RANDOMISE_SPREAD + 2.0 * RANDOMISE_SPREAD * random().random::<f32>()
}

/// Returns the thread-local random number generator.
pub fn random() -> ThreadRng {
    rand::rng()
}
