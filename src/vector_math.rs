//! Basic vector math helper functions.
//! Small helpers for calculating magnitudes and normalised vectors in `f64`.
use glam::DVec3;

/// Vectors shorter than this normalise to zero, as in the client.
const DEGENERATE_LENGTH: f64 = 1.0e-4;

/// Returns the magnitude of a vector.
///
/// The sum is evaluated as `x*x + y*y + z*z`, left to right.
///
/// # Examples
/// ```
/// use blockmotion::vector_math::vec_length;
/// use glam::DVec3;
/// assert_eq!(vec_length(DVec3::new(3.0, 4.0, 12.0)), 13.0);
/// ```
#[must_use]
pub fn vec_length(vector: DVec3) -> f64 {
    (vector.x * vector.x + vector.y * vector.y + vector.z * vector.z).sqrt()
}

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite input and vectors shorter than `1e-4` yield the zero vector.
///
/// # Examples
///
/// ```
/// use blockmotion::vec_normalize;
/// use glam::DVec3;
/// let n = vec_normalize(DVec3::new(3.0, 0.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-12);
/// assert!((n.z - 0.8).abs() < 1e-12);
///
/// assert_eq!(vec_normalize(DVec3::new(0.0, 0.00001, 0.0)), DVec3::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: DVec3) -> DVec3 {
    if !vector.is_finite() {
        return DVec3::ZERO;
    }
    let length = vec_length(vector);
    if length < DEGENERATE_LENGTH {
        return DVec3::ZERO;
    }
    DVec3::new(vector.x / length, vector.y / length, vector.z / length)
}
