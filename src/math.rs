use nalgebra as na;
use num_traits::Float;

/// Ratio of the tip vector's component along the base vector's direction to
/// the base vector's own length: 1.0 means the tip projects to exactly the
/// base's distance from the wrist, above 1.0 it reaches farther out.
///
/// Returns `None` for a degenerate base vector (squared norm below epsilon).
pub fn projection_factor<T: na::RealField + Float>(
    tip: &na::Vector2<T>,
    base: &na::Vector2<T>,
) -> Option<T> {
    let denom = base.dot(base);

    if denom <= T::from(f32::EPSILON).unwrap() {
        return None;
    }

    Some(tip.dot(base) / denom)
}
