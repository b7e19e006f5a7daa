pub mod plane;

pub use plane::PlaneClassifier;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Normalizes a vector, returning `None` for magnitudes below [`TOLERANCE`].
///
/// A zero magnitude is a precondition violation at every call site
/// (coincident edge picks, zero-area windings); callers map `None` to the
/// specific [`DegenerateInputError`](crate::error::DegenerateInputError).
#[must_use]
pub fn try_unit(v: &Vector3) -> Option<Vector3> {
    v.try_normalize(TOLERANCE)
}

/// Right-hand-rule winding normal of a 3- or 4-cornered shell element.
///
/// Triangles use the edge cross product; quadrilaterals use the diagonal
/// cross product, which averages out mild warping. Returns `None` when the
/// winding has zero area (or the corner count is not 3 or 4).
#[must_use]
pub fn winding_normal(corners: &[Point3]) -> Option<Vector3> {
    let raw = match corners {
        [a, b, c] => (b - a).cross(&(c - a)),
        [a, b, c, d] => (c - a).cross(&(d - b)),
        _ => return None,
    };
    try_unit(&raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn try_unit_normalizes() {
        let v = try_unit(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(v.norm(), 1.0);
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.z, 0.8);
    }

    #[test]
    fn try_unit_rejects_zero_vector() {
        assert!(try_unit(&Vector3::zeros()).is_none());
    }

    #[test]
    fn triangle_normal_follows_winding() {
        let n = winding_normal(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]).unwrap();
        assert_relative_eq!(n.z, 1.0);

        // Reversed winding flips the normal
        let n = winding_normal(&[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)]).unwrap();
        assert_relative_eq!(n.z, -1.0);
    }

    #[test]
    fn quad_normal_from_diagonals() {
        let n = winding_normal(&[
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn degenerate_winding_has_no_normal() {
        // Collinear corners span no area
        assert!(
            winding_normal(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]).is_none()
        );
    }
}
