use super::{Point3, Vector3};

/// Absolute tolerance for classifying a point as lying on the foot plane.
///
/// Known limitation: this is expressed in the model's length units and is
/// not scaled to them, so a model in meters is classified far more strictly
/// than the same model in millimeters.
pub const PLANE_TOLERANCE: f64 = 1e-6;

/// Classifies points against the foot construction plane.
///
/// The plane passes through `reference` (the first picked edge node) with
/// unit normal `normal` (the frozen foot normal).
#[derive(Debug, Clone, Copy)]
pub struct PlaneClassifier {
    reference: Point3,
    normal: Vector3,
}

impl PlaneClassifier {
    /// Creates a classifier for the plane through `reference` with the
    /// given unit `normal`.
    #[must_use]
    pub fn new(reference: Point3, normal: Vector3) -> Self {
        Self { reference, normal }
    }

    /// Perpendicular distance of `p` from the plane.
    #[must_use]
    pub fn distance(&self, p: &Point3) -> f64 {
        (p - self.reference).dot(&self.normal).abs()
    }

    /// Returns true when `p` lies on the plane within [`PLANE_TOLERANCE`].
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        self.distance(p) < PLANE_TOLERANCE
    }
}
