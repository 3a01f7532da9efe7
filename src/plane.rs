//! Representation of planes.

use crate::num::Float;
use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3, Vector4};

/// A plane in 3D, given by a normal `n` and a distance `d` such that
/// the points `x` lying on the plane satisfy `n.dot(x) + d = 0`.
///
/// The normal is not required to have unit length. Signed distances
/// computed against a non-unit normal are scaled by its magnitude,
/// which leaves classification by sign unaffected.
///
/// The plane divides space into two halfspaces, the positive and
/// negative halfspace. The positive one is defined as the halfspace
/// the normal is pointing into.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<F: Float> {
    normal: Vector3<F>,
    distance: F,
}

// WARNING: Do not change `Plane` without ensuring that `Plane<f32>` and
// `Plane<f64>` are still `Pod`
unsafe impl Zeroable for Plane<f32> {}
unsafe impl Zeroable for Plane<f64> {}
unsafe impl Pod for Plane<f32> {}
unsafe impl Pod for Plane<f64> {}

impl<F: Float> Plane<F> {
    /// Creates a new plane defined by the given normal vector and
    /// distance.
    pub const fn new(normal: Vector3<F>, distance: F) -> Self {
        Self { normal, distance }
    }

    /// Creates the plane with the given normal vector that passes
    /// through the given point, with `distance = -normal.dot(point)`.
    pub fn from_normal_and_point(normal: Vector3<F>, point_in_plane: &Point3<F>) -> Self {
        let distance = -normal.dot(&point_in_plane.coords);
        Self::new(normal, distance)
    }

    /// Returns the normal vector of the plane.
    pub fn normal(&self) -> &Vector3<F> {
        &self.normal
    }

    /// Returns the distance term of the plane equation.
    pub fn distance(&self) -> F {
        self.distance
    }

    /// Computes the signed distance from the plane to the given point.
    /// If the signed distance is negative, the point lies in the
    /// negative halfspace of the plane. For a non-unit normal the
    /// value is scaled by the magnitude of the normal.
    pub fn signed_distance(&self, point: &Point3<F>) -> F {
        self.normal.dot(&point.coords) + self.distance
    }
}

impl<F: Float> From<Vector4<F>> for Plane<F> {
    /// Interprets the components of the given vector as
    /// `(n.x, n.y, n.z, d)`.
    fn from(coefficients: Vector4<F>) -> Self {
        Self::new(
            Vector3::new(coefficients.x, coefficients.y, coefficients.z),
            coefficients.w,
        )
    }
}

impl<F: Float + AbsDiffEq> AbsDiffEq for Plane<F>
where
    F::Epsilon: Copy,
{
    type Epsilon = F::Epsilon;

    fn default_epsilon() -> F::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F::Epsilon) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.distance.abs_diff_eq(&other.distance, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{point, vector};

    #[test]
    fn creating_plane_through_origin_gives_zero_distance() {
        let plane = Plane::from_normal_and_point(vector![1.2, -0.1, 2.7], &Point3::origin());
        assert_abs_diff_eq!(plane.distance(), 0.0);
    }

    #[test]
    fn signed_distance_is_correct() {
        let plane = Plane::from_normal_and_point(vector![0.0, 1.0, 0.0], &point![1.0, 2.0, 0.0]);
        assert_abs_diff_eq!(plane.distance(), -2.0);
        assert_abs_diff_eq!(plane.signed_distance(&point![-1.2, 0.0, 42.4]), -2.0);
        assert_abs_diff_eq!(plane.signed_distance(&point![-2.1, 10.0, 4.42]), 8.0);

        let plane = Plane::from_normal_and_point(vector![1.0, 0.0, 1.0], &Point3::origin());
        assert_abs_diff_eq!(plane.signed_distance(&point![8.0, 0.0, 8.0]), 16.0);
        assert_abs_diff_eq!(plane.signed_distance(&point![0.0, 8.0, 0.0]), 0.0);
    }

    #[test]
    fn signed_distance_scales_with_the_normal_magnitude() {
        let point_in_plane = point![1.0, 2.0, 0.0];
        let plane = Plane::from_normal_and_point(vector![0.0, 1.0, 0.0], &point_in_plane);
        let scaled = Plane::from_normal_and_point(vector![0.0, 2.0, 0.0], &point_in_plane);
        assert_abs_diff_eq!(
            scaled.signed_distance(&point![0.0, 5.0, 0.0]),
            2.0 * plane.signed_distance(&point![0.0, 5.0, 0.0])
        );
    }

    #[test]
    fn plane_from_vector_splits_normal_and_distance() {
        let plane = Plane::from(vector![1.0, 2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(*plane.normal(), vector![1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(plane.distance(), 4.0);
    }
}
