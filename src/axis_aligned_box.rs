//! Representation of axis-aligned bounding boxes.

use crate::{Point, intersection::Intersection, num::Float, plane::Plane};
use approx::AbsDiffEq;
use nalgebra::{self as na, Point3, Vector3};

/// A box with orientation aligned with the coordinate system axes,
/// bounded by a minimum and a maximum corner point.
///
/// The box additionally stores its center point. The center defaults
/// to the midpoint of the corners, but callers may supply a
/// precomputed center, and boxes with equal corners but different
/// centers compare unequal.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisAlignedBox<F: Float> {
    minimum: Point3<F>,
    maximum: Point3<F>,
    center: Point3<F>,
}

impl<F: Float> AxisAlignedBox<F> {
    /// Creates a new box with the given minimum and maximum corner
    /// points, with the center at their midpoint.
    pub fn new(minimum: Point3<F>, maximum: Point3<F>) -> Self {
        let center = na::center(&minimum, &maximum);
        Self::with_center(minimum, maximum, center)
    }

    /// Creates a new box with the given minimum and maximum corner
    /// points and the given center. The bounds are not validated
    /// against each other or against the center.
    pub fn with_center(minimum: Point3<F>, maximum: Point3<F>, center: Point3<F>) -> Self {
        Self {
            minimum,
            maximum,
            center,
        }
    }

    /// Creates the axis-aligned bounding box for the set of points in
    /// the given slice, with the center at the midpoint of the bounds.
    /// An empty slice yields the all-zero box.
    pub fn from_points(points: &[impl Point<F>]) -> Self {
        let Some(first_point) = points.first() else {
            return Self::default();
        };
        let first_point = *first_point.point();

        let minimum = points
            .iter()
            .skip(1)
            .fold(first_point, |minimum, point| minimum.inf(point.point()));

        let maximum = points
            .iter()
            .skip(1)
            .fold(first_point, |maximum, point| maximum.sup(point.point()));

        Self::new(minimum, maximum)
    }

    /// Recomputes this box in place to the result of
    /// [`Self::from_points`], reusing the existing instance.
    pub fn set_from_points(&mut self, points: &[impl Point<F>]) {
        *self = Self::from_points(points);
    }

    /// Returns a reference to the minimum corner of the box.
    pub fn minimum(&self) -> &Point3<F> {
        &self.minimum
    }

    /// Returns a reference to the maximum corner of the box.
    pub fn maximum(&self) -> &Point3<F> {
        &self.maximum
    }

    /// Returns a reference to the center point of the box.
    pub fn center(&self) -> &Point3<F> {
        &self.center
    }

    /// Returns the extents of the box along the three axes.
    pub fn extents(&self) -> Vector3<F> {
        self.maximum - self.minimum
    }

    /// Returns the half extents of the box along the three axes.
    pub fn half_extents(&self) -> Vector3<F> {
        self.extents() * F::ONE_HALF
    }

    /// Whether the given point is inside this box. A point exactly on
    /// the surface of the box is considered inside.
    pub fn contains_point(&self, point: &Point3<F>) -> bool {
        point.x >= self.minimum.x
            && point.x <= self.maximum.x
            && point.y >= self.minimum.y
            && point.y <= self.maximum.y
            && point.z >= self.minimum.z
            && point.z <= self.maximum.z
    }

    /// Creates the axis-aligned box bounding both this and the given
    /// box, with the center at the midpoint of the merged bounds.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.minimum.inf(&other.minimum),
            self.maximum.sup(&other.maximum),
        )
    }

    /// Whether the two boxes are equal in value. Absent operands
    /// compare unequal, also to each other.
    pub fn equals(a: Option<&Self>, b: Option<&Self>) -> bool {
        matches!((a, b), (Some(a), Some(b)) if a == b)
    }

    /// Classifies the position of this box relative to the positive
    /// halfspace of the given plane.
    ///
    /// The test projects the half extents of the box onto the plane
    /// normal to obtain the largest possible deviation of the box from
    /// its center along the normal, and compares it with the signed
    /// distance from the plane to the center. A box exactly touching
    /// the plane counts as intersecting.
    pub fn intersect_plane(&self, plane: &Plane<F>) -> Intersection {
        let normal = plane.normal();
        let half_extents = self.half_extents();

        let max_deviation = normal.x.abs() * half_extents.x
            + normal.y.abs() * half_extents.y
            + normal.z.abs() * half_extents.z;

        let signed_distance = plane.signed_distance(&self.center);

        if signed_distance - max_deviation > F::ZERO {
            Intersection::Inside
        } else if signed_distance + max_deviation < F::ZERO {
            Intersection::Outside
        } else {
            Intersection::Intersecting
        }
    }
}

impl<F: Float> Default for AxisAlignedBox<F> {
    /// Creates the all-zero box, with both corners and the center at
    /// the origin.
    fn default() -> Self {
        Self::with_center(Point3::origin(), Point3::origin(), Point3::origin())
    }
}

impl<F> AbsDiffEq for AxisAlignedBox<F>
where
    F: Float + AbsDiffEq,
    <F as AbsDiffEq>::Epsilon: Copy,
{
    type Epsilon = <F as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        <F as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Point3::abs_diff_eq(&self.minimum, &other.minimum, epsilon)
            && Point3::abs_diff_eq(&self.maximum, &other.maximum, epsilon)
            && Point3::abs_diff_eq(&self.center, &other.center, epsilon)
    }
}
