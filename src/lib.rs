//! Geometric primitives for virtual globe rendering.

mod axis_aligned_box;
mod intersection;
mod num;
mod plane;

pub use axis_aligned_box::AxisAlignedBox;
pub use intersection::Intersection;
pub use num::Float;
pub use plane::Plane;

use nalgebra::Point3;

/// Anything that represents a 3D point.
pub trait Point<F: Float> {
    /// Returns a reference to the point.
    fn point(&self) -> &Point3<F>;
}

impl<F: Float> Point<F> for Point3<F> {
    fn point(&self) -> &Point3<F> {
        self
    }
}
