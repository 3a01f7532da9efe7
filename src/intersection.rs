//! Classification of positions relative to a plane.

/// How a volume is positioned relative to the positive halfspace of a
/// plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intersection {
    /// The volume lies entirely in the negative halfspace.
    Outside,
    /// The volume straddles the plane.
    Intersecting,
    /// The volume lies entirely in the positive halfspace.
    Inside,
}
