//! Axis Aligned Bounding Box.

use crate::math::{Axis, Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// This is the moving box of sweep queries, and the output type of
/// [`VoxelShape::to_aabbs`](crate::shape::VoxelShape::to_aabbs) and
/// [`VoxelShape::bounds`](crate::shape::VoxelShape::bounds).
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// # Example
///
/// ```rust
/// use voxshape3d::bounding_volume::Aabb;
/// use voxshape3d::math::Axis;
/// use voxshape3d::na::{Point3, Vector3};
///
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 1.0));
/// assert_eq!(aabb.size(Axis::Y), 2.0);
///
/// let moved = aabb.translated(&Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(moved.min(Axis::X), 1.0);
/// assert!(aabb.intersects(&moved));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,

    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its six bounds, reordering each pair if needed.
    #[inline]
    pub fn from_bounds(x0: Real, y0: Real, z0: Real, x1: Real, y1: Real, z1: Real) -> Aabb {
        Aabb::new(
            Point::new(x0.min(x1), y0.min(y1), z0.min(z1)),
            Point::new(x0.max(x1), y0.max(y1), z0.max(z1)),
        )
    }

    /// The smallest coordinate of this AABB along `axis`.
    #[inline]
    pub fn min(&self, axis: Axis) -> Real {
        self.mins[axis.index()]
    }

    /// The largest coordinate of this AABB along `axis`.
    #[inline]
    pub fn max(&self, axis: Axis) -> Real {
        self.maxs[axis.index()]
    }

    /// The width of this AABB along `axis`.
    #[inline]
    pub fn size(&self, axis: Axis) -> Real {
        self.max(axis) - self.min(axis)
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Translates this AABB by the given vector.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Checks if this AABB intersects another one, boundaries included.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Checks if this AABB fully contains another one.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Computes the intersection of this AABB and another one.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }
}
