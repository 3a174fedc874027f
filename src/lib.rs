/*!
voxshape3d
==========

**voxshape3d** is a library of grid-quantized, axis-aligned 3-dimensional
collision shapes written with the rust programming language.

A [`VoxelShape`](shape::VoxelShape) is an immutable set of boxes laid out on a
rectilinear grid. Shapes can be combined with any two-argument boolean
operator, tested for overlap without building the combined shape, swept
against along a coordinate axis, and compared face-to-face to decide whether
one fully hides the other.

```
use voxshape3d::math::Axis;
use voxshape3d::shape::{shapes, BooleanOp};

let slab = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
let post = shapes::box_shape(0.25, 0.0, 0.25, 0.75, 1.0, 0.75);
let both = shapes::join(&slab, &post, BooleanOp::Or);

assert_eq!(both.max(Axis::Y), 1.0);
assert!(shapes::join_is_not_empty(&slab, &post, BooleanOp::And));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Box corners are passed as six scalars.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
