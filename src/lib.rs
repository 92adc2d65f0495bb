//! Areas of circles, triangles and squares, and right-triangle detection.
//!
//! Shapes are immutable values built through validating constructors, so a `Circle`,
//! `Triangle` or `Square` that exists always describes a valid shape.
//!
//! ```
//! use geometry::domain::{HasArea, Triangle};
//!
//! let triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(triangle.area(), 6.0);
//! assert!(triangle.is_right_triangle());
//! ```


pub mod cli;
pub mod domain;
pub mod report;
