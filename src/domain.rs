//! The domain module encapsulates the geometric core. It defines the `Circle`, `Triangle` and
//! `Square` values, the closed `Shape` enum over them and the rules that make a set of
//! measurements a valid shape.
//!
//! Nothing in here performs I/O, so every value can be shared freely between threads.

mod circle;
mod error;
mod shape;
mod square;
mod triangle;

pub use circle::Circle;
pub use error::ShapeError;
pub use shape::{HasArea, Shape};
pub use square::Square;
pub use triangle::{Triangle, RIGHT_ANGLE_TOLERANCE};

/// A measurement is usable if it is a finite number strictly greater than zero.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
