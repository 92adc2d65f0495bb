//! Triangle given by the lengths of its three sides.

use std::fmt;

use nalgebra::Vector3;

use super::{is_positive, shape::HasArea, ShapeError};

/// Absolute tolerance of the Pythagorean check in [`Triangle::is_right_triangle`].
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    sides: Vector3<f64>,
}

impl Triangle {
    /// Fails if any side is not strictly positive, or if the sides violate the strict triangle
    /// inequality. The positivity check comes first.
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self, ShapeError> {
        if ![side_a, side_b, side_c].into_iter().all(is_positive) {
            tracing::warn!(side_a, side_b, side_c, "rejected triangle with non-positive side");
            return Err(ShapeError::InvalidArgument("side lengths must be positive"));
        }

        if !satisfies_triangle_inequality(side_a, side_b, side_c) {
            tracing::warn!(side_a, side_b, side_c, "rejected triangle violating inequality");
            return Err(ShapeError::InvalidArgument(
                "no triangle can exist with these side lengths",
            ));
        }

        tracing::debug!(side_a, side_b, side_c, "triangle created");
        Ok(Self {
            sides: Vector3::new(side_a, side_b, side_c),
        })
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.sides.x, self.sides.y, self.sides.z)
    }

    pub fn perimeter(&self) -> f64 {
        self.sides.x + self.sides.y + self.sides.z
    }

    /// Compares the square of the longest side against the sum of all three squares, which
    /// makes the check independent of the order in which the sides were given.
    pub fn is_right_triangle(&self) -> bool {
        let max_side = self.sides.max();
        let sum_squares = self.sides.norm_squared();
        (2.0 * max_side.powi(2) - sum_squares).abs() < RIGHT_ANGLE_TOLERANCE
    }
}

fn satisfies_triangle_inequality(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

impl HasArea for Triangle {
    /// Heron's formula.
    fn area(&self) -> f64 {
        let (a, b, c) = self.sides();
        let s = self.perimeter() / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c) = self.sides();
        write!(f, "triangle with sides {a}, {b} and {c}")
    }
}
