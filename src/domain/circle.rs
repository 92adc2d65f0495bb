use std::{f64::consts::PI, fmt};

use super::{is_positive, shape::HasArea, ShapeError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if !is_positive(radius) {
            tracing::warn!(radius, "rejected circle");
            return Err(ShapeError::InvalidArgument(
                "radius must be a positive number greater than zero",
            ));
        }

        tracing::debug!(radius, "circle created");
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl HasArea for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle with radius {}", self.radius)
    }
}
