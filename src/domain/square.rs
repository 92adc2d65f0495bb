use std::fmt;

use super::{is_positive, shape::HasArea, ShapeError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        if !is_positive(side) {
            tracing::warn!(side, "rejected square");
            return Err(ShapeError::InvalidArgument(
                "side length must be a positive number greater than zero",
            ));
        }

        tracing::debug!(side, "square created");
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl HasArea for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square with side {}", self.side)
    }
}
