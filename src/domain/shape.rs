//! Area computation shared by all shapes.

use std::fmt;

use super::{Circle, Square, Triangle};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Circle {}
    impl Sealed for super::Triangle {}
    impl Sealed for super::Square {}
    impl Sealed for super::Shape {}
}

pub trait HasArea: sealed::Sealed {
    fn area(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Square(Square),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Triangle(_) => "triangle",
            Shape::Square(_) => "square",
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Shape::Triangle(triangle) => Some(triangle),
            Shape::Circle(_) | Shape::Square(_) => None,
        }
    }
}

impl HasArea for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Triangle(triangle) => triangle.area(),
            Shape::Square(square) => square.area(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
            Shape::Triangle(triangle) => fmt::Display::fmt(triangle, f),
            Shape::Square(square) => fmt::Display::fmt(square, f),
        }
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<Square> for Shape {
    fn from(value: Square) -> Self {
        Self::Square(value)
    }
}
