//! Human-readable rendering of shapes and their areas.
//!
//! Areas are always printed with two decimal places. Each triangle gets an additional line
//! stating whether it is right-angled.

use std::io::{self, Write};

use crate::domain::{Circle, HasArea, Shape, ShapeError, Square, Triangle};

/// Circle with radius 5, triangle with sides 3, 4 and 5 and square with side 4.
pub fn demo_shapes() -> Result<Vec<Shape>, ShapeError> {
    Ok(vec![
        Circle::new(5.0)?.into(),
        Triangle::new(3.0, 4.0, 5.0)?.into(),
        Square::new(4.0)?.into(),
    ])
}

pub fn area_line(shape: &Shape) -> String {
    format!("Area of {shape}: {:.2}", shape.area())
}

pub fn verdict_line(triangle: &Triangle) -> String {
    if triangle.is_right_triangle() {
        "The triangle is a right triangle.".to_string()
    } else {
        "The triangle is not a right triangle.".to_string()
    }
}

pub fn error_line(error: &ShapeError) -> String {
    format!("Error: {error}")
}

/// Writes the area of every shape, followed by the verdict of every triangle.
pub fn write_report(out: &mut impl Write, shapes: &[Shape]) -> io::Result<()> {
    for shape in shapes {
        writeln!(out, "{}", area_line(shape))?;
    }

    for triangle in shapes.iter().filter_map(Shape::as_triangle) {
        writeln!(out, "{}", verdict_line(triangle))?;
    }

    Ok(())
}

/// Writes either the report of the shapes or the error that prevented building them.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: Result<Vec<Shape>, ShapeError>,
) -> io::Result<()> {
    match outcome {
        Ok(shapes) => write_report(out, &shapes),
        Err(error) => writeln!(out, "{}", error_line(&error)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn render(outcome: Result<Vec<Shape>, ShapeError>) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_report() {
        insta::assert_snapshot!(render(demo_shapes()), @r"
        Area of circle with radius 5: 78.54
        Area of triangle with sides 3, 4 and 5: 6.00
        Area of square with side 4: 16.00
        The triangle is a right triangle.
        ");
    }

    #[rstest]
    #[case::circle(Circle::new(1.5).unwrap().into(), "Area of circle with radius 1.5: 7.07")]
    #[case::triangle(
        Triangle::new(3.0, 4.0, 6.0).unwrap().into(),
        "Area of triangle with sides 3, 4 and 6: 5.33"
    )]
    #[case::square(Square::new(0.1).unwrap().into(), "Area of square with side 0.1: 0.01")]
    fn test_area_line(#[case] shape: Shape, #[case] expected: &str) {
        assert_eq!(area_line(&shape), expected);
    }

    #[rstest]
    #[case::right(3.0, 4.0, 5.0, "The triangle is a right triangle.")]
    #[case::not_right(3.0, 4.0, 6.0, "The triangle is not a right triangle.")]
    fn test_verdict_line(#[case] a: f64, #[case] b: f64, #[case] c: f64, #[case] expected: &str) {
        assert_eq!(verdict_line(&Triangle::new(a, b, c).unwrap()), expected);
    }

    #[test]
    fn test_error_report() {
        let outcome = Triangle::new(1.0, 2.0, 5.0).map(|triangle| vec![triangle.into()]);
        assert_eq!(
            render(outcome),
            "Error: no triangle can exist with these side lengths\n"
        );
    }

    #[test]
    fn test_report_lists_every_triangle_verdict() {
        let shapes: Vec<Shape> = vec![
            Triangle::new(3.0, 4.0, 6.0).unwrap().into(),
            Square::new(2.0).unwrap().into(),
            Triangle::new(6.0, 8.0, 10.0).unwrap().into(),
        ];
        insta::assert_snapshot!(render(Ok(shapes)), @r"
        Area of triangle with sides 3, 4 and 6: 5.33
        Area of square with side 2: 4.00
        Area of triangle with sides 6, 8 and 10: 24.00
        The triangle is not a right triangle.
        The triangle is a right triangle.
        ");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(Ok(vec![])), "");
    }
}
