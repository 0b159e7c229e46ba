use tracing::debug;

use crate::error::GeometryError;
use crate::geometry::regular_polygon_interior_angle;
use crate::turtle::Turtle;

/// Draw a square, turning clockwise at each corner
pub fn draw_square<T: Turtle + ?Sized>(turtle: &mut T, side_length: i32) {
    for _ in 0..4 {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
}

/// Draw a regular polygon with the turtle's start point as its lower-left vertex
///
/// Expects the turtle at its origin facing north. Uses only clockwise turns.
/// Nothing is drawn if `sides` is out of range.
///
/// # Errors
/// * `TooFewSides` when `sides <= 2`
pub fn draw_regular_polygon<T: Turtle + ?Sized>(
    turtle: &mut T,
    sides: u32,
    side_length: i32,
) -> Result<(), GeometryError> {
    let interior_angle = regular_polygon_interior_angle(sides)?;
    debug!(sides, side_length, interior_angle, "Drawing regular polygon");

    turtle.turn(90.0);
    for _ in 0..sides {
        turtle.forward(side_length);
        turtle.turn(180.0 + interior_angle);
    }
    Ok(())
}
