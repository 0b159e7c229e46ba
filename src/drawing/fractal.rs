//! Koch curve and snowflake generators
//!
//! The turtle only moves whole units, so every level divides the segment
//! length by three and rounds up. Deep curves therefore overshoot the ideal
//! endpoint a little; the error stays within O(level) unit steps.

use tracing::debug;

use crate::turtle::Turtle;

/// Clockwise turns between the four segments of the Koch generator.
/// 240 is the right-turn-only way of turning 120 degrees left.
pub const KOCH_TURNS: [f64; 3] = [60.0, 240.0, 60.0];

/// Recursion depth used for each side of the snowflake
pub const SNOWFLAKE_LEVEL: u32 = 3;
/// Turn before the first side, so the three sides meet in a closed triangle
pub const SNOWFLAKE_START_TURN: f64 = 150.0;
/// Turn at each corner, before each side is drawn
pub const SNOWFLAKE_SIDE_TURN: f64 = 240.0;
/// Turn after the last side that brings the turtle back to its starting heading
pub const SNOWFLAKE_END_TURN: f64 = 210.0;

/// Side length used by [`draw_personal_art`]
pub const PERSONAL_ART_SIDE: i32 = 150;

fn third(length: i32) -> i32 {
    (length as f64 / 3.0).ceil() as i32
}

/// Draw a Koch curve along the turtle's current heading
///
/// Level 0 is the bare generator: four segments of `ceil(length / 3)`
/// joined by the turns in [`KOCH_TURNS`]. Each higher level replaces every
/// segment with a curve one level lower and a third as long. The turtle ends
/// facing the heading it started with.
pub fn draw_koch_curve<T: Turtle + ?Sized>(turtle: &mut T, level: u32, length: i32) {
    let segment = third(length);

    for i in 0..4 {
        if level == 0 {
            turtle.forward(segment);
        } else {
            draw_koch_curve(turtle, level - 1, segment);
        }

        if let Some(&angle) = KOCH_TURNS.get(i) {
            turtle.turn(angle);
        }
    }
}

/// Draw a closed snowflake out of three Koch curves
///
/// The turtle is left at its start point facing its original heading.
pub fn draw_snowflake<T: Turtle + ?Sized>(turtle: &mut T, side_length: i32) {
    debug!(side_length, level = SNOWFLAKE_LEVEL, "Drawing snowflake");

    turtle.turn(SNOWFLAKE_START_TURN);
    for _ in 0..3 {
        turtle.turn(SNOWFLAKE_SIDE_TURN);
        draw_koch_curve(turtle, SNOWFLAKE_LEVEL, side_length);
    }
    turtle.turn(SNOWFLAKE_END_TURN);
}

/// Draw the default showcase figure, a snowflake with sides [`PERSONAL_ART_SIDE`] long
pub fn draw_personal_art<T: Turtle + ?Sized>(turtle: &mut T) {
    draw_snowflake(turtle, PERSONAL_ART_SIDE);
}
