//! The turtle capability driven by the drawing routines
//!
//! Drawing code only ever issues commands through [`Turtle`]; it never reads
//! position or heading back.

pub mod path;
pub mod recording;

pub use path::PathTurtle;
pub use recording::{Command, RecordingTurtle};

/// An actor with an implicit position and heading
pub trait Turtle {
    /// Move forward `distance` units along the current heading
    fn forward(&mut self, distance: i32);

    /// Rotate clockwise by `degrees`
    ///
    /// Any value is accepted, including negative ones and values of 360 or
    /// more. Implementations normalize their own heading.
    fn turn(&mut self, degrees: f64);
}
