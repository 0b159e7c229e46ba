use thiserror::Error;

/// Caller contract violations for the geometry and drawing routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a regular polygon needs more than 2 sides, got {sides}")]
    TooFewSides { sides: u32 },

    #[error("interior angle must be strictly between 0 and 180 degrees, got {angle}")]
    AngleOutOfRange { angle: f64 },

    #[error("coordinate lists differ in length: {xs} x-values, {ys} y-values")]
    MismatchedCoordinates { xs: usize, ys: usize },
}
