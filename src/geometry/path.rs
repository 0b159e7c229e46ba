use tracing::debug;

use super::angle::{advance_heading, bearing_to_point};
use crate::domain::Point;
use crate::error::GeometryError;

/// Heading adjustments needed to visit `points` in order
///
/// The turtle starts on the first point facing north (heading 0) and keeps
/// whatever heading it had after each leg. Returns one adjustment per leg,
/// so `points.len() - 1` values, or none for zero or one point.
pub fn heading_adjustments(points: &[Point]) -> Vec<f64> {
    let mut heading = 0.0;

    let adjustments: Vec<f64> = points
        .windows(2)
        .map(|leg| {
            let adjustment = bearing_to_point(heading, leg[0], leg[1]);
            heading = advance_heading(heading, adjustment);
            adjustment
        })
        .collect();

    debug!(
        waypoints = points.len(),
        final_heading = heading,
        "Planned heading adjustments"
    );
    adjustments
}

/// Same as [`heading_adjustments`] for waypoints given as parallel x and y lists
///
/// # Errors
/// * `MismatchedCoordinates` when the lists differ in length
pub fn heading_adjustments_from_coords(
    xs: &[i32],
    ys: &[i32],
) -> Result<Vec<f64>, GeometryError> {
    if xs.len() != ys.len() {
        return Err(GeometryError::MismatchedCoordinates {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let points: Vec<Point> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point::new(x, y))
        .collect();

    Ok(heading_adjustments(&points))
}
