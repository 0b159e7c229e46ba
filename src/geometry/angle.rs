//! Angle arithmetic for turtle headings
//!
//! Headings are measured in degrees clockwise from north (+y). Every angle
//! handed back to a caller lies in [0, 360).

use crate::domain::Point;
use crate::error::GeometryError;

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Map any finite angle into [0, 360)
///
/// Negative inputs wrap forward, so `-90` becomes `270`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Interior angle of a regular polygon with `sides` sides
///
/// # Errors
/// * `TooFewSides` when `sides <= 2`
pub fn regular_polygon_interior_angle(sides: u32) -> Result<f64, GeometryError> {
    if sides <= 2 {
        return Err(GeometryError::TooFewSides { sides });
    }
    Ok(180.0 - FULL_TURN / sides as f64)
}

/// Side count of the regular polygon whose interior angles measure `angle`
///
/// Uses the exterior angle (`180 - angle`) and rounds half up, so angles that
/// are slightly off still land on the nearest polygon.
///
/// # Errors
/// * `AngleOutOfRange` unless `0 < angle < 180`, or when the angle is so close
///   to 180 that the side count does not fit in a `u32`
pub fn polygon_sides_from_interior_angle(angle: f64) -> Result<u32, GeometryError> {
    if !(angle > 0.0 && angle < 180.0) {
        return Err(GeometryError::AngleOutOfRange { angle });
    }
    let sides = (FULL_TURN / (180.0 - angle) + 0.5).floor();
    if sides > u32::MAX as f64 {
        return Err(GeometryError::AngleOutOfRange { angle });
    }
    Ok(sides as u32)
}

/// Clockwise turn that points a turtle at `from`, facing `current_heading`,
/// toward `to`
///
/// The result is always in [0, 360). When `from == to` there is no direction
/// to face and the result is 0 (no turn).
pub fn bearing_to_point(current_heading: f64, from: Point, to: Point) -> f64 {
    if from == to {
        return 0.0;
    }

    let heading = normalize_degrees(current_heading);
    let bearing = absolute_bearing(from, to);

    if bearing >= heading {
        bearing - heading
    } else {
        normalize_degrees(FULL_TURN + bearing - heading)
    }
}

/// Absolute clockwise-from-north direction from `from` to `to`, in [0, 360)
fn absolute_bearing(from: Point, to: Point) -> f64 {
    let dy = (to.y as f64) - (from.y as f64);
    let dx = (to.x as f64) - (from.x as f64);

    // atan2 is counter-clockwise from +x; rotate to clockwise from +y
    let atan2_degrees = dy.atan2(dx).to_degrees();
    let bearing = 90.0 - atan2_degrees;
    if atan2_degrees > 90.0 {
        bearing + FULL_TURN
    } else {
        bearing
    }
}

/// Apply a heading adjustment to a running heading kept in [0, 360)
///
/// Both inputs are below 360, so a single conditional subtraction is enough.
pub fn advance_heading(heading: f64, adjustment: f64) -> f64 {
    let next = heading + adjustment;
    if next < FULL_TURN { next } else { next - FULL_TURN }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn test_normalize_degrees_tiny_negative() {
        let n = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn test_interior_angle_known_polygons() {
        assert!(approx(regular_polygon_interior_angle(3).unwrap(), 60.0));
        assert!(approx(regular_polygon_interior_angle(4).unwrap(), 90.0));
        assert!(approx(regular_polygon_interior_angle(6).unwrap(), 120.0));
        assert!(approx(regular_polygon_interior_angle(7).unwrap(), 128.57142857142858));
    }

    #[test]
    fn test_interior_angle_range() {
        for sides in 3..200 {
            let angle = regular_polygon_interior_angle(sides).unwrap();
            assert!(angle > 0.0 && angle < 180.0, "sides {}: {}", sides, angle);
        }
    }

    #[test]
    fn test_interior_angle_rejects_degenerate() {
        assert_eq!(
            regular_polygon_interior_angle(2),
            Err(GeometryError::TooFewSides { sides: 2 })
        );
        assert!(regular_polygon_interior_angle(0).is_err());
    }

    #[test]
    fn test_sides_from_angle() {
        assert_eq!(polygon_sides_from_interior_angle(60.0), Ok(3));
        assert_eq!(polygon_sides_from_interior_angle(90.0), Ok(4));
        assert_eq!(polygon_sides_from_interior_angle(108.0), Ok(5));
        assert_eq!(polygon_sides_from_interior_angle(128.57), Ok(7));
    }

    #[test]
    fn test_sides_round_trip() {
        for sides in 3..100 {
            let angle = regular_polygon_interior_angle(sides).unwrap();
            assert_eq!(polygon_sides_from_interior_angle(angle), Ok(sides));
        }
    }

    #[test]
    fn test_sides_from_angle_rejects_out_of_range() {
        assert!(polygon_sides_from_interior_angle(0.0).is_err());
        assert!(polygon_sides_from_interior_angle(180.0).is_err());
        assert!(polygon_sides_from_interior_angle(-10.0).is_err());
        assert!(polygon_sides_from_interior_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_sides_from_angle_too_many_sides() {
        let angle = 180.0 - 1e-8;
        assert_eq!(
            polygon_sides_from_interior_angle(angle),
            Err(GeometryError::AngleOutOfRange { angle })
        );

        // 360 / 0.0001 stays well inside u32
        assert_eq!(polygon_sides_from_interior_angle(179.9999).map(|n| n > 3_000_000), Ok(true));
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Point::new(0, 0);
        assert!(approx(bearing_to_point(0.0, origin, Point::new(0, 1)), 0.0));
        assert!(approx(bearing_to_point(0.0, origin, Point::new(1, 0)), 90.0));
        assert!(approx(bearing_to_point(0.0, origin, Point::new(0, -1)), 180.0));
        assert!(approx(bearing_to_point(0.0, origin, Point::new(-1, 0)), 270.0));
    }

    #[test]
    fn test_bearing_accounts_for_current_heading() {
        let origin = Point::new(0, 0);
        assert!(approx(bearing_to_point(90.0, origin, Point::new(0, 1)), 270.0));
        assert!(approx(bearing_to_point(-90.0, origin, Point::new(1, 0)), 180.0));
        assert!(approx(bearing_to_point(450.0, origin, Point::new(1, 0)), 0.0));
        assert!(approx(bearing_to_point(30.0, origin, Point::new(1, 1)), 15.0));
    }

    #[test]
    fn test_bearing_offset_origin() {
        let from = Point::new(4, 5);
        let to = Point::new(4, 10);
        assert!(approx(bearing_to_point(0.0, from, to), 0.0));
    }

    #[test]
    fn test_bearing_same_point_is_no_turn() {
        let p = Point::new(3, -2);
        assert_eq!(bearing_to_point(123.0, p, p), 0.0);
    }

    #[test]
    fn test_bearing_always_in_range() {
        let origin = Point::new(0, 0);
        let mut heading = -1000.0;
        while heading < 1000.0 {
            for x in -3..=3 {
                for y in -3..=3 {
                    let b = bearing_to_point(heading, origin, Point::new(x, y));
                    assert!((0.0..360.0).contains(&b), "{} -> ({}, {}): {}", heading, x, y, b);
                }
            }
            heading += 37.3;
        }
    }

    #[test]
    fn test_advance_heading() {
        assert_eq!(advance_heading(0.0, 90.0), 90.0);
        assert_eq!(advance_heading(270.0, 90.0), 0.0);
        assert_eq!(advance_heading(300.0, 100.0), 40.0);
    }
}
