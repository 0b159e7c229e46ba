use geo::{BoundingRect, LineString, Rect, coord};

use super::Turtle;
use crate::geometry::normalize_degrees;

/// Turtle that moves on a plane and records where it has been
///
/// Starts at the origin facing north. The pen is always down, so every
/// `forward` extends one continuous polyline.
#[derive(Debug, Clone)]
pub struct PathTurtle {
    x: f64,
    y: f64,
    /// Clockwise degrees from north, kept in [0, 360)
    heading: f64,
    path: LineString<f64>,
}

impl PathTurtle {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            path: LineString::new(vec![coord! { x: 0.0, y: 0.0 }]),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Visited positions, starting with the origin
    pub fn path(&self) -> &LineString<f64> {
        &self.path
    }

    /// Number of forward moves drawn so far
    pub fn segment_count(&self) -> usize {
        self.path.0.len() - 1
    }

    /// Bounding box of the drawn path, `None` until the first move
    pub fn bounds(&self) -> Option<Rect<f64>> {
        if self.segment_count() == 0 {
            return None;
        }
        self.path.bounding_rect()
    }

    pub fn into_path(self) -> LineString<f64> {
        self.path
    }
}

impl Default for PathTurtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle for PathTurtle {
    fn forward(&mut self, distance: i32) {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let units = distance as f64;

        self.x += units * sin;
        self.y += units * cos;
        self.path.0.push(coord! { x: self.x, y: self.y });
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading + degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin_facing_north() {
        let turtle = PathTurtle::new();
        assert_eq!(turtle.position(), (0.0, 0.0));
        assert_eq!(turtle.heading(), 0.0);
        assert_eq!(turtle.segment_count(), 0);
        assert!(turtle.bounds().is_none());
    }

    #[test]
    fn test_forward_follows_heading() {
        let mut turtle = PathTurtle::new();
        turtle.forward(10);
        let (x, y) = turtle.position();
        assert!(x.abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);

        turtle.turn(90.0);
        turtle.forward(5);
        let (x, y) = turtle.position();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_turn_normalizes_heading() {
        let mut turtle = PathTurtle::new();
        turtle.turn(-90.0);
        assert_eq!(turtle.heading(), 270.0);
        turtle.turn(450.0);
        assert_eq!(turtle.heading(), 0.0);
    }

    #[test]
    fn test_bounds() {
        let mut turtle = PathTurtle::new();
        turtle.forward(4);
        turtle.turn(90.0);
        turtle.forward(3);

        let bounds = turtle.bounds().unwrap();
        assert!(bounds.min().x.abs() < 1e-9);
        assert!(bounds.min().y.abs() < 1e-9);
        assert!((bounds.max().x - 3.0).abs() < 1e-9);
        assert!((bounds.max().y - 4.0).abs() < 1e-9);
        assert_eq!(turtle.path().0.len(), 3);
    }
}
