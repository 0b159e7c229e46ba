pub mod angle;
pub mod path;

pub use angle::{
    advance_heading, bearing_to_point, normalize_degrees, polygon_sides_from_interior_angle,
    regular_polygon_interior_angle,
};
pub use path::{heading_adjustments, heading_adjustments_from_coords};
