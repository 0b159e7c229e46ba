pub mod fractal;
pub mod shapes;

pub use fractal::{draw_koch_curve, draw_personal_art, draw_snowflake};
pub use shapes::{draw_regular_polygon, draw_square};
