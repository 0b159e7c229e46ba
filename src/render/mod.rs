pub mod svg;

pub use svg::{SvgStyle, render_svg, write_svg};
