//! turtlesoup - Turtle-graphics geometry: polygons, waypoint headings and Koch snowflakes

pub mod config;
pub mod domain;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod render;
pub mod turtle;
