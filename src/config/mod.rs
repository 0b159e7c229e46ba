use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::SvgStyle;

fn default_side_length() -> i32 {
    150
}
fn default_sides() -> u32 {
    5
}
fn default_level() -> u32 {
    3
}
fn default_stroke() -> String {
    "black".to_string()
}
fn default_stroke_width() -> f64 {
    1.0
}
fn default_margin() -> f64 {
    10.0
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `turtlesoup.toml`
///
/// Every field is optional in the file; CLI arguments take precedence over
/// whatever is set here.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_side_length")]
    pub side_length: i32,
    #[serde(default = "default_sides")]
    pub sides: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            side_length: default_side_length(),
            sides: default_sides(),
            level: default_level(),
            output: None,
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            margin: default_margin(),
            verbose: default_verbose(),
        }
    }
}

/// Outcome of searching the standard config locations
///
/// Parse failures are collected rather than logged so the caller can report
/// them once logging is set up.
#[derive(Debug, Default)]
pub struct ConfigSearch {
    pub config: Option<FileConfig>,
    pub path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl FileConfig {
    /// Search the standard locations and return the first config that parses
    pub fn load() -> ConfigSearch {
        Self::load_from(&get_config_paths())
    }

    /// Return the first config in `paths` that exists and parses
    pub fn load_from(paths: &[PathBuf]) -> ConfigSearch {
        let mut search = ConfigSearch::default();

        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        search.config = Some(config);
                        search.path = Some(path.clone());
                        return search;
                    }
                    Err(e) => {
                        search
                            .warnings
                            .push(format!("Failed to parse config file {:?}: {}", path, e));
                    }
                }
            }
        }
        search
    }

    /// Read an explicitly named config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn svg_style(&self) -> SvgStyle {
        SvgStyle {
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
            margin: self.margin,
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("turtlesoup.toml"));
    paths.push(PathBuf::from(".turtlesoup.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("turtlesoup").join("config.toml"));
        paths.push(config_dir.join("turtlesoup.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".turtlesoup.toml"));
        paths.push(home.join(".config").join("turtlesoup").join("config.toml"));
    }

    paths
}
