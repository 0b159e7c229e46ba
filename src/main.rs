use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use turtlesoup::config::{ConfigSearch, FileConfig};
use turtlesoup::domain::Point;
use turtlesoup::drawing::{
    draw_koch_curve, draw_personal_art, draw_regular_polygon, draw_snowflake, draw_square,
};
use turtlesoup::geometry::heading_adjustments;
use turtlesoup::render::write_svg;
use turtlesoup::turtle::PathTurtle;

/// Draw turtle-graphics figures to SVG and plan turtle headings
///
/// Examples:
///   # Regular heptagon with 80-unit sides
///   turtlesoup polygon --sides 7 --side 80
///
///   # Level-4 Koch curve written to a custom file
///   turtlesoup -o koch.svg koch --level 4 --length 729
///
///   # Heading adjustments to walk a triangle
///   turtlesoup headings 0,0 10,0 5,8 0,0
#[derive(Parser, Debug)]
#[command(name = "turtlesoup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches turtlesoup.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output SVG file path (defaults to {figure}.svg)
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Deepest Koch curve the CLI will draw; each level multiplies the path by 4
const MAX_KOCH_LEVEL: u32 = 8;

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Draw(Figure),
    /// Print the heading adjustment for each leg between waypoints given as x,y
    Headings {
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point>,
    },
}

#[derive(Subcommand, Debug)]
enum Figure {
    /// Square with clockwise corners
    Square {
        #[arg(long)]
        side: Option<i32>,
    },
    /// Regular polygon with the start point as its lower-left vertex
    Polygon {
        #[arg(long)]
        sides: Option<u32>,
        #[arg(long)]
        side: Option<i32>,
    },
    /// Single Koch curve heading north
    Koch {
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_KOCH_LEVEL as i64))]
        level: Option<u32>,
        #[arg(long)]
        length: Option<i32>,
    },
    /// Three-sided Koch snowflake
    Snowflake {
        #[arg(long)]
        side: Option<i32>,
    },
    /// The default showcase drawing
    Art,
}

impl Figure {
    fn name(&self) -> &'static str {
        match self {
            Figure::Square { .. } => "square",
            Figure::Polygon { .. } => "polygon",
            Figure::Koch { .. } => "koch",
            Figure::Snowflake { .. } => "snowflake",
            Figure::Art => "art",
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid x in {:?}: {}", s, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid y in {:?}: {}", s, e))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let search = load_config(args.config.as_deref())?;
    let file_config = search.config.unwrap_or_default();
    let verbose = args.verbose || file_config.verbose;

    init_tracing(verbose);
    for warning in &search.warnings {
        warn!("{}", warning);
    }
    if let Some(ref path) = search.path {
        debug!(path = %path.display(), "Loaded config file");
    }

    match args.command {
        Command::Headings { points } => {
            for adjustment in heading_adjustments(&points) {
                println!("{:.4}", adjustment);
            }
            Ok(())
        }
        Command::Draw(figure) => run_drawing(&figure, args.output, &file_config, verbose),
    }
}

/// Use the explicit `--config` file if given, otherwise search the standard locations
fn load_config(explicit: Option<&Path>) -> Result<ConfigSearch> {
    let Some(config_path) = explicit else {
        return Ok(FileConfig::load());
    };

    if !config_path.exists() {
        bail!("Config file not found: {:?}", config_path);
    }
    Ok(ConfigSearch {
        config: Some(FileConfig::from_path(config_path)?),
        path: Some(config_path.to_path_buf()),
        warnings: Vec::new(),
    })
}

fn run_drawing(
    figure: &Figure,
    output: Option<PathBuf>,
    file_config: &FileConfig,
    verbose: bool,
) -> Result<()> {
    let name = figure.name();
    let output_path = output
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(format!("{}.svg", name)));
    let style = file_config.svg_style();

    println!("turtlesoup - Turtle Geometry to SVG");
    println!("===================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Figure: {}", name);
        println!("  Stroke: {} ({} wide)", style.stroke, style.stroke_width);
        println!("  Margin: {}", style.margin);
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner(&format!("Drawing {}...", name))?;
    let start = Instant::now();
    let mut turtle = PathTurtle::new();

    draw_figure(figure, &mut turtle, file_config)?;

    spinner.finish_with_message(format!(
        "Drew {} segments [{:.1}s]",
        turtle.segment_count(),
        start.elapsed().as_secs_f32()
    ));

    if let Some(bounds) = turtle.bounds() {
        debug!(
            width = bounds.width(),
            height = bounds.height(),
            "Path bounds"
        );
    }

    write_svg(&output_path, turtle.path(), &style).context("Failed to write SVG file")?;
    info!(output = %output_path.display(), "Wrote SVG");

    println!();
    println!("Output: {}", output_path.display());

    Ok(())
}

/// Drive `turtle` through `figure`, filling unset sizes from the config file
fn draw_figure(figure: &Figure, turtle: &mut PathTurtle, file_config: &FileConfig) -> Result<()> {
    let side_or_default = |side: &Option<i32>| side.unwrap_or(file_config.side_length);

    match figure {
        Figure::Square { side } => draw_square(turtle, side_or_default(side)),
        Figure::Polygon { sides, side } => {
            let sides = sides.unwrap_or(file_config.sides);
            draw_regular_polygon(turtle, sides, side_or_default(side))
                .with_context(|| format!("Cannot draw a polygon with {} sides", sides))?;
        }
        Figure::Koch { level, length } => {
            let level = level.unwrap_or(file_config.level);
            if level > MAX_KOCH_LEVEL {
                bail!(
                    "Koch level {} is too deep, the maximum is {}",
                    level,
                    MAX_KOCH_LEVEL
                );
            }
            draw_koch_curve(turtle, level, side_or_default(length));
        }
        Figure::Snowflake { side } => draw_snowflake(turtle, side_or_default(side)),
        Figure::Art => draw_personal_art(turtle),
    }
    Ok(())
}

fn log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_tracing(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(pb)
}
