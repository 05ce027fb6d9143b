//! CLI argument definitions for the OD-Lens calculator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use odlens_model::{ApertureMode, Projection, SolveMode};

#[derive(Parser)]
#[command(
    name = "odlens",
    version,
    about = "OD-Lens - calculate the main optical parameters of a camera lens",
    long_about = "Calculate the main optical parameters of a camera lens.\n\n\
                  Given any two of focal length, field of view and image size, the third\n\
                  is derived under a rectilinear or equidistant projection. The entrance\n\
                  pupil and f-number derive from each other and the focal length."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve the optical triplet and aperture once from flags.
    Solve(SolveArgs),

    /// Start a line-oriented interactive session.
    Interactive,
}

#[derive(Parser)]
pub struct SolveArgs {
    /// Projection model relating image height to the half field angle.
    #[arg(long, value_enum, default_value = "rectilinear")]
    pub projection: ProjectionArg,

    /// Which field of the optical triplet to derive.
    #[arg(long = "solve-for", value_enum, default_value = "focal")]
    pub solve_for: SolveForArg,

    /// Which aperture field to derive.
    #[arg(long = "aperture-for", value_enum, default_value = "pupil")]
    pub aperture_for: ApertureForArg,

    /// Focal length in millimeters.
    #[arg(long = "focal", value_name = "MM")]
    pub focal: Option<String>,

    /// Full field of view in degrees.
    #[arg(long = "fov", value_name = "DEG")]
    pub fov: Option<String>,

    /// Full image (sensor) size in millimeters.
    #[arg(long = "image", value_name = "MM")]
    pub image: Option<String>,

    /// Entrance pupil diameter in millimeters.
    #[arg(long = "pupil", value_name = "MM")]
    pub pupil: Option<String>,

    /// F-number (focal length over pupil diameter).
    #[arg(long = "f-number", value_name = "N")]
    pub f_number: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectionArg {
    Rectilinear,
    Equidistant,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Rectilinear => Self::Rectilinear,
            ProjectionArg::Equidistant => Self::Equidistant,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SolveForArg {
    Focal,
    Fov,
    Image,
}

impl From<SolveForArg> for SolveMode {
    fn from(arg: SolveForArg) -> Self {
        match arg {
            SolveForArg::Focal => Self::Focal,
            SolveForArg::Fov => Self::FieldOfView,
            SolveForArg::Image => Self::ImageSize,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ApertureForArg {
    Pupil,
    FNumber,
}

impl From<ApertureForArg> for ApertureMode {
    fn from(arg: ApertureForArg) -> Self {
        match arg {
            ApertureForArg::Pupil => Self::Pupil,
            ApertureForArg::FNumber => Self::FNumber,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
