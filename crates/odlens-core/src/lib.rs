pub mod aperture;
pub mod calculator;
pub mod format;
pub mod fov;
pub mod parse;
pub mod recompute;
pub mod summary;

pub use aperture::{ApertureSolution, solve_aperture};
pub use calculator::Calculator;
pub use format::format_sig;
pub use fov::{OpticalSolution, solve_fov_triplet};
pub use parse::{ParsedInputs, parse_inputs};
pub use recompute::{DISPLAY_DIGITS, RATIO_DIGITS, Readout, UNKNOWN, recompute};
pub use summary::render_summary;
