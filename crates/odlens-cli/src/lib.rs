//! CLI library components for the OD-Lens calculator.

pub mod logging;
pub mod readout;
pub mod session;
