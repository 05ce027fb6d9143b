//! OD-Lens - GUI library
//!
//! This module exposes the state and settings layers for testing.

pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
