//! Line-oriented interactive session.
//!
//! Mirrors the desktop calculator: every field edit triggers a full
//! recompute, and malformed numeric input leaves the displayed values at
//! their last valid state.

use std::io::{BufRead, Write};

use anyhow::Result;

use odlens_core::Calculator;
use odlens_model::{ApertureMode, FieldId, Projection, SolveMode};

use crate::readout::readout_table;

const HELP: &str = "\
commands:
  <field>=<value>        edit a field: f, fov, image, pupil (d), n
  solve f|fov|image      choose which triplet field is derived
  aperture d|n           choose which aperture field is derived
  projection <name>      rectilinear or equidistant
  show                   print the current readout
  save                   render the summary into the output buffer
  help                   this text
  quit                   leave the session";

/// Outcome of applying one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// State changed; the readout is fresh.
    Updated,
    /// Readout requested without a change.
    Show,
    /// Summary rendered into the output buffer.
    Saved,
    /// `save` with every field blank; the buffer is untouched.
    NothingToSave,
    /// Malformed numeric input; previous values retained.
    Retained,
    /// Unrecognized command or field name.
    Unknown(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    calc: Calculator,
}

impl Session {
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Apply one input line and report what happened.
    pub fn apply_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Show;
        }
        if let Some((name, value)) = line.split_once('=') {
            let Some(field) = field_by_name(name.trim()) else {
                return Reply::Unknown(name.trim().to_string());
            };
            return match self.calc.edit(field, value.trim()) {
                Ok(()) => Reply::Updated,
                Err(_) => Reply::Retained,
            };
        }
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("quit" | "exit"), None, None) => Reply::Quit,
            (Some("show"), None, None) => Reply::Show,
            (Some("help"), None, None) => Reply::Help,
            (Some("save"), None, None) => {
                if self.calc.save() {
                    Reply::Saved
                } else {
                    Reply::NothingToSave
                }
            }
            (Some("projection"), Some(name), None) => match projection_by_name(name) {
                Some(projection) => self.switch(|calc| calc.set_projection(projection)),
                None => Reply::Unknown(name.to_string()),
            },
            (Some("solve"), Some(name), None) => match solve_mode_by_name(name) {
                Some(mode) => self.switch(|calc| calc.set_solve_mode(mode)),
                None => Reply::Unknown(name.to_string()),
            },
            (Some("aperture"), Some(name), None) => match aperture_mode_by_name(name) {
                Some(mode) => self.switch(|calc| calc.set_aperture_mode(mode)),
                None => Reply::Unknown(name.to_string()),
            },
            _ => Reply::Unknown(line.to_string()),
        }
    }

    /// Drive the session over a line-based reader until `quit` or EOF.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "OD-Lens interactive session. Type 'help' for commands.")?;
        writeln!(output, "{}", readout_table(&self.calc))?;
        for line in input.lines() {
            let line = line?;
            match self.apply_line(&line) {
                Reply::Quit => break,
                Reply::Updated | Reply::Show => {
                    writeln!(output, "{}", readout_table(&self.calc))?;
                }
                Reply::Saved => {
                    writeln!(output, "{}", self.calc.summary().unwrap_or_default())?;
                }
                Reply::NothingToSave => writeln!(output, "nothing to save")?,
                // Matching the desktop behavior: malformed input is silent.
                Reply::Retained => {}
                Reply::Unknown(input_text) => {
                    writeln!(output, "unrecognized input: {input_text}")?;
                }
                Reply::Help => writeln!(output, "{HELP}")?,
            }
        }
        Ok(())
    }

    fn switch(&mut self, apply: impl FnOnce(&mut Calculator) -> odlens_model::Result<()>) -> Reply {
        match apply(&mut self.calc) {
            Ok(()) => Reply::Updated,
            // The switch took effect, but a malformed field kept the
            // readout at its last valid state.
            Err(_) => Reply::Retained,
        }
    }
}

fn field_by_name(name: &str) -> Option<FieldId> {
    match name.to_ascii_lowercase().as_str() {
        "f" | "focal" => Some(FieldId::Focal),
        "fov" => Some(FieldId::Fov),
        "image" => Some(FieldId::Image),
        "d" | "pupil" => Some(FieldId::Pupil),
        "n" | "f-number" | "fnumber" => Some(FieldId::FNumber),
        _ => None,
    }
}

fn projection_by_name(name: &str) -> Option<Projection> {
    let lower = name.to_ascii_lowercase();
    Projection::all()
        .iter()
        .copied()
        .find(|p| p.display_name() == lower)
}

fn solve_mode_by_name(name: &str) -> Option<SolveMode> {
    match name.to_ascii_lowercase().as_str() {
        "f" | "focal" => Some(SolveMode::Focal),
        "fov" => Some(SolveMode::FieldOfView),
        "image" => Some(SolveMode::ImageSize),
        _ => None,
    }
}

fn aperture_mode_by_name(name: &str) -> Option<ApertureMode> {
    match name.to_ascii_lowercase().as_str() {
        "d" | "pupil" => Some(ApertureMode::Pupil),
        "n" | "f-number" | "fnumber" => Some(ApertureMode::FNumber),
        _ => None,
    }
}
