//! Stateful wrapper the presentation layers drive.
//!
//! Owns the raw field texts, the mode selectors, the last valid readout and
//! the summary output buffer. Every mutation triggers a full recompute; a
//! parse failure keeps the previous readout, so the hosting layer shows the
//! last valid state without extra bookkeeping.

use odlens_model::{ApertureMode, FieldId, ParseError, Projection, RawInputs, SolveMode};

use crate::recompute::{Readout, recompute};
use crate::summary::render_summary;

#[derive(Debug, Clone)]
pub struct Calculator {
    raw: RawInputs,
    projection: Projection,
    solve_mode: SolveMode,
    aperture_mode: ApertureMode,
    readout: Readout,
    summary: Option<String>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_modes(
            Projection::default(),
            SolveMode::default(),
            ApertureMode::default(),
        )
    }

    pub fn with_modes(
        projection: Projection,
        solve_mode: SolveMode,
        aperture_mode: ApertureMode,
    ) -> Self {
        let raw = RawInputs::default();
        // All fields blank, so the initial pass cannot fail.
        let readout = recompute(&raw, projection, solve_mode, aperture_mode).unwrap_or_default();
        Self {
            raw,
            projection,
            solve_mode,
            aperture_mode,
            readout,
            summary: None,
        }
    }

    /// Store a field edit and recompute.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first malformed source field. The text
    /// is kept (it stays visible in the field) but the readout keeps its
    /// last valid state.
    pub fn edit(&mut self, field: FieldId, text: &str) -> Result<(), ParseError> {
        *self.raw.get_mut(field) = text.to_string();
        self.refresh()
    }

    /// Switch the projection model and recompute.
    ///
    /// # Errors
    ///
    /// See [`Calculator::edit`]; the switch itself always takes effect.
    pub fn set_projection(&mut self, projection: Projection) -> Result<(), ParseError> {
        self.projection = projection;
        self.refresh()
    }

    /// Switch the derived field of the optical triplet and recompute.
    ///
    /// # Errors
    ///
    /// See [`Calculator::edit`]; the switch itself always takes effect.
    pub fn set_solve_mode(&mut self, mode: SolveMode) -> Result<(), ParseError> {
        self.solve_mode = mode;
        self.refresh()
    }

    /// Switch the derived aperture field and recompute.
    ///
    /// # Errors
    ///
    /// See [`Calculator::edit`]; the switch itself always takes effect.
    pub fn set_aperture_mode(&mut self, mode: ApertureMode) -> Result<(), ParseError> {
        self.aperture_mode = mode;
        self.refresh()
    }

    /// Render the summary into the output buffer.
    ///
    /// With every field blank this is a no-op that keeps the previous buffer;
    /// returns whether the buffer was rewritten.
    pub fn save(&mut self) -> bool {
        match render_summary(&self.raw) {
            Some(text) => {
                self.summary = Some(text);
                true
            }
            None => false,
        }
    }

    fn refresh(&mut self) -> Result<(), ParseError> {
        match recompute(&self.raw, self.projection, self.solve_mode, self.aperture_mode) {
            Ok(readout) => {
                self.raw = readout.fields.clone();
                self.readout = readout;
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "recompute skipped, keeping previous readout");
                Err(error)
            }
        }
    }

    pub fn raw(&self) -> &RawInputs {
        &self.raw
    }

    pub fn field_text(&self, field: FieldId) -> &str {
        self.raw.get(field)
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn solve_mode(&self) -> SolveMode {
        self.solve_mode
    }

    pub fn aperture_mode(&self) -> ApertureMode {
        self.aperture_mode
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
