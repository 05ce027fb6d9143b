//! Command entry points for the CLI.

use std::io;

use anyhow::{Context, Result};

use odlens_cli::readout::print_readout;
use odlens_cli::session::Session;
use odlens_core::Calculator;
use odlens_model::FieldId;

use crate::cli::SolveArgs;

pub fn run_solve(args: &SolveArgs) -> Result<()> {
    let mut calc = Calculator::with_modes(
        args.projection.into(),
        args.solve_for.into(),
        args.aperture_for.into(),
    );
    apply_field(&mut calc, FieldId::Focal, args.focal.as_deref())?;
    apply_field(&mut calc, FieldId::Fov, args.fov.as_deref())?;
    apply_field(&mut calc, FieldId::Image, args.image.as_deref())?;
    apply_field(&mut calc, FieldId::Pupil, args.pupil.as_deref())?;
    apply_field(&mut calc, FieldId::FNumber, args.f_number.as_deref())?;
    print_readout(&calc);
    Ok(())
}

pub fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();
    session.run(stdin.lock(), stdout.lock())
}

/// One-shot mode has no previous state to retain, so malformed input is a
/// plain error rather than a silent no-op.
fn apply_field(calc: &mut Calculator, field: FieldId, value: Option<&str>) -> Result<()> {
    if let Some(text) = value {
        calc.edit(field, text)
            .with_context(|| format!("invalid {field} input"))?;
    }
    Ok(())
}
