//! Validate command handler.

use std::io::Write;

use color_eyre::Result;

use crate::catalog;

pub fn run(out: &mut impl Write) -> Result<()> {
    let categories = catalog::all();
    tracing::info!("Validating {} categories", categories.len());

    catalog::validate(categories)?;

    writeln!(out, "{} categories OK", categories.len())?;
    Ok(())
}
