//! List command handler.

use std::io::Write;

use color_eyre::Result;

use super::Renderer;
use crate::catalog;

pub fn run(renderer: &Renderer, out: &mut impl Write) -> Result<()> {
    let categories = catalog::all();
    tracing::info!(count = categories.len(), "Listing categories");
    renderer.write_all(out, categories)
}
