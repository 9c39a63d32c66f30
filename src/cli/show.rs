//! Show command handler.

use std::io::Write;

use color_eyre::Result;

use super::Renderer;
use crate::catalog;

pub fn run(renderer: &Renderer, id: &str, out: &mut impl Write) -> Result<()> {
    let category = catalog::get(id)?;
    tracing::info!(id = category.id, "Showing category");
    renderer.write_one(out, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    const JSON: Renderer = Renderer {
        format: OutputFormat::Json,
        icons: true,
    };

    #[test]
    fn test_show_json() {
        let mut buf = Vec::new();
        run(&JSON, "parenting", &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["name"], "Parenting");
        assert_eq!(value["id"], "parenting");
    }

    #[test]
    fn test_show_unknown_id() {
        let mut buf = Vec::new();
        let err = run(&JSON, "gardening", &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "Category not found: gardening");
        assert!(buf.is_empty());
    }
}
