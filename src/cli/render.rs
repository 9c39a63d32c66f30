//! Category output formatting shared by the subcommands.

use std::io::Write;

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::models::Category;

/// Writes categories in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub format: OutputFormat,
    pub icons: bool,
}

impl Renderer {
    /// Text form: `<icon> <id>  <name> — <description>`.
    pub fn line(&self, category: &Category) -> String {
        let head = match (self.icons, category.icon) {
            (true, Some(icon)) => format!("{} {}", icon, category.id),
            _ => category.id.to_string(),
        };
        format!("{}  {} — {}", head, category.name, category.description)
    }

    pub fn write_one(&self, out: &mut impl Write, category: &Category) -> color_eyre::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", self.line(category))?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(category).map_err(AppError::from)?;
                writeln!(out, "{}", json)?;
            }
        }
        Ok(())
    }

    pub fn write_all(&self, out: &mut impl Write, categories: &[Category]) -> color_eyre::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for category in categories {
                    writeln!(out, "{}", self.line(category))?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(categories).map_err(AppError::from)?;
                writeln!(out, "{}", json)?;
            }
        }
        Ok(())
    }
}
