//! CLI module.
//!
//! Subcommands:
//! - `list`: Print every category in display order
//! - `show`: Print a single category by id
//! - `validate`: Check the category table against its schema

mod list;
mod render;
mod show;
mod validate;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use crate::catalog;
use crate::config::{Config, OutputFormat};

pub use render::Renderer;

/// Content categories
#[derive(Parser)]
#[command(name = "categories")]
#[command(about = "Inspect the content category table")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all categories in display order
    List,

    /// Show a single category
    Show {
        /// Category id (e.g., "parenting")
        id: String,
    },

    /// Validate the category table
    Validate,
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        tracing::debug!(?config, "Loaded configuration");

        let renderer = Renderer {
            format: self.format.unwrap_or(config.output.format),
            icons: config.display.icons,
        };

        let mut out = std::io::stdout().lock();
        match self.command {
            Command::List => {
                catalog::validate(catalog::all())?;
                list::run(&renderer, &mut out)
            }
            Command::Show { ref id } => {
                catalog::validate(catalog::all())?;
                show::run(&renderer, id, &mut out)
            }
            Command::Validate => validate::run(&mut out),
        }
    }
}
