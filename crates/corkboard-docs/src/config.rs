//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format of the rendered docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Html,
    Json,
}

/// A component whose card can be rendered on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Component {
    Touchable,
    Label,
    Checkbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "corkboard-docs")]
#[command(about = "Renders the Corkboard component documentation cards")]
#[command(version)]
pub struct DocsConfig {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Only render this component (default: all)
    #[arg(long, value_enum)]
    pub component: Option<Component>,

    /// Write to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}
