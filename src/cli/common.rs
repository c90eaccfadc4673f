//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options, selected per command with `-output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table (default)
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// JSON (the raw `data` member of the API response)
    Json,
    /// YAML (the raw `data` member of the API response)
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
