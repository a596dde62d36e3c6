use std::env;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::warn;

/// Renderings the CLI can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Html,
    Fields,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "html" => Some(OutputFormat::Html),
            "fields" => Some(OutputFormat::Fields),
            _ => None,
        }
    }
}

pub const DEFAULT_FORMATS: [OutputFormat; 3] =
    [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Html];

#[derive(Clone, Debug)]
pub struct Config {
    pub out_dir: PathBuf,
    pub formats: Vec<OutputFormat>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            out_dir: var("DEADBALL_OUT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("out")),
            formats: var("DEADBALL_FORMATS")
                .map(|v| parse_formats(&v))
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FORMATS.to_vec()),
        }
    }
}

fn parse_formats(list: &str) -> Vec<OutputFormat> {
    let mut formats = Vec::new();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match OutputFormat::from_name(name) {
            Some(f) if !formats.contains(&f) => formats.push(f),
            Some(_) => {}
            None => warn!("Ignoring unknown output format {:?} in DEADBALL_FORMATS", name),
        }
    }
    formats
}
