//! Rendering of rank results for the command line.

pub mod json;
pub mod terminal;

use crate::cli::OutputFormat;
use crate::rank::{RankBreakdown, RankResult};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use json::format_json;
pub use terminal::{colorize_level, format_breakdown_terminal, format_result_terminal};

pub fn format_result(result: &RankResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(format_result_terminal(result)),
        OutputFormat::Json => format_json(result),
    }
}

pub fn format_breakdown(breakdown: &RankBreakdown, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(format_breakdown_terminal(breakdown)),
        OutputFormat::Json => format_json(breakdown),
    }
}

/// Write rendered output to a file, or stdout when no file is given.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{content}")?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
