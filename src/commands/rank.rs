use crate::cli::{OutputFormat, StatsArgs};
use crate::config::{load_config, load_config_from_path, RankConfig};
use crate::errors::RankError;
use crate::output;
use crate::rank::{RankCalculator, RankInput};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Everything the `rank` command needs, gathered from the command line.
#[derive(Debug, Clone)]
pub struct RankCommandConfig {
    pub stats: StatsArgs,
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub explain: bool,
    pub config: Option<PathBuf>,
}

impl From<&StatsArgs> for RankInput {
    fn from(stats: &StatsArgs) -> Self {
        RankInput {
            include_all_commits: stats.all_commits,
            commits: stats.commits,
            pull_requests: stats.pull_requests,
            issues: stats.issues,
            reviews: stats.reviews,
            repositories: stats.repositories,
            stars: stats.stars,
            followers: stats.followers,
        }
    }
}

/// Parse a JSON statistics document.
pub fn parse_input(contents: &str) -> Result<RankInput, RankError> {
    serde_json::from_str(contents).map_err(|e| RankError::InvalidInput(e.to_string()))
}

fn read_input(path: &Path) -> Result<RankInput> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read statistics from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| RankError::io(path, e))
            .context("Failed to read statistics file")?
    };
    Ok(parse_input(&contents)?)
}

fn resolve_config(path: Option<&Path>) -> Result<RankConfig> {
    match path {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

/// Render the rank (or its breakdown) for already-resolved input.
pub fn render_rank(
    calculator: &RankCalculator,
    input: &RankInput,
    format: OutputFormat,
    explain: bool,
) -> Result<String> {
    if explain {
        output::format_breakdown(&calculator.explain(input), format)
    } else {
        output::format_result(&calculator.calculate(input), format)
    }
}

pub fn handle_rank(config: RankCommandConfig) -> Result<()> {
    let rank_config = resolve_config(config.config.as_deref())?;
    let input = match &config.input {
        Some(path) => read_input(path)?,
        None => RankInput::from(&config.stats),
    };
    log::debug!("Ranking input {:?}", input);

    let calculator = RankCalculator::new(rank_config);
    let rendered = render_rank(&calculator, &input, config.format, config.explain)?;
    output::write_output(&rendered, config.output.as_deref())
}
