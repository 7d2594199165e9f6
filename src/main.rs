use anyhow::Result;
use clap::Parser;
use rankcalc::cli::{Cli, Commands};
use rankcalc::commands::{self, RankCommandConfig};
use rankcalc::RankError;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli.command);
    if let Err(err) = &result {
        if let Some(hint) = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<RankError>())
            .and_then(RankError::hint)
        {
            eprintln!("hint: {hint}");
        }
    }
    result
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Rank {
            stats,
            input,
            format,
            output,
            explain,
            config,
            plain,
        } => {
            if plain {
                colored::control::set_override(false);
            }
            commands::handle_rank(RankCommandConfig {
                stats,
                input,
                format,
                output,
                explain,
                config,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v flags
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
