//! CLI entrypoint for Wordcraft
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wordcraft_application::{
    GameState, NoRoundObserver, PlayGameError, PlayGameUseCase, RoundObserver,
};
use wordcraft_infrastructure::{ConfigError, ConfigLoader, GeminiCombinationGateway};
use wordcraft_presentation::{Cli, ConsoleFormatter, FuzzyPicker, RoundReporter, SimpleProgress};

/// Directory for the log file; the picker owns the terminal so logs can't go to stderr.
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("wordcraft")
        .join("logs")
}

fn init_logging(verbose: u8) -> Result<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "wordcraft.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    ConfigLoader::load_env_file();
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose)?;
    info!("Starting Wordcraft");

    if cli.show_config {
        println!("{}", ConfigLoader::config_sources_report());
        println!("  Logs:    {}", log_dir().display());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::from)?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    let mut params = config.game.to_game_params();
    if let Some(max) = cli.max_rounds {
        params = params.with_max_rounds(usize::try_from(max).unwrap_or(usize::MAX));
    }
    if let Some(policy) = cli.on_error {
        params = params.with_error_policy(policy.into());
    }
    info!("Game params: {:?}", params);

    // === Dependency Injection ===
    let settings = config.gemini.to_settings()?;
    let gateway = Arc::new(GeminiCombinationGateway::new(settings)?);
    let picker = Arc::new(FuzzyPicker::new());

    let observer: Arc<dyn RoundObserver> = if cli.quiet {
        Arc::new(NoRoundObserver)
    } else if config.output.show_progress {
        Arc::new(RoundReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    // Ctrl+C outside the picker (e.g. while the generator runs)
    let cancellation = CancellationToken::new();
    let signal_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let use_case = PlayGameUseCase::new(picker, gateway)
        .with_params(params)
        .with_observer(observer)
        .with_cancellation(cancellation);

    let mut state = GameState::new();
    match use_case.run(&mut state).await {
        Ok(summary) => {
            info!("Game finished: {:?}", summary.end);
            println!("{}", ConsoleFormatter::format_summary(&summary));
            Ok(())
        }
        Err(e) => {
            warn!("Game aborted: {}", e);
            if let PlayGameError::Gateway(_) = &e
                && !state.discovered.is_empty()
            {
                eprintln!(
                    "Discovered before the failure: {}",
                    state
                        .discovered
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            Err(e.into())
        }
    }
}
