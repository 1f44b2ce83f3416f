use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CliMode, USAGE, parse_cli_mode, run_check_mode, run_render_mode};
use kalender::storage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    let (config, config_error) = match Config::load_or_create() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    setup_logging(&config.logging.level);
    if let Some(e) = config_error {
        tracing::warn!("Using default config, {} could not be loaded: {}", Config::config_path().display(), e);
    }

    match cli_mode {
        CliMode::Help => {
            println!("{USAGE}");
            Ok(ExitCode::SUCCESS)
        }
        CliMode::Render(options) => {
            run_render_mode(config, &options).await?;
            Ok(ExitCode::SUCCESS)
        }
        CliMode::Check(options) => {
            let has_errors = run_check_mode(config, &options).await?;
            Ok(if has_errors { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}

fn setup_logging(level: &str) {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "kalender.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("kalender started");
}
