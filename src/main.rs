//! FlashPrompt CLI entry point
//!
//! Parses arguments, sets up logging, runs the command and turns any error
//! into a colored, user-friendly message with exit status 1.

use anyhow::Result;
use clap::Parser;
use flashprompt::cli;
use flashprompt::core::error::user_friendly_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    init_logging(&config.log_level);

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the level chosen by the flags.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
