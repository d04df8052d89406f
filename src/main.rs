//! devready CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devready::cli::{Cli, CommandContext, CommandDispatcher};
use devready::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries results and protocol messages.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devready=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devready=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devready starting with args: {:?}", cli);

    // Determine project root
    let project_dir = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = TerminalUI::new(cli.no_color);
    let dispatcher = CommandDispatcher::new(CommandContext::new(project_dir, cli.config.clone()));

    match dispatcher.dispatch(&cli, &mut ui).await {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
