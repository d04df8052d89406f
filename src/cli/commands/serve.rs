//! Serve command implementation.
//!
//! The `devready serve` command speaks the message protocol over stdio:
//! every stdin line is one inbound JSON message and every result is
//! written to stdout as one JSON line. At end of input it stops taking
//! commands, waits for the checks still running, and exits.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::error::{DevreadyError, Result};
use crate::messaging::{Dispatcher, LocalChannel};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The serve command implementation.
pub struct ServeCommand {
    context: CommandContext,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Run the protocol over arbitrary line-oriented streams.
    pub async fn serve<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let engine = Arc::new(self.context.build_engine()?);
        let (channel, mut outbound) = LocalChannel::new();
        let channel = Arc::new(channel);
        let dispatcher = Dispatcher::setup(engine, channel.clone());

        // Ends once every holder of the channel is gone, which includes
        // the tasks of checks still running.
        let writer = tokio::spawn(async move {
            while let Some(message) = outbound.recv().await {
                let mut line = serde_json::to_vec(&message)?;
                line.push(b'\n');
                output.write_all(&line).await?;
                output.flush().await?;
            }
            Ok::<_, DevreadyError>(())
        });

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(line) {
                Ok(message) => {
                    channel.send(message);
                }
                Err(e) => warn!(error = %e, "Ignoring malformed input line"),
            }
        }

        debug!("Input closed; waiting for running checks");
        dispatcher.dispose().await;
        drop(channel);

        writer
            .await
            .map_err(|e| DevreadyError::Other(anyhow::anyhow!("output writer failed: {}", e)))?
    }
}

#[async_trait(?Send)]
impl Command for ServeCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let input = BufReader::new(tokio::io::stdin());
        match self.serve(input, tokio::io::stdout()).await {
            Ok(()) => Ok(CommandResult::success()),
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(2))
            }
            Err(e) => Err(e),
        }
    }
}
