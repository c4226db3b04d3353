use crate::command::Context;
use crate::error::EngineError;
use crate::keyboard::Keyboard;
use crate::parser::{Commands, parse_command};
use anyhow::{Context as _, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Runs Ducky Script against a keyboard.
///
/// One engine drives one keyboard and runs one script at a time; `execute`
/// takes `&mut self`, so a second run cannot start while one is in flight.
pub struct Engine {
    ctx: Context,
}

impl Engine {
    pub fn new(keyboard: impl Keyboard + 'static) -> Self {
        Engine {
            ctx: Context::new(Box::new(keyboard), CancellationToken::new()),
        }
    }

    /// Use `cancel` to stop runs early. Cancellation interrupts `DELAY` and
    /// `PRINT` pacing waits and is checked between commands.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.ctx.set_cancel_token(cancel);
        self
    }

    /// The execution state, for inspecting held keys and pacing after a run.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Execute a script to completion.
    ///
    /// Held keys and the `PRINT` interval are reset first. Commands are parsed
    /// and run one at a time as the script is tokenized. However the run ends,
    /// every key still held is released before this returns, so the keyboard
    /// is never left with stuck keys.
    ///
    /// # Errors
    ///
    /// Script content never causes an error. Errors come from the keyboard
    /// rejecting a call, or [`EngineError::Cancelled`] if the run was cancelled.
    pub async fn execute(&mut self, script: &str) -> Result<()> {
        self.ctx.reset();

        let outcome = self.run(script).await;
        let released = self
            .ctx
            .release_all()
            .context("Failed to release held keys");

        match (&outcome, &released) {
            (Ok(()), Ok(())) => info!("script finished"),
            (Err(err), _) => warn!(error = %err, "script stopped early"),
            (Ok(()), Err(_)) => {}
        }
        outcome.and(released)
    }

    async fn run(&mut self, script: &str) -> Result<()> {
        for (index, line) in Commands::new(script).enumerate() {
            if self.ctx.cancel_token().is_cancelled() {
                return Err(EngineError::Cancelled.into());
            }
            let Some(command) = parse_command(line) else {
                continue;
            };
            debug!(index, command = command.name(), line = line.trim(), "dispatch");
            command
                .execute(&mut self.ctx)
                .await
                .with_context(|| format!("Command {} failed: {}", index + 1, line.trim()))?;
        }
        Ok(())
    }
}
