//! The [`DuckyCommand`] trait and the [`Context`] type commands receive when executed.

use crate::active_keys::ActiveKeys;
use crate::error::EngineError;
use crate::keyboard::Keyboard;
use crate::keys::{self, Key};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Pacing between characters typed by `PRINT` until a script changes it.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5);

/// Execution state shared by the commands of one script run.
///
/// Owns the output keyboard, the keys currently held, the `PRINT` pacing
/// interval and the cancellation token. Every key a command sends goes
/// through here, so the held-key bookkeeping cannot drift from what the
/// keyboard was told.
pub struct Context {
    keyboard: Box<dyn Keyboard>,
    active: ActiveKeys,
    interval: Duration,
    cancel: CancellationToken,
}

impl Context {
    pub(crate) fn new(keyboard: Box<dyn Keyboard>, cancel: CancellationToken) -> Self {
        Self {
            keyboard,
            active: ActiveKeys::new(),
            interval: DEFAULT_INTERVAL,
            cancel,
        }
    }

    /// Forget held keys and restore the default interval.
    pub(crate) fn reset(&mut self) {
        self.active.clear();
        self.interval = DEFAULT_INTERVAL;
    }

    pub(crate) fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub(crate) fn set_cancel_token(&mut self, cancel: CancellationToken) {
        self.cancel = cancel;
    }

    /// Keys pressed with tracking and not yet released.
    pub fn active_keys(&self) -> &ActiveKeys {
        &self.active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Press `key`; with `track`, remember it as held until released.
    pub fn press(&mut self, key: Key, track: bool) -> Result<()> {
        trace!(%key, track, "press");
        self.keyboard.press(key)?;
        if track {
            self.active.insert(key);
        }
        Ok(())
    }

    /// Release `key`; with `track`, drop every held entry equal to it.
    ///
    /// A key the keyboard refused to release stays held, so the end-of-run
    /// release pass tries it again.
    pub fn release(&mut self, key: Key, track: bool) -> Result<()> {
        trace!(%key, track, "release");
        self.keyboard.release(key)?;
        if track {
            self.active.remove(key);
        }
        Ok(())
    }

    /// Release a key by script name. `ALL` releases every held key.
    pub fn release_named(&mut self, name: &str, track: bool) -> Result<()> {
        if name == "ALL" {
            return self.release_all();
        }
        self.release(keys::resolve(name), track)
    }

    /// Release every held key and empty the bookkeeping.
    ///
    /// The held set is emptied even if the keyboard rejects a release; the
    /// remaining keys are still attempted and the first error is returned.
    pub fn release_all(&mut self) -> Result<()> {
        let mut result = Ok(());
        for key in self.active.drain() {
            trace!(%key, "release held");
            if let Err(err) = self.keyboard.release(key) {
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }
        result
    }

    /// Momentary keystroke that is never tracked.
    pub fn write(&mut self, key: Key) -> Result<()> {
        trace!(%key, "write");
        self.keyboard.write(key)
    }

    /// Type `text` in one burst.
    pub fn print(&mut self, text: &str) -> Result<()> {
        trace!(text, "print");
        self.keyboard.print(text)
    }

    /// Wait for `duration`, returning early with [`EngineError::Cancelled`]
    /// if the run is cancelled.
    pub async fn sleep(&self, duration: Duration) -> Result<()> {
        tokio::select! {
            _ = self.cancel.cancelled() => Err(EngineError::Cancelled.into()),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

/// A single Ducky Script command.
///
/// Implement this trait to add a new command. Then:
///
/// 1. Define `pub const NAME: &'static str` on your struct, the script
///    keyword (e.g. `"STRING"`, `"DELAY"`) used by the parser.
/// 2. Re-export the struct from `src/commands/mod.rs`.
/// 3. Add one entry to the `REGISTRY` in [`crate::parser`]:
///    `(MyCmd::NAME, MyCmd::parse_boxed)`.
#[async_trait(?Send)]
pub trait DuckyCommand: 'static {
    /// The command name, accessible at runtime through a trait object.
    fn name(&self) -> &'static str;

    /// Parse this command from the argument string (everything after the
    /// keyword). Parsing never fails; bad arguments degrade to defaults.
    fn parse(args: &str) -> Self
    where
        Self: Sized;

    /// Parse and box this command. Used as the function-pointer type stored in
    /// the command registry.
    fn parse_boxed(args: &str) -> Box<dyn DuckyCommand>
    where
        Self: Sized,
    {
        Box::new(Self::parse(args))
    }

    /// Execute the command using the provided context.
    async fn execute(&self, ctx: &mut Context) -> Result<()>;
}
