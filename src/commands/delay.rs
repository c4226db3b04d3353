//! [`Delay`] command — pauses the script or changes the `PRINT` pacing.
//!
//! Script syntax:
//! - `DELAY 500` — wait 500 ms
//! - `DELAY INTERVAL 20` — type `PRINT` text at 20 ms per character

use crate::command::{Context, DuckyCommand};
use crate::parser::{next_token, parse_int_prefix};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Block the script once.
    Wait(Duration),
    /// Set the per-character interval for the rest of the run.
    SetInterval(Duration),
}

impl Delay {
    pub const NAME: &'static str = "DELAY";
}

/// Milliseconds from the leading integer of `arg`. Unparseable and negative
/// values become zero.
fn millis(arg: &str) -> Duration {
    let value = parse_int_prefix(arg).unwrap_or_else(|| {
        warn!(arg = arg.trim(), "DELAY value is not a number, using 0");
        0
    });
    Duration::from_millis(value.max(0).unsigned_abs())
}

#[async_trait(?Send)]
impl DuckyCommand for Delay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Self {
        match next_token(args) {
            ("INTERVAL", rest) => Delay::SetInterval(millis(rest)),
            (token, _) => Delay::Wait(millis(token)),
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match *self {
            Delay::Wait(duration) => ctx.sleep(duration).await,
            Delay::SetInterval(interval) => {
                ctx.set_interval(interval);
                Ok(())
            }
        }
    }
}
