//! [`Chord`] command — lines that start with a key name instead of a keyword.
//!
//! Script syntax:
//! - `CTRL ALT DELETE` — a line led by a modifier presses every key on it
//! - `ENTER` — any other key is a single keystroke

use crate::command::{Context, DuckyCommand};
use crate::keys::{self, Key};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Presses its keys left to right, then releases them in the same order.
///
/// None of the keys are recorded as held: the chord is over when the command
/// finishes. If the keyboard rejects a press part-way, the keys already down
/// are released before the error is returned.
pub struct Chord {
    pub keys: Vec<Key>,
}

impl Chord {
    pub const NAME: &'static str = "chord";

    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// A chord of exactly one key.
    pub fn keystroke(name: &str) -> Box<dyn DuckyCommand> {
        Box::new(Self::new(vec![keys::resolve(name)]))
    }
}

#[async_trait(?Send)]
impl DuckyCommand for Chord {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Parses the whole command, leading key included.
    fn parse(command: &str) -> Self {
        Self::new(command.split_whitespace().map(keys::resolve).collect())
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let mut pressed = 0;
        let mut result = Ok(());
        for key in &self.keys {
            if let Err(err) = ctx.press(*key, false) {
                result = Err(err);
                break;
            }
            pressed += 1;
        }

        if result.is_err() {
            debug!(pressed, "chord interrupted, releasing pressed keys");
        }
        for key in &self.keys[..pressed] {
            if let Err(err) = ctx.release(*key, false) {
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }
        result
    }
}
