//! [`TraceKeyboard`] — a dry-run sink that describes each call as a line of text.

use super::Keyboard;
use crate::keys::Key;
use anyhow::{Context as _, Result};
use std::io::{self, Write};

/// Writes one human-readable line per keyboard call.
///
/// ```
/// use duckyscript::keyboard::{Keyboard, TraceKeyboard};
/// use duckyscript::keys::resolve;
///
/// let mut out = Vec::new();
/// TraceKeyboard::new(&mut out).write(resolve("ENTER")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "write   ENTER\n");
/// ```
pub struct TraceKeyboard<W: Write> {
    out: W,
}

impl TraceKeyboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TraceKeyboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, verb: &str, what: &dyn std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{verb:<7} {what}").context("Failed to write trace line")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Keyboard for TraceKeyboard<W> {
    fn press(&mut self, key: Key) -> Result<()> {
        self.line("press", &key)
    }

    fn release(&mut self, key: Key) -> Result<()> {
        self.line("release", &key)
    }

    fn write(&mut self, key: Key) -> Result<()> {
        self.line("write", &key)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.line("print", &format_args!("{text:?}"))
    }
}
