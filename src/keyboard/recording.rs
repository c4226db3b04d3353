//! [`RecordingKeyboard`] — captures every call for later inspection.

use super::Keyboard;
use crate::keys::Key;
use anyhow::{Result, anyhow};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;

/// One call made against a [`Keyboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Press(Key),
    Release(Key),
    Write(Key),
    Print(String),
}

/// A keyboard that records calls instead of sending them anywhere.
///
/// Clones share the same log, so a test can hand one clone to an
/// [`Engine`](crate::Engine) and read the events back through another.
/// Each event is stamped with [`tokio::time::Instant`], which makes pacing
/// observable under a paused test clock.
#[derive(Debug, Clone, Default)]
pub struct RecordingKeyboard {
    log: Arc<Mutex<Vec<(Instant, KeyEvent)>>>,
    fail_prints: bool,
    /// Calls to reject the first time they are made. Not shared between clones.
    fail_once: Vec<KeyEvent>,
}

impl RecordingKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `print` call fail, for exercising error paths.
    pub fn with_failing_prints(mut self) -> Self {
        self.fail_prints = true;
        self
    }

    /// Reject the first call matching `event`. Rejected calls are not logged.
    pub fn failing_once(mut self, event: KeyEvent) -> Self {
        self.fail_once.push(event);
        self
    }

    pub fn events(&self) -> Vec<KeyEvent> {
        self.lock().iter().map(|(_, event)| event.clone()).collect()
    }

    pub fn timed_events(&self) -> Vec<(Instant, KeyEvent)> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&mut self, event: KeyEvent) -> Result<()> {
        if let Some(pos) = self.fail_once.iter().position(|e| *e == event) {
            self.fail_once.remove(pos);
            return Err(anyhow!("{event:?} rejected by recording keyboard"));
        }
        self.lock().push((Instant::now(), event));
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Instant, KeyEvent)>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Keyboard for RecordingKeyboard {
    fn press(&mut self, key: Key) -> Result<()> {
        self.record(KeyEvent::Press(key))
    }

    fn release(&mut self, key: Key) -> Result<()> {
        self.record(KeyEvent::Release(key))
    }

    fn write(&mut self, key: Key) -> Result<()> {
        self.record(KeyEvent::Write(key))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        if self.fail_prints {
            return Err(anyhow!("print rejected by recording keyboard"));
        }
        self.record(KeyEvent::Print(text.to_string()))
    }
}
