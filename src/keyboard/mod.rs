//! The keystroke output sink and its host-side implementations.
//!
//! The interpreter never talks to a transport directly. It issues calls
//! against [`Keyboard`], and the implementation decides what a key code means
//! on its device: a BLE HID report, bytes into a pseudo-terminal, or a line
//! in a dry-run trace.

mod pty;
mod recording;
mod trace;

pub use pty::PtyKeyboard;
pub use recording::{KeyEvent, RecordingKeyboard};
pub use trace::TraceKeyboard;

use crate::keys::Key;
use anyhow::Result;

/// A device that can assert and release keys and type text.
///
/// Implementations must tolerate releasing a key that is not held.
pub trait Keyboard {
    /// Begin asserting `key`.
    fn press(&mut self, key: Key) -> Result<()>;

    /// Stop asserting `key`.
    fn release(&mut self, key: Key) -> Result<()>;

    /// A momentary press and release of `key`.
    fn write(&mut self, key: Key) -> Result<()> {
        self.press(key)?;
        self.release(key)
    }

    /// Type `text` as fast as the transport allows.
    fn print(&mut self, text: &str) -> Result<()>;
}

impl<K: Keyboard + ?Sized> Keyboard for Box<K> {
    fn press(&mut self, key: Key) -> Result<()> {
        (**self).press(key)
    }

    fn release(&mut self, key: Key) -> Result<()> {
        (**self).release(key)
    }

    fn write(&mut self, key: Key) -> Result<()> {
        (**self).write(key)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        (**self).print(text)
    }
}
