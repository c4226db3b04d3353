//! # duckyscript
//!
//! An interpreter for Ducky Script, the line-oriented keystroke automation
//! language used by HID injection tools.
//!
//! A script is a sequence of commands separated by newlines or `;`. The
//! [`Engine`] runs them against a [`Keyboard`], the output sink that turns
//! key codes into whatever the device needs, and keeps track of every key the
//! script holds down so that a run always ends with all keys released.
//!
//! ## Quick start
//!
//! ```no_run
//! use duckyscript::{Engine, keyboard::TraceKeyboard};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let script = r#"
//! REM open a run dialog
//! GUI r
//! DELAY 500
//! STRING notepad
//! ENTER
//! "#;
//!
//!     let mut engine = Engine::new(TraceKeyboard::stdout());
//!     engine.execute(script).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Script syntax
//!
//! | Command | Description |
//! |---------|-------------|
//! | `REM text`, `# text` | Comment |
//! | `STRING text`, `ECHO text` | Type text in one burst (quotes optional) |
//! | `PRINT text` | Type text one character at a time, paced by the interval |
//! | `SEND KEY` | A single keystroke that is never held |
//! | `DELAY n` | Wait `n` milliseconds |
//! | `DELAY INTERVAL n` | Set the `PRINT` pacing to `n` ms (default 5, reset per run) |
//! | `PRESS KEY` | Hold a key until released |
//! | `RELEASE KEY`, `RELEASE ALL`, `RELEASE` | Release one key or every held key |
//! | `CTRL ALT DELETE` | A line led by a modifier presses every key, then releases them |
//! | `ENTER` | Any other key name on its own is a single keystroke |
//!
//! Quoted text may use `"` or `'`; `\"` inside double quotes (or `\'` inside
//! single quotes) is a literal quote, and `;` inside quotes does not end the
//! command. Unknown key names type their first character, so `PRESS a`
//! holds the `a` key.
//!
//! ## Capturing output
//!
//! [`keyboard::RecordingKeyboard`] records every call. Clones share one log,
//! which makes it the natural sink for tests:
//!
//! ```
//! use duckyscript::Engine;
//! use duckyscript::keyboard::{KeyEvent, RecordingKeyboard};
//! use duckyscript::keys::resolve;
//!
//! # tokio_test_block_on(async {
//! let recorder = RecordingKeyboard::new();
//! let mut engine = Engine::new(recorder.clone());
//! engine.execute("PRESS SHIFT; STRING hi").await.unwrap();
//!
//! assert_eq!(
//!     recorder.events(),
//!     vec![
//!         KeyEvent::Press(resolve("SHIFT")),
//!         KeyEvent::Print("hi".to_string()),
//!         KeyEvent::Release(resolve("SHIFT")),
//!     ]
//! );
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Implementing a custom keyboard
//!
//! ```
//! use duckyscript::keyboard::Keyboard;
//! use duckyscript::keys::Key;
//! use anyhow::Result;
//!
//! struct Silent;
//!
//! impl Keyboard for Silent {
//!     fn press(&mut self, _key: Key) -> Result<()> { Ok(()) }
//!     fn release(&mut self, _key: Key) -> Result<()> { Ok(()) }
//!     fn print(&mut self, _text: &str) -> Result<()> { Ok(()) }
//! }
//! ```

pub mod active_keys;
pub mod command;
pub mod commands;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod keys;
pub mod logging;
pub mod parser;
pub(crate) mod pty;
pub(crate) mod pty_reader;

pub use command::{Context, DuckyCommand};
pub use engine::Engine;
pub use error::EngineError;
pub use keyboard::Keyboard;
pub use keys::{Key, resolve};
pub use parser::{Commands, extract_string, parse_command, parse_str, read_script};
