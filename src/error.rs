//! Error conditions callers may want to tell apart.
//!
//! Library functions return [`anyhow::Result`]; these types travel inside it
//! and are recovered with [`anyhow::Error::downcast_ref`].

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The run's cancellation token fired before the script finished.
    #[error("Script execution cancelled")]
    Cancelled,
}
