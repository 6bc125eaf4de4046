//! Error types for buffer operations.
//!
//! Only formatting can fail recoverably; allocation failure keeps the host
//! policy of aborting the process (the global allocator's behavior on OOM),
//! so growth paths return nothing.

use thiserror::Error;

/// Errors reported by fallible [`Buffer`](crate::Buffer) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A formatted write failed (a `Display` impl returned an error).
    ///
    /// The buffer content is restored to what it was before the call.
    #[error("formatted write failed")]
    Format,
}

impl From<std::fmt::Error> for BufferError {
    fn from(_: std::fmt::Error) -> Self {
        Self::Format
    }
}
