//! Buffer module: the core mutable-string data structure.
//!
//! This module contains:
//! - [`Buffer`]: an owned, growable byte block with a tracked write cursor
//! - [`path`]: path-join overwrite operations with separator deduplication
//!
//! All mutation goes through `Buffer`; any view obtained from it is
//! invalidated by the next mutating call (enforced by the borrow checker).

#[allow(clippy::module_inception)]
mod buffer;
mod path;

pub use buffer::Buffer;
