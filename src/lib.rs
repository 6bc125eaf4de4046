//! # Strbuf
//!
//! A growable, cursor-tracked string buffer for command-line text plumbing.
//!
//! Strbuf is the universal "mutable string" type for a host application:
//! one owned block of bytes, a write cursor into it, and a tracked capacity,
//! with append, insert, overwrite, path-join and formatted-write operations.
//!
//! ## Core Concepts
//!
//! - **Cursor tracking**: logical length is the cursor offset, kept separate
//!   from allocated capacity
//! - **Grow-before-write**: every mutation ensures capacity first; a view into
//!   the buffer is invalidated by the next mutating call
//! - **Pooling**: scratch buffers are recycled through a [`BufferPool`]
//! - **C FFI**: handle-based C API for host applications in other languages
//!
//! ## Example
//!
//! ```rust
//! use strbuf::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.push_str("hello");
//! buf.push_byte(b'!');
//! assert_eq!(buf.as_str(), "hello!");
//! assert_eq!(buf.len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod ffi;
pub mod pool;

// Re-exports for convenience
pub use buffer::Buffer;
pub use error::BufferError;
pub use pool::BufferPool;
