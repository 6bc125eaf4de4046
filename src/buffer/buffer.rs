//! Buffer: An owned byte block with a tracked write cursor.
//!
//! The buffer keeps its backing storage in a `Vec<u8>` and tracks the write
//! position in a separate cursor field. Growth is amortized through the
//! global allocator; an allocation failure aborts the process, matching the
//! host application's policy, so growth paths return nothing.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use log::trace;

use crate::error::BufferError;

/// An owned, growable byte buffer with a write cursor and tracked capacity.
///
/// Logical length is the cursor offset from the start of the block, not the
/// allocated capacity. Every mutating call may reallocate the backing block;
/// any view previously obtained through [`as_bytes`](Buffer::as_bytes) or
/// [`as_str`](Buffer::as_str) is invalidated by the next mutation (the
/// borrow checker enforces this).
///
/// # Cursor semantics
///
/// The cursor normally sits at the end of the content. [`seek`](Buffer::seek)
/// rewinds it; the next write then truncates the content at the cursor before
/// appending, so rewriting the tail of a buffer is
/// `seek(n)` followed by ordinary appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    /// Owned content bytes; `data.len()` is the content length.
    data: Vec<u8>,
    /// Write cursor; always `<= data.len()`.
    cursor: usize,
}

impl Buffer {
    /// Create an empty buffer. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            cursor: 0,
        }
    }

    /// Create an empty buffer with at least `size` bytes of capacity.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            data: Vec::with_capacity(size),
            cursor: 0,
        }
    }

    /// Ensure capacity of at least `size` bytes.
    ///
    /// If the current capacity is already sufficient this is a no-op and the
    /// content is kept. Otherwise the block is reallocated and the content
    /// and cursor are reset to empty, as on first allocation.
    ///
    /// Allocation failure aborts the process (global allocator policy).
    pub fn alloc(&mut self, size: usize) {
        if size > self.data.capacity() {
            trace!(
                "buffer realloc: capacity {} -> at least {size}",
                self.data.capacity()
            );
            self.data = Vec::with_capacity(size);
            self.cursor = 0;
        }
    }

    /// Free the backing block and return to the zeroed empty state.
    ///
    /// Idempotent: calling this on an already-empty buffer is a no-op.
    pub fn dealloc(&mut self) {
        self.data = Vec::new();
        self.cursor = 0;
    }

    /// Truncate the content to empty and rewind the cursor.
    ///
    /// Capacity is retained for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.data.clear();
        self.cursor = 0;
    }

    /// Reposition the cursor to `offset`, clamped to the content length.
    ///
    /// The content is untouched until the next write, which truncates at the
    /// cursor before appending.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        self.cursor = offset.min(self.data.len());
    }

    /// Whether no content is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical length: the cursor offset from the start of the block.
    #[inline]
    pub const fn len(&self) -> usize {
        self.cursor
    }

    /// Total allocated capacity of the backing block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The current content as bytes.
    ///
    /// Returns an empty slice for an unallocated buffer, never a dangling
    /// reference. The slice is invalidated by the next mutating call.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The current content as a string view.
    ///
    /// Non-UTF-8 bytes are replaced lossily; use
    /// [`as_bytes`](Buffer::as_bytes) for exact content. Returns an empty
    /// view for an unallocated buffer.
    #[inline]
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Produce an independently-owned copy of the content bytes.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.clone()
    }

    // =========================================================================
    // Append family: grow as needed, preserve content before the cursor,
    // advance the cursor.
    // =========================================================================

    /// Append one byte at the cursor.
    pub fn push_byte(&mut self, b: u8) {
        self.data.truncate(self.cursor);
        self.reserve_for(1);
        self.data.push(b);
        self.cursor = self.data.len();
    }

    /// Append a string at the cursor.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.push_bytes(s.as_bytes());
    }

    /// Append raw bytes at the cursor.
    ///
    /// The input is treated as opaque; embedded NUL bytes are stored as-is.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.data.truncate(self.cursor);
        self.reserve_for(bytes.len());
        self.data.extend_from_slice(bytes);
        self.cursor = self.data.len();
    }

    /// Append formatted output at the cursor.
    ///
    /// Returns the number of bytes appended. On failure the content is
    /// restored to what it was before the call and
    /// [`BufferError::Format`] is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// let n = buf.push_fmt(format_args!("{}-{}", 42, "x")).unwrap();
    /// assert_eq!(n, 4);
    /// assert_eq!(buf.as_str(), "42-x");
    /// ```
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize, BufferError> {
        self.data.truncate(self.cursor);
        let before = self.cursor;
        if fmt::write(self, args).is_err() {
            // Partial output is rolled back; a failed format never leaves
            // half-written content behind.
            self.data.truncate(before);
            self.cursor = before;
            return Err(BufferError::Format);
        }
        Ok(self.cursor - before)
    }

    /// Append through a bounded writable region.
    ///
    /// Reserves `size` writable bytes past the cursor, hands them to `f`,
    /// and extends the content by the number of bytes `f` reports written.
    /// The buffer resyncs its own cursor afterward; callers never repair
    /// internal state by hand.
    ///
    /// A report larger than `size` is a programming error: debug builds
    /// assert, release builds clamp to `size`.
    pub fn append_with<F>(&mut self, size: usize, f: F) -> usize
    where
        F: FnOnce(&mut [u8]) -> usize,
    {
        self.data.truncate(self.cursor);
        let start = self.cursor;
        self.reserve_for(size);
        self.data.resize(start + size, 0);
        let written = f(&mut self.data[start..start + size]);
        debug_assert!(written <= size, "writer reported {written} > region {size}");
        let written = written.min(size);
        self.data.truncate(start + written);
        self.cursor = self.data.len();
        written
    }

    // =========================================================================
    // Insert family
    // =========================================================================

    /// Insert a string at `offset`, shifting later content right.
    ///
    /// Inserting at `offset == len()` behaves like an append. An offset past
    /// the content length is a programming error: debug builds assert,
    /// release builds clamp to the content length.
    #[inline]
    pub fn insert(&mut self, offset: usize, s: &str) {
        self.insert_bytes(offset, s.as_bytes());
    }

    /// Insert raw bytes at `offset`, shifting later content right.
    ///
    /// Same offset policy as [`insert`](Buffer::insert).
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(
            offset <= self.data.len(),
            "insert offset {offset} past content length {}",
            self.data.len()
        );
        let offset = offset.min(self.data.len());
        self.reserve_for(bytes.len());
        self.data.splice(offset..offset, bytes.iter().copied());
        if self.cursor >= offset {
            self.cursor += bytes.len();
        }
    }

    // =========================================================================
    // Overwrite family: replace content wholesale.
    // =========================================================================

    /// Replace the content with a copy of `src`'s content.
    ///
    /// The storage stays independent: mutating one buffer afterward does not
    /// affect the other.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        self.set_bytes(src.as_bytes());
    }

    /// Replace the content with `s`.
    #[inline]
    pub fn set_str(&mut self, s: &str) {
        self.set_bytes(s.as_bytes());
    }

    /// Replace the content with exactly the bytes of `bytes`.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.data.clear();
        self.reserve_for(bytes.len());
        self.data.extend_from_slice(bytes);
        self.cursor = self.data.len();
    }

    /// Replace the content with the byte range `[range.start, range.end)`
    /// of `s`.
    ///
    /// An inverted or out-of-bounds range is a programming error: debug
    /// builds assert, release builds clamp to valid bounds.
    pub fn set_substr(&mut self, s: &str, range: Range<usize>) {
        debug_assert!(
            range.start <= range.end && range.end <= s.len(),
            "invalid substring range {range:?} for length {}",
            s.len()
        );
        let end = range.end.min(s.len());
        let beg = range.start.min(end);
        self.set_bytes(&s.as_bytes()[beg..end]);
    }

    /// Replace the content with the formatted output of `args`.
    ///
    /// Returns the formatted length. On failure the buffer is left reset to
    /// empty and [`BufferError::Format`] is returned.
    pub fn set_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<usize, BufferError> {
        self.reset();
        self.push_fmt(args)
    }

    /// Reserve room for `additional` more content bytes, logging when the
    /// block actually grows.
    pub(super) fn reserve_for(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        if needed > self.data.capacity() {
            trace!(
                "buffer grow: capacity {} -> at least {needed}",
                self.data.capacity()
            );
            self.data.reserve(additional);
        }
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        let mut buf = Self::new();
        buf.set_str(s);
        buf
    }
}
