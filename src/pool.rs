//! Buffer pool: recycled scratch buffers for transient string work.
//!
//! Call sites that need a temporary buffer acquire one here instead of
//! allocating fresh; releasing it resets the content and keeps the block
//! around for the next caller. The pool is single-owner like the buffers
//! themselves: no locking, `&mut self` throughout.

use log::trace;

use crate::buffer::Buffer;

/// Capacity given to freshly pooled buffers.
const INITIAL_BUFFER_SIZE: usize = 1024;

/// Number of buffers added when the pool runs dry.
const POOL_INCREMENT: usize = 20;

/// Released buffers that grew past this are shrunk back before pooling.
const SHRINK_THRESHOLD: usize = 2 * INITIAL_BUFFER_SIZE;

/// A pool of idle [`Buffer`]s.
///
/// Acquired buffers are owned by the caller until handed back with
/// [`release`](BufferPool::release); dropping one instead of releasing it is
/// safe and simply returns its memory to the allocator.
#[derive(Debug, Default)]
pub struct BufferPool {
    /// Idle buffers, all reset and pre-sized.
    idle: Vec<Buffer>,
}

impl BufferPool {
    /// Create an empty pool. Buffers are allocated on first acquire.
    pub const fn new() -> Self {
        Self { idle: Vec::new() }
    }

    /// Number of idle buffers currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Whether the pool holds no idle buffers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Take an idle buffer, growing the pool if it has run dry.
    ///
    /// The returned buffer is empty with at least the pool's standard
    /// capacity.
    pub fn acquire(&mut self) -> Buffer {
        if self.idle.is_empty() {
            self.grow();
        }
        let buf = self
            .idle
            .pop()
            .unwrap_or_else(|| Buffer::with_capacity(INITIAL_BUFFER_SIZE));
        trace!("pool acquire: {} idle", self.idle.len());
        buf
    }

    /// Hand a buffer back to the pool.
    ///
    /// The content is discarded. A buffer that grew well past the standard
    /// size is shrunk back so one oversized use does not pin memory.
    pub fn release(&mut self, mut buf: Buffer) {
        if buf.capacity() > SHRINK_THRESHOLD {
            buf.dealloc();
            buf.alloc(INITIAL_BUFFER_SIZE);
        } else {
            buf.reset();
        }
        self.idle.push(buf);
        trace!("pool release: {} idle", self.idle.len());
    }

    /// Top the pool up by one increment of pre-sized buffers.
    fn grow(&mut self) {
        trace!("pool grow: +{POOL_INCREMENT} buffers of {INITIAL_BUFFER_SIZE}");
        self.idle
            .extend((0..POOL_INCREMENT).map(|_| Buffer::with_capacity(INITIAL_BUFFER_SIZE)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_from_empty_pool() {
        let mut pool = BufferPool::new();
        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= INITIAL_BUFFER_SIZE);
        // The dry pool was topped up by one increment, minus the taken one.
        assert_eq!(pool.len(), POOL_INCREMENT - 1);
    }

    #[test]
    fn test_release_resets_content() {
        let mut pool = BufferPool::new();
        let mut buf = pool.acquire();
        buf.push_str("scratch work");
        pool.release(buf);

        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_release_recycles_block() {
        let mut pool = BufferPool::new();
        let buf = pool.acquire();
        let before = pool.len();
        pool.release(buf);
        assert_eq!(pool.len(), before + 1);
    }

    #[test]
    fn test_release_shrinks_oversized() {
        let mut pool = BufferPool::new();
        let mut buf = pool.acquire();
        buf.push_str(&"x".repeat(SHRINK_THRESHOLD * 4));
        pool.release(buf);

        let buf = pool.acquire();
        assert!(buf.capacity() < SHRINK_THRESHOLD * 4);
        assert!(buf.capacity() >= INITIAL_BUFFER_SIZE);
    }

    #[test]
    fn test_dropped_buffer_is_not_leaked_back() {
        let mut pool = BufferPool::new();
        let buf = pool.acquire();
        let idle = pool.len();
        drop(buf);
        assert_eq!(pool.len(), idle);
    }
}
