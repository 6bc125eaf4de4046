//! C Foreign Function Interface (FFI) for Strbuf.
//!
//! This module provides a C-compatible API for host applications in other
//! languages. All functions are `extern "C"` with stable ABI, operating on
//! an opaque buffer handle.
//!
//! # Safety
//!
//! All functions that accept pointers require valid, non-null pointers.
//! The caller owns a handle until `strbuf_destroy`. Content is read out by
//! copying into a caller-provided block (see [`strbuf_string`]); no interior
//! pointer ever crosses the boundary, so a later mutation cannot invalidate
//! anything the caller holds.
//!
//! # Example (C)
//!
//! ```c
//! #include "strbuf.h"
//!
//! int main() {
//!     StrbufHandle* buf = strbuf_new();
//!     if (!buf) return 1;
//!
//!     strbuf_set_path(buf, "/var/mail", "inbox");
//!
//!     char out[64];
//!     strbuf_string(buf, out, sizeof(out));
//!
//!     strbuf_destroy(buf);
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::buffer::Buffer;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque handle to a buffer.
pub struct StrbufHandle(Buffer);

// =============================================================================
// Result Codes
// =============================================================================

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrbufResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 2,
}

// =============================================================================
// Lifecycle Functions
// =============================================================================

/// Create a new empty buffer. Does not allocate content storage.
#[unsafe(no_mangle)]
pub extern "C" fn strbuf_new() -> *mut StrbufHandle {
    Box::into_raw(Box::new(StrbufHandle(Buffer::new())))
}

/// Create a new buffer with at least `size` bytes of capacity.
#[unsafe(no_mangle)]
pub extern "C" fn strbuf_with_capacity(size: usize) -> *mut StrbufHandle {
    Box::into_raw(Box::new(StrbufHandle(Buffer::with_capacity(size))))
}

/// Destroy a buffer handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_destroy(buf: *mut StrbufHandle) {
    if !buf.is_null() {
        drop(Box::from_raw(buf));
    }
}

/// Ensure capacity of at least `size` bytes; content resets on reallocation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_alloc(buf: *mut StrbufHandle, size: usize) {
    if !buf.is_null() {
        (*buf).0.alloc(size);
    }
}

/// Free the backing block, keeping the handle reusable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_dealloc(buf: *mut StrbufHandle) {
    if !buf.is_null() {
        (*buf).0.dealloc();
    }
}

/// Truncate the content to empty, keeping capacity.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_reset(buf: *mut StrbufHandle) {
    if !buf.is_null() {
        (*buf).0.reset();
    }
}

/// Reposition the write cursor, clamped to the content length.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_seek(buf: *mut StrbufHandle, offset: usize) {
    if !buf.is_null() {
        (*buf).0.seek(offset);
    }
}

// =============================================================================
// Query Functions
// =============================================================================

/// Logical length (cursor offset). Returns 0 for a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_len(buf: *const StrbufHandle) -> usize {
    if buf.is_null() {
        return 0;
    }
    (*buf).0.len()
}

/// Whether the buffer holds no content. Returns true for a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_is_empty(buf: *const StrbufHandle) -> bool {
    if buf.is_null() {
        return true;
    }
    (*buf).0.is_empty()
}

/// Allocated capacity of the backing block.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_capacity(buf: *const StrbufHandle) -> usize {
    if buf.is_null() {
        return 0;
    }
    (*buf).0.capacity()
}

/// Copy the content into `out` as a NUL-terminated string.
///
/// At most `out_size - 1` content bytes are copied, followed by a NUL.
/// Returns the full content length (which may exceed what fit), or -1 for a
/// null handle or an empty `out` block. An unallocated buffer yields an
/// empty string, never an error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_string(
    buf: *const StrbufHandle,
    out: *mut c_char,
    out_size: usize,
) -> isize {
    if buf.is_null() || out.is_null() || out_size == 0 {
        return -1;
    }
    let content = (*buf).0.as_bytes();
    let n = content.len().min(out_size - 1);
    ptr::copy_nonoverlapping(content.as_ptr(), out.cast::<u8>(), n);
    *out.add(n) = 0;
    isize::try_from(content.len()).unwrap_or(isize::MAX)
}

// =============================================================================
// Append and Insert Functions
// =============================================================================

/// Append one byte at the cursor.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_push_byte(buf: *mut StrbufHandle, c: c_char) -> StrbufResult {
    if buf.is_null() {
        return StrbufResult::NullPointer;
    }
    #[allow(clippy::cast_sign_loss)]
    (*buf).0.push_byte(c as u8);
    StrbufResult::Ok
}

/// Append a NUL-terminated string at the cursor.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_push_str(
    buf: *mut StrbufHandle,
    s: *const c_char,
) -> StrbufResult {
    if buf.is_null() || s.is_null() {
        return StrbufResult::NullPointer;
    }
    (*buf).0.push_bytes(CStr::from_ptr(s).to_bytes());
    StrbufResult::Ok
}

/// Append exactly `len` bytes at the cursor; embedded NULs are kept.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_push_bytes(
    buf: *mut StrbufHandle,
    s: *const u8,
    len: usize,
) -> StrbufResult {
    if buf.is_null() || s.is_null() {
        return StrbufResult::NullPointer;
    }
    (*buf).0.push_bytes(std::slice::from_raw_parts(s, len));
    StrbufResult::Ok
}

/// Insert a NUL-terminated string at `offset`, shifting later content right.
///
/// An offset past the content length is clamped.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_insert(
    buf: *mut StrbufHandle,
    offset: usize,
    s: *const c_char,
) -> StrbufResult {
    if buf.is_null() || s.is_null() {
        return StrbufResult::NullPointer;
    }
    let bytes = CStr::from_ptr(s).to_bytes();
    let offset = offset.min((*buf).0.as_bytes().len());
    (*buf).0.insert_bytes(offset, bytes);
    StrbufResult::Ok
}

// =============================================================================
// Overwrite Functions
// =============================================================================

/// Replace the content with a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_set_str(buf: *mut StrbufHandle, s: *const c_char) -> StrbufResult {
    if buf.is_null() || s.is_null() {
        return StrbufResult::NullPointer;
    }
    (*buf).0.set_bytes(CStr::from_ptr(s).to_bytes());
    StrbufResult::Ok
}

/// Replace `dst`'s content with a copy of `src`'s content.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_copy(
    dst: *mut StrbufHandle,
    src: *const StrbufHandle,
) -> StrbufResult {
    if dst.is_null() || src.is_null() {
        return StrbufResult::NullPointer;
    }
    let src = &(*src).0;
    (*dst).0.copy_from(src);
    StrbufResult::Ok
}

/// Replace the content with `dir` joined to `fname` by the host separator.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strbuf_set_path(
    buf: *mut StrbufHandle,
    dir: *const c_char,
    fname: *const c_char,
) -> StrbufResult {
    if buf.is_null() || dir.is_null() || fname.is_null() {
        return StrbufResult::NullPointer;
    }
    (*buf)
        .0
        .set_path_bytes(CStr::from_ptr(dir).to_bytes(), CStr::from_ptr(fname).to_bytes());
    StrbufResult::Ok
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the Strbuf version string.
#[unsafe(no_mangle)]
pub extern "C" fn strbuf_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr().cast::<c_char>()
}
