//! C ABI surface over [`ArenaHandler`], exposing it as an opaque handle.
//!
//! Inputs arriving here are untrusted, so arguments the Rust surface leaves
//! to caller contract (non-zero size, power-of-two alignment) are validated
//! and rejected with null instead.

use crate::error::AllocError;
use crate::handler::ArenaHandler;
use core::ffi::c_void;
use core::ptr;
use std::alloc::{self, Layout};

/// Status codes crossing the C boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaStatus {
    Success = 0,
    OutOfMemory = 1,
    InsufficientResource = 2,
}

impl From<AllocError> for ArenaStatus {
    fn from(err: AllocError) -> Self {
        match err {
            AllocError::OutOfMemory => ArenaStatus::OutOfMemory,
            AllocError::InsufficientResource => ArenaStatus::InsufficientResource,
        }
    }
}

// ============================================================================
// Handle lifecycle
// ============================================================================

/// Allocate an empty handler. Returns null when the system refuses.
#[no_mangle]
pub extern "C" fn arena_create() -> *mut ArenaHandler {
    let layout = Layout::new::<ArenaHandler>();
    unsafe {
        let handler = alloc::alloc(layout) as *mut ArenaHandler;
        if handler.is_null() {
            return ptr::null_mut();
        }
        handler.write(ArenaHandler::new());
        handler
    }
}

/// Release every arena region, both index lists, and the handler itself.
/// Null is a no-op.
///
/// # Safety
/// `handler` must have come from [`arena_create`] and must not be used,
/// nor any address obtained from it, after this call.
#[no_mangle]
pub unsafe extern "C" fn arena_destroy(handler: *mut ArenaHandler) {
    if handler.is_null() {
        return;
    }
    ptr::drop_in_place(handler);
    alloc::dealloc(handler as *mut u8, Layout::new::<ArenaHandler>());
}

// ============================================================================
// Allocation
// ============================================================================

/// Request `size` bytes at `alignment` from the handler.
///
/// Returns null on exhaustion, on a null handle, on `size == 0`, and on an
/// alignment that is not a power of two.
///
/// # Safety
/// `handler` must be a live handle from [`arena_create`], not shared with
/// another thread.
#[no_mangle]
pub unsafe extern "C" fn arena_request_memory(
    handler: *mut ArenaHandler,
    size: usize,
    alignment: u8,
    use_default_allocation: bool,
) -> *mut c_void {
    if handler.is_null() || size == 0 || !alignment.is_power_of_two() {
        return ptr::null_mut();
    }
    (*handler).request_memory(size, alignment, use_default_allocation) as *mut c_void
}

/// Return `[ptr, ptr + size)` to the handler's free list.
///
/// A null handle or null `ptr` is a `Success` no-op. The interval itself is
/// taken on trust, exactly as on the Rust surface.
///
/// # Safety
/// `handler` must be a live handle from [`arena_create`]; `ptr` must be
/// null or an address from [`arena_request_memory`] on the same handle,
/// with `size` matching that request, not freed since.
#[no_mangle]
pub unsafe extern "C" fn arena_free(
    handler: *mut ArenaHandler,
    ptr: *mut c_void,
    size: usize,
) -> ArenaStatus {
    if handler.is_null() || ptr.is_null() {
        return ArenaStatus::Success;
    }
    match (*handler).free_memory(ptr as *mut u8, size) {
        Ok(()) => ArenaStatus::Success,
        Err(err) => err.into(),
    }
}
