//! System memory, by way of the C heap.
//!
//! Arena regions and both index arrays are heap-backed; every call into the
//! system allocator goes through this module. Null signals refusal and is
//! never dereferenced by callers.

/// Allocate `size` uninitialized bytes. Returns null when the system refuses.
///
/// # Safety
/// `size` must be non-zero.
#[inline]
pub unsafe fn heap_alloc(size: usize) -> *mut u8 {
    libc::malloc(size) as *mut u8
}

/// Resize an allocation to `new_size` bytes, moving the contents if the
/// block relocates. Returns null when the system refuses, in which case the
/// old block stays valid. A null `ptr` behaves like `heap_alloc`.
///
/// # Safety
/// `ptr` must be null or an unfreed allocation from this module; `new_size`
/// must be non-zero.
#[inline]
pub unsafe fn heap_realloc(ptr: *mut u8, new_size: usize) -> *mut u8 {
    libc::realloc(ptr as *mut libc::c_void, new_size) as *mut u8
}

/// Release an allocation. Null is a no-op.
///
/// # Safety
/// `ptr` must be null or an unfreed allocation from this module.
#[inline]
pub unsafe fn heap_free(ptr: *mut u8) {
    libc::free(ptr as *mut libc::c_void);
}
