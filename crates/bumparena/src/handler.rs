use crate::arena::ArenaList;
use crate::error::AllocError;
use crate::free_list::FreeList;
use crate::util::DEFAULT_ARENA_BYTES;
use core::ptr;

/// The owning front object: bump arenas plus the free-block overlay that
/// recycles freed ranges.
///
/// Single-owner and single-context by design -- operations take `&mut self`
/// and the handler is neither `Send` nor `Sync`. Memory returned by
/// [`request_memory`](Self::request_memory) is borrowed by the caller;
/// dropping the handler releases every arena region and invalidates all
/// outstanding addresses.
pub struct ArenaHandler {
    arenas: ArenaList,
    free_blocks: FreeList,
}

impl ArenaHandler {
    /// An empty handler. Neither index list is allocated until first use.
    pub const fn new() -> Self {
        ArenaHandler {
            arenas: ArenaList::new(),
            free_blocks: FreeList::new(),
        }
    }

    /// Number of arenas created so far.
    #[inline]
    pub fn arena_count(&self) -> usize {
        self.arenas.len()
    }

    /// Number of entries on the free list.
    #[inline]
    pub fn free_block_count(&self) -> usize {
        self.free_blocks.len()
    }

    /// Serve `size` bytes aligned to `align`.
    ///
    /// The free list is tried first (even when reuse strands alignment
    /// padding), then the bump tail of every arena in creation order, and
    /// finally a fresh arena sized `size * 3` -- raised to
    /// `DEFAULT_ARENA_BYTES` when `use_default` is set and the tripled size
    /// comes in under it. Returns null when the arena list is saturated or
    /// the system refuses more memory; those failures are also reported on
    /// stderr. The returned interval is disjoint from every outstanding one.
    ///
    /// `size` must be non-zero and `align` a power of two.
    pub fn request_memory(&mut self, size: usize, align: u8, use_default: bool) -> *mut u8 {
        debug_assert!(size > 0);
        debug_assert!(align.is_power_of_two());
        let align = align as usize;

        let p = self.free_blocks.first_fit(size, align);
        if !p.is_null() {
            return p;
        }

        for arena in self.arenas.iter_mut() {
            let p = arena.try_bump(size, align);
            if !p.is_null() {
                return p;
            }
        }

        if self.arenas.is_full() {
            if let Err(err) = self.arenas.grow() {
                report_exhaustion(match err {
                    AllocError::OutOfMemory => {
                        "bumparena: arena list growth refused by the system allocator"
                    }
                    AllocError::InsufficientResource => {
                        "bumparena: arena list reached its capacity ceiling"
                    }
                });
                return ptr::null_mut();
            }
        }

        self.append_arena(size, align, use_default)
    }

    /// Create a fresh arena and serve the request from its start.
    ///
    /// Served from the new arena unconditionally: tail space left in older
    /// arenas stays stranded until a free exposes it.
    fn append_arena(&mut self, size: usize, align: usize, use_default: bool) -> *mut u8 {
        let mut bytes = size.saturating_mul(3);
        if use_default && bytes < DEFAULT_ARENA_BYTES {
            bytes = DEFAULT_ARENA_BYTES;
        }
        // The region only carries the C heap's natural alignment; leave room
        // for the worst-case forward adjustment of the first bump.
        bytes = bytes.max(size.saturating_add(align - 1));

        let index = self.arenas.len();
        let Some(arena) = self.arenas.push(bytes) else {
            report_exhaustion("bumparena: failed to allocate a new arena region");
            return ptr::null_mut();
        };
        log::debug!("appended arena #{index}: {bytes} bytes");
        arena.try_bump(size, align)
    }

    /// Return `[ptr, ptr + size)` to the free list, coalescing with the
    /// neighbor it abuts on the left, the right, or both.
    ///
    /// Only the no-merge case can fail, when the free list is full and
    /// growing it fails; the error is returned as-is and also reported on
    /// stderr. Nothing validates that the interval came from this handler
    /// or that `size` matches the original request -- that contract is the
    /// caller's.
    ///
    /// # Safety
    /// `[ptr, ptr + size)` must be an interval previously returned by
    /// `request_memory` on this handler and not freed since.
    pub unsafe fn free_memory(&mut self, ptr: *mut u8, size: usize) -> Result<(), AllocError> {
        self.free_blocks.insert(ptr, size).inspect_err(|err| {
            report_exhaustion(match err {
                AllocError::OutOfMemory => {
                    "bumparena: free list growth refused by the system allocator"
                }
                AllocError::InsufficientResource => {
                    "bumparena: free list reached its capacity ceiling"
                }
            });
        })
    }

    #[cfg(test)]
    pub(crate) fn free_blocks(&self) -> &FreeList {
        &self.free_blocks
    }

    #[cfg(test)]
    pub(crate) fn arenas(&self) -> &ArenaList {
        &self.arenas
    }
}

impl Default for ArenaHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Resource-exhaustion report on the diagnostic channel.
#[cold]
#[inline(never)]
fn report_exhaustion(msg: &str) {
    eprintln!("{msg}");
}
