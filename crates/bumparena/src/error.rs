use thiserror::Error;

/// Failure kinds reported by region allocation and index-list growth.
///
/// `OutOfMemory` means the system allocator refused a request;
/// `InsufficientResource` means an internal index hit its hard ceiling and
/// cannot grow further. Both leave the handler usable with its
/// pre-operation state intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("system allocator refused the request")]
    OutOfMemory,
    #[error("index capacity ceiling reached")]
    InsufficientResource,
}
