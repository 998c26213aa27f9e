//! Error taxonomy for carousel operations.
//!
//! None of these escape the public API as faults: every failure path
//! degrades to a deterministic fallback state (inert component, simple
//! mode, filtered page list) and is logged where it happens.

use thiserror::Error;

use crate::host::DuplicateError;

/// Failures surfaced while operating the carousel.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// No pages are configured and no page factory is available.
    #[error("no pages configured and no page factory available; carousel stays inert")]
    NoPages,

    /// A page index outside the logical range was rejected.
    #[error("page index {index} is out of range ({total} pages)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of logical pages at the time of the call.
        total: usize,
    },

    /// Duplicating a boundary page failed; wraparound is disabled for
    /// the current rebuild.
    #[error("boundary page duplication failed: {0}")]
    CloneFailed(#[from] DuplicateError),
}
