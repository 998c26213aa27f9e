//! Host capability interface.
//!
//! The carousel core never touches rendering primitives. Everything it
//! needs from the hosting scene graph — container size, page
//! duplication, attachment, placement, strip movement and gesture
//! listener registration — goes through [`PageHost`]. The host keeps
//! rendering, asset loading and input-device details to itself.

use thiserror::Error;

use crate::geometry::{Extent, Point};

/// Error returned by [`PageHost::duplicate`] when a page cannot be
/// deep-copied.
#[derive(Debug, Error)]
#[error("page duplication failed: {reason}")]
pub struct DuplicateError {
    reason: String,
}

impl DuplicateError {
    /// Creates an error carrying the host's reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Capabilities the hosting scene graph provides to the carousel.
///
/// All calls happen on the host's own input and per-frame callbacks;
/// the carousel never invokes the host from another thread. Hosts on a
/// multi-threaded engine must confine these calls to one scheduler
/// tick.
pub trait PageHost {
    /// Opaque handle to a renderable page node. The carousel stores and
    /// orders handles; only the host can render or destroy them.
    type Page;

    /// Current size of the carousel container.
    fn extent(&self) -> Extent;

    /// Whether a handle still refers to a live node. Dead handles are
    /// filtered out of the page list on rebuild.
    fn is_valid(&self, page: &Self::Page) -> bool;

    /// Deep-copies a page into a detached, full-fidelity duplicate.
    fn duplicate(&mut self, page: &Self::Page) -> Result<Self::Page, DuplicateError>;

    /// Adds a page to the container's scene tree. Attaching an
    /// already-attached page must be a no-op.
    fn attach(&mut self, page: &Self::Page);

    /// Detaches a page from the scene tree (if attached) and destroys
    /// its node. The carousel drops the handle afterwards.
    fn remove(&mut self, page: &Self::Page);

    /// Positions a page within the page strip.
    fn place(&mut self, page: &Self::Page, position: Point);

    /// Moves the whole page strip to `offset`.
    fn set_content_offset(&mut self, offset: Point);

    /// Registers the carousel's gesture listeners with the host's input
    /// system. Called exactly once when the carousel is created.
    fn subscribe_input(&mut self);

    /// Releases the listeners acquired by [`PageHost::subscribe_input`].
    /// Called once on teardown, on every exit path.
    fn unsubscribe_input(&mut self);
}
