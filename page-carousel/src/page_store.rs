//! Ordered page storage with boundary clones for wraparound.
//!
//! The store owns the logical page handles and, when wraparound is
//! possible, a pair of boundary clones: the head clone duplicates the
//! last logical page and sits before slot 0, the tail clone duplicates
//! the first and sits after the last slot. Clones are destroyed and
//! recreated on every rebuild and are never mutated independently.

use tracing::{debug, warn};

use crate::{error::CarouselError, host::PageHost};

/// Duplicate boundary pages framing the logical sequence.
struct BoundaryClones<P> {
    head: P,
    tail: P,
}

/// Owns the ordered logical pages and the optional wraparound clones.
pub(crate) struct PageStore<P> {
    pages: Vec<P>,
    clones: Option<BoundaryClones<P>>,
}

impl<P> PageStore<P> {
    pub(crate) fn new() -> Self {
        Self {
            pages: Vec::new(),
            clones: None,
        }
    }

    /// Number of logical pages.
    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether wraparound clones are present.
    pub(crate) fn has_clones(&self) -> bool {
        self.clones.is_some()
    }

    /// Length of the display sequence: logical pages plus clones.
    pub(crate) fn display_len(&self) -> usize {
        self.pages.len() + if self.clones.is_some() { 2 } else { 0 }
    }

    /// Display slot of a logical index.
    pub(crate) fn display_slot(&self, index: usize) -> usize {
        index + usize::from(self.clones.is_some())
    }

    /// Pages in display order: head clone, logical pages, tail clone.
    pub(crate) fn display_pages(&self) -> impl Iterator<Item = &P> {
        let head = self.clones.as_ref().map(|clones| &clones.head);
        let tail = self.clones.as_ref().map(|clones| &clones.tail);
        head.into_iter().chain(self.pages.iter()).chain(tail)
    }

    /// Appends a logical page.
    pub(crate) fn push(&mut self, page: P) {
        self.pages.push(page);
    }

    /// Removes and returns the page at `index`. Callers check bounds.
    pub(crate) fn take(&mut self, index: usize) -> P {
        self.pages.remove(index)
    }

    /// Destroys the boundary clones, if any.
    pub(crate) fn destroy_clones<H>(&mut self, host: &mut H)
    where
        H: PageHost<Page = P>,
    {
        if let Some(clones) = self.clones.take() {
            host.remove(&clones.head);
            host.remove(&clones.tail);
        }
    }

    /// Drops page handles the host no longer considers live.
    ///
    /// Returns the number of entries filtered out.
    pub(crate) fn retain_valid<H>(&mut self, host: &H) -> usize
    where
        H: PageHost<Page = P>,
    {
        let before = self.pages.len();
        self.pages.retain(|page| host.is_valid(page));
        before - self.pages.len()
    }

    /// Recreates the boundary clones for the current page list.
    ///
    /// With fewer than two pages no clones are created and wraparound
    /// stays disabled. A failed duplication destroys the half-created
    /// clone and degrades to simple mode for this rebuild.
    pub(crate) fn rebuild_clones<H>(&mut self, host: &mut H)
    where
        H: PageHost<Page = P>,
    {
        self.destroy_clones(host);
        if self.pages.len() < 2 {
            debug!(
                "{} page(s): wraparound disabled, staying in simple mode",
                self.pages.len()
            );
            return;
        }

        let last = &self.pages[self.pages.len() - 1];
        let head = match host.duplicate(last) {
            Ok(head) => head,
            Err(err) => {
                warn!("{}", CarouselError::CloneFailed(err));
                return;
            }
        };
        let tail = match host.duplicate(&self.pages[0]) {
            Ok(tail) => tail,
            Err(err) => {
                host.remove(&head);
                warn!("{}", CarouselError::CloneFailed(err));
                return;
            }
        };
        host.attach(&head);
        host.attach(&tail);
        self.clones = Some(BoundaryClones { head, tail });
    }

    /// Destroys every page and clone.
    pub(crate) fn clear<H>(&mut self, host: &mut H)
    where
        H: PageHost<Page = P>,
    {
        self.destroy_clones(host);
        for page in self.pages.drain(..) {
            host.remove(&page);
        }
    }
}
