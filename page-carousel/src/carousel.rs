//! Swipeable page carousel with infinite wraparound.
//!
//! ## Usage
//!
//! Create a [`PageCarousel`] over a [`PageHost`] implementation, hand it
//! pages (or a page factory), then forward the host's pointer events,
//! resize notifications and per-frame ticks. The carousel owns the page
//! ordering and drives the host's scene tree; it never renders
//! anything itself. See the crate-level example for a complete host.
//!
//! Wraparound works by framing the logical pages with two boundary
//! clones. Transitions run into the clones and an instant correction
//! after the animation lands keeps the illusion of an endless strip.
//! With fewer than two pages, or when cloning fails, the carousel falls
//! back to simple mode: direct index wraparound without clones.

use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{
    animator::{AnimationKind, PositionAnimator},
    autoplay::AutoPlayTimer,
    error::CarouselError,
    gesture::{DragOutcome, GestureTracker},
    geometry::{Axis, Point},
    host::PageHost,
    page_store::PageStore,
};

const DEFAULT_AUTO_PLAY_INTERVAL: f32 = 3.0;
const DEFAULT_ANIMATION_DURATION: f32 = 0.3;
const DEFAULT_SLIDE_THRESHOLD: f32 = 0.3;
const DEFAULT_BOUNCE_BACK_DURATION: f32 = 0.2;
const DEFAULT_GENERATED_PAGE_COUNT: usize = 3;

/// Configuration for [`PageCarousel`], fixed at construction.
#[derive(Clone, Setters)]
pub struct CarouselArgs {
    /// Scroll axis of the page strip.
    pub axis: Axis,
    /// Whether the auto-play timer starts enabled.
    pub auto_play: bool,
    /// Seconds of accumulated tick time between auto-play advances.
    pub auto_play_interval: f32,
    /// Seconds an animated page transition takes.
    pub animation_duration: f32,
    /// Fraction of the axis extent a drag must cross to commit a page
    /// change. Clamped to `[0, 1]` when applied.
    pub slide_threshold: f32,
    /// Seconds a snap-back takes after an under-threshold drag.
    pub bounce_back_duration: f32,
    /// Whether an empty page list is filled from the page factory.
    pub auto_create_pages: bool,
    /// Number of pages generated when filling from the factory.
    pub generated_page_count: usize,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            auto_play: false,
            auto_play_interval: DEFAULT_AUTO_PLAY_INTERVAL,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            slide_threshold: DEFAULT_SLIDE_THRESHOLD,
            bounce_back_duration: DEFAULT_BOUNCE_BACK_DURATION,
            auto_create_pages: true,
            generated_page_count: DEFAULT_GENERATED_PAGE_COUNT,
        }
    }
}

/// Touch-driven page carousel over a host scene graph.
///
/// The carousel is cooperative and single-threaded: every method runs
/// on the host's input or per-frame callbacks, and starting a new
/// action (drag, navigation, rebuild) supersedes whatever was in
/// flight. Failures never propagate to the caller; they are logged and
/// degrade the component deterministically (see [`CarouselError`]).
pub struct PageCarousel<H: PageHost> {
    host: H,
    args: CarouselArgs,
    store: PageStore<H::Page>,
    gesture: GestureTracker,
    animator: PositionAnimator,
    auto_play: AutoPlayTimer,
    auto_play_enabled: bool,
    factory: Option<Box<dyn FnMut(&mut H, usize) -> H::Page>>,
    current_index: usize,
    display_index: i32,
    axis_extent: f32,
    content_offset: f32,
}

impl<H: PageHost> PageCarousel<H> {
    /// Creates an inert carousel over `host` and acquires the host's
    /// input binding. Call [`PageCarousel::set_pages`] to bring it to
    /// life.
    pub fn new(mut host: H, args: CarouselArgs) -> Self {
        host.subscribe_input();
        let axis_extent = args.axis.extent_of(host.extent());
        Self {
            auto_play: AutoPlayTimer::new(args.auto_play_interval),
            auto_play_enabled: args.auto_play,
            host,
            store: PageStore::new(),
            gesture: GestureTracker::new(),
            animator: PositionAnimator::new(),
            factory: None,
            current_index: 0,
            display_index: 0,
            axis_extent,
            content_offset: 0.0,
            args,
        }
    }

    /// Installs a page factory used to generate pages on demand: for an
    /// empty page list (when `auto_create_pages` is set), for
    /// [`PageCarousel::add_page`] with `None`, and for
    /// [`PageCarousel::regenerate_pages`].
    pub fn with_page_factory(
        mut self,
        factory: impl FnMut(&mut H, usize) -> H::Page + 'static,
    ) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Replaces the logical pages and (re)initializes the carousel at
    /// page 0.
    ///
    /// An empty list is filled from the page factory when
    /// `auto_create_pages` is set; with no factory the component stays
    /// inert and every navigation call becomes a no-op.
    pub fn set_pages(&mut self, pages: Vec<H::Page>) {
        self.animator.cancel();
        self.store.clear(&mut self.host);
        self.current_index = 0;
        for page in pages {
            self.host.attach(&page);
            self.store.push(page);
        }
        if self.store.is_empty() && self.args.auto_create_pages {
            let count = self.args.generated_page_count;
            self.generate_pages(count);
        }
        self.rebuild();
    }

    /// Logical index of the settled page.
    pub fn current_page_index(&self) -> usize {
        self.current_index
    }

    /// Number of logical pages.
    pub fn total_pages(&self) -> usize {
        self.store.len()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Whether a transition or snap-back animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Container offset along the scroll axis.
    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// Borrows the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrows the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Advances to the next page with an animated transition, wrapping
    /// past the last page.
    pub fn next_page(&mut self) {
        if self.store.is_empty() {
            warn!("next_page with no pages; ignored");
            return;
        }
        self.advance();
        self.move_to_display_index(true);
    }

    /// Moves to the previous page with an animated transition, wrapping
    /// before the first page.
    pub fn previous_page(&mut self) {
        if self.store.is_empty() {
            warn!("previous_page with no pages; ignored");
            return;
        }
        self.retreat();
        self.move_to_display_index(true);
    }

    /// Jumps to a logical page. Out-of-range indices clamp to the
    /// nearest valid page; negative indices clamp to the first.
    pub fn go_to_page(&mut self, index: i32, animated: bool) {
        if self.store.is_empty() {
            warn!("go_to_page with no pages; ignored");
            return;
        }
        let clamped = index.clamp(0, self.store.len() as i32 - 1) as usize;
        self.go_to_page_internal(clamped, animated);
    }

    /// Appends a page; `None` builds one through the page factory.
    pub fn add_page(&mut self, page: Option<H::Page>) {
        let page = match page {
            Some(page) => page,
            None => {
                let index = self.store.len();
                let Some(factory) = self.factory.as_mut() else {
                    warn!("add_page(None) without a page factory; ignored");
                    return;
                };
                factory(&mut self.host, index)
            }
        };
        self.host.attach(&page);
        self.store.push(page);
        self.rebuild();
    }

    /// Removes the page at `index`. Out-of-range indices are rejected
    /// and leave the carousel untouched; the shown index clamps into
    /// the remaining range.
    pub fn remove_page(&mut self, index: usize) {
        if index >= self.store.len() {
            warn!(
                "{}",
                CarouselError::IndexOutOfRange {
                    index,
                    total: self.store.len(),
                }
            );
            return;
        }
        let page = self.store.take(index);
        self.host.remove(&page);
        self.current_index = self.current_index.min(self.store.len().saturating_sub(1));
        self.rebuild();
    }

    /// Destroys every page and clone and resets the carousel to inert.
    pub fn clear_all_pages(&mut self) {
        self.animator.cancel();
        self.store.clear(&mut self.host);
        self.current_index = 0;
        self.display_index = 0;
        self.apply_offset(0.0);
        debug!("cleared all pages");
    }

    /// Clears the carousel and regenerates pages through the page
    /// factory. `count` overrides the configured generated-page count.
    pub fn regenerate_pages(&mut self, count: Option<usize>) {
        if self.factory.is_none() {
            warn!("regenerate_pages without a page factory; ignored");
            return;
        }
        if let Some(count) = count {
            self.args.generated_page_count = count;
        }
        self.clear_all_pages();
        let count = self.args.generated_page_count;
        self.generate_pages(count);
        self.rebuild();
    }

    /// Enables or disables auto-play. The accumulator restarts from
    /// zero either way.
    pub fn set_auto_play(&mut self, enabled: bool) {
        self.auto_play_enabled = enabled;
        self.auto_play.reset();
    }

    /// Recomputes the axis extent after a container resize, re-places
    /// the display slots and jumps to the settled offset.
    pub fn handle_resize(&mut self) {
        let extent = self.args.axis.extent_of(self.host.extent());
        if (extent - self.axis_extent).abs() <= f32::EPSILON {
            return;
        }
        debug!("axis extent changed: {} -> {}", self.axis_extent, extent);
        self.animator.cancel();
        self.axis_extent = extent;
        self.place_display_slots();
        self.jump_to_display_index();
    }

    /// Pointer-down from the host: begins a drag, cancelling any
    /// in-flight animation and suspending auto-play.
    pub fn pointer_down(&mut self, position: Point) {
        if self.store.is_empty() {
            return;
        }
        self.animator.cancel();
        self.auto_play.reset();
        self.gesture.begin(position);
    }

    /// Pointer-move from the host: 1:1 content tracking while dragging.
    pub fn pointer_move(&mut self, position: Point) {
        if let Some(delta) = self.gesture.update(position, self.args.axis) {
            let offset = self.content_offset + delta;
            self.apply_offset(offset);
        }
    }

    /// Pointer-up from the host: commits a page change when the total
    /// displacement crossed the slide threshold, snaps back otherwise.
    pub fn pointer_up(&mut self, position: Point) {
        let threshold = self.axis_extent * self.args.slide_threshold.clamp(0.0, 1.0);
        let Some(outcome) = self.gesture.finish(position, self.args.axis, threshold) else {
            return;
        };
        match outcome {
            DragOutcome::Advance => {
                self.advance();
                self.move_to_display_index(true);
            }
            DragOutcome::Retreat => {
                self.retreat();
                self.move_to_display_index(true);
            }
            DragOutcome::SnapBack => self.snap_back(),
        }
        self.auto_play.reset();
    }

    /// Pointer-cancel from the host; treated exactly like pointer-up.
    pub fn pointer_cancel(&mut self, position: Point) {
        self.pointer_up(position);
    }

    /// Per-frame update: drives the animation and the auto-play timer.
    ///
    /// `dt` is the elapsed time in seconds since the previous tick.
    pub fn tick(&mut self, dt: f32) {
        if let Some(frame) = self.animator.tick(dt) {
            self.apply_offset(frame.offset);
            if frame.finished && frame.kind == AnimationKind::Slide {
                self.settle();
            }
        }

        if self.auto_play_enabled
            && !self.gesture.is_dragging()
            && self.store.len() > 1
            && self.auto_play.advance_by(dt)
        {
            debug!("auto-play advance");
            self.advance();
            self.move_to_display_index(true);
        }
    }

    /// Builds `count` pages through the factory, if one is installed.
    fn generate_pages(&mut self, count: usize) {
        let Some(factory) = self.factory.as_mut() else {
            return;
        };
        for index in 0..count {
            let page = factory(&mut self.host, index);
            self.host.attach(&page);
            self.store.push(page);
        }
    }

    /// Rebuild pipeline shared by initialization and page mutation:
    /// filter dead handles, recreate boundary clones, lay the display
    /// slots out and settle on the (clamped) current page.
    fn rebuild(&mut self) {
        self.animator.cancel();
        let filtered = self.store.retain_valid(&self.host);
        if filtered > 0 {
            warn!("filtered {filtered} dead page handle(s) from the page list");
        }
        if self.store.is_empty() {
            warn!("{}", CarouselError::NoPages);
            self.current_index = 0;
            self.display_index = 0;
            self.apply_offset(0.0);
            return;
        }
        self.store.rebuild_clones(&mut self.host);
        self.axis_extent = self.args.axis.extent_of(self.host.extent());
        self.place_display_slots();
        debug!(
            "rebuilt with {} page(s), wraparound {}",
            self.store.len(),
            if self.store.has_clones() {
                "enabled"
            } else {
                "disabled"
            }
        );
        let target = self.current_index.min(self.store.len() - 1);
        self.go_to_page_internal(target, false);
    }

    fn go_to_page_internal(&mut self, index: usize, animated: bool) {
        self.current_index = index;
        self.display_index = self.store.display_slot(index) as i32;
        self.move_to_display_index(animated);
    }

    /// Steps the display index forward. Without clones, wraps the
    /// logical index directly (simple mode).
    fn advance(&mut self) {
        if self.store.has_clones() {
            self.display_index += 1;
        } else if self.current_index + 1 < self.store.len() {
            self.current_index += 1;
            self.display_index += 1;
        } else {
            self.current_index = 0;
            self.display_index = 0;
        }
    }

    /// Steps the display index backward. Without clones, wraps the
    /// logical index directly (simple mode).
    fn retreat(&mut self) {
        if self.store.has_clones() {
            self.display_index -= 1;
        } else if self.current_index > 0 {
            self.current_index -= 1;
            self.display_index -= 1;
        } else {
            self.current_index = self.store.len().saturating_sub(1);
            self.display_index = self.current_index as i32;
        }
    }

    /// Moves the container toward the current display slot.
    fn move_to_display_index(&mut self, animated: bool) {
        let target = self
            .args
            .axis
            .target_offset(self.display_index, self.axis_extent);
        if animated {
            self.animator.start(
                AnimationKind::Slide,
                self.content_offset,
                target,
                self.args.animation_duration,
            );
        } else {
            self.animator.cancel();
            self.apply_offset(target);
            self.settle();
        }
    }

    /// Animates back to the settled offset of the current display slot
    /// without touching any index.
    fn snap_back(&mut self) {
        let target = self
            .args
            .axis
            .target_offset(self.display_index, self.axis_extent);
        self.animator.start(
            AnimationKind::Bounce,
            self.content_offset,
            target,
            self.args.bounce_back_duration,
        );
    }

    /// Post-animation wraparound correction.
    ///
    /// Reaching a clone slot snaps the display index back onto the
    /// logical page the clone mirrors and repositions the container
    /// instantly, which is what sustains the infinite-scroll illusion.
    fn settle(&mut self) {
        if !self.store.has_clones() {
            let last = self.store.len().saturating_sub(1);
            self.current_index = (self.display_index.max(0) as usize).min(last);
            return;
        }

        let display_len = self.store.display_len() as i32;
        if self.display_index >= display_len - 1 {
            self.display_index = 1;
            self.current_index = 0;
            debug!("tail boundary reached; wrapping to the first page");
            self.jump_to_display_index();
        } else if self.display_index <= 0 {
            self.display_index = self.store.len() as i32;
            self.current_index = self.store.len() - 1;
            debug!("head boundary reached; wrapping to the last page");
            self.jump_to_display_index();
        } else {
            self.current_index = (self.display_index - 1) as usize;
        }
    }

    /// Instantly repositions the container to the current display slot.
    fn jump_to_display_index(&mut self) {
        let target = self
            .args
            .axis
            .target_offset(self.display_index, self.axis_extent);
        self.apply_offset(target);
    }

    /// Places every display page at its slot position.
    fn place_display_slots(&mut self) {
        let axis = self.args.axis;
        let extent = self.axis_extent;
        for (slot, page) in self.store.display_pages().enumerate() {
            self.host.place(page, axis.slot_position(slot, extent));
        }
    }

    fn apply_offset(&mut self, offset: f32) {
        self.content_offset = offset;
        self.host
            .set_content_offset(self.args.axis.offset_point(offset));
    }
}

impl<H: PageHost> Drop for PageCarousel<H> {
    fn drop(&mut self) {
        self.host.unsubscribe_input();
    }
}
