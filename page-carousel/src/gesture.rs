//! Drag gesture tracking.
//!
//! Converts raw pointer events into 1:1 content deltas while a drag is
//! active, and into a single commit/cancel decision at release. The
//! tracker is deliberately velocity-free: the release decision depends
//! only on the total displacement against a fixed threshold.

use tracing::trace;

use crate::geometry::{Axis, Point};

/// Decision taken when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DragOutcome {
    /// Displacement crossed the threshold against the axis direction;
    /// move to the next page.
    Advance,
    /// Displacement crossed the threshold along the axis direction;
    /// move to the previous page.
    Retreat,
    /// Displacement stayed within the threshold; return to the settled
    /// page without changing indices.
    SnapBack,
}

#[derive(Clone, Copy)]
enum TrackerState {
    Idle,
    Dragging { start: Point, last: Point },
}

/// Idle/Dragging state machine fed by the host's pointer events.
pub(crate) struct GestureTracker {
    state: TrackerState,
}

impl GestureTracker {
    pub(crate) fn new() -> Self {
        Self {
            state: TrackerState::Idle,
        }
    }

    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging { .. })
    }

    /// Enters the dragging state, recording the start position.
    pub(crate) fn begin(&mut self, position: Point) {
        self.state = TrackerState::Dragging {
            start: position,
            last: position,
        };
    }

    /// Per-event displacement along the axis; `None` while not dragging.
    pub(crate) fn update(&mut self, position: Point, axis: Axis) -> Option<f32> {
        match &mut self.state {
            TrackerState::Idle => None,
            TrackerState::Dragging { last, .. } => {
                let delta = axis.component_of(position) - axis.component_of(*last);
                *last = position;
                Some(delta)
            }
        }
    }

    /// Leaves the dragging state and decides commit or snap-back.
    ///
    /// `threshold` is the commit distance in host units; the total
    /// displacement must exceed it strictly. Returns `None` when no
    /// drag was active.
    pub(crate) fn finish(
        &mut self,
        position: Point,
        axis: Axis,
        threshold: f32,
    ) -> Option<DragOutcome> {
        let TrackerState::Dragging { start, .. } = self.state else {
            return None;
        };
        self.state = TrackerState::Idle;

        let displacement = axis.component_of(position) - axis.component_of(start);
        trace!("drag finished: displacement {displacement}, threshold {threshold}");
        let outcome = if displacement.abs() > threshold {
            if displacement > 0.0 {
                DragOutcome::Retreat
            } else {
                DragOutcome::Advance
            }
        } else {
            DragOutcome::SnapBack
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 225.0;

    #[test]
    fn events_while_idle_are_ignored() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(Point::new(10.0, 0.0), Axis::Horizontal), None);
        assert_eq!(
            tracker.finish(Point::new(10.0, 0.0), Axis::Horizontal, THRESHOLD),
            None
        );
    }

    #[test]
    fn update_reports_per_event_deltas() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(100.0, 50.0));
        assert!(tracker.is_dragging());

        assert_eq!(
            tracker.update(Point::new(90.0, 50.0), Axis::Horizontal),
            Some(-10.0)
        );
        assert_eq!(
            tracker.update(Point::new(70.0, 50.0), Axis::Horizontal),
            Some(-20.0)
        );
    }

    #[test]
    fn release_past_threshold_commits() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(500.0, 0.0));
        let outcome = tracker.finish(
            Point::new(500.0 - THRESHOLD - 0.5, 0.0),
            Axis::Horizontal,
            THRESHOLD,
        );
        assert_eq!(outcome, Some(DragOutcome::Advance));
        assert!(!tracker.is_dragging());

        tracker.begin(Point::new(500.0, 0.0));
        let outcome = tracker.finish(
            Point::new(500.0 + THRESHOLD + 0.5, 0.0),
            Axis::Horizontal,
            THRESHOLD,
        );
        assert_eq!(outcome, Some(DragOutcome::Retreat));
    }

    #[test]
    fn release_within_threshold_snaps_back() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(500.0, 0.0));
        let outcome = tracker.finish(
            Point::new(500.0 - THRESHOLD + 0.5, 0.0),
            Axis::Horizontal,
            THRESHOLD,
        );
        assert_eq!(outcome, Some(DragOutcome::SnapBack));
    }

    #[test]
    fn exact_threshold_displacement_snaps_back() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(500.0, 0.0));
        let outcome = tracker.finish(
            Point::new(500.0 - THRESHOLD, 0.0),
            Axis::Horizontal,
            THRESHOLD,
        );
        assert_eq!(outcome, Some(DragOutcome::SnapBack));
    }

    #[test]
    fn vertical_axis_uses_y_displacement() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(0.0, 800.0));
        assert_eq!(
            tracker.update(Point::new(40.0, 780.0), Axis::Vertical),
            Some(-20.0)
        );
        let outcome = tracker.finish(Point::new(40.0, 300.0), Axis::Vertical, THRESHOLD);
        assert_eq!(outcome, Some(DragOutcome::Advance));
    }
}
