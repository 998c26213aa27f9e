//! Offset interpolation toward a target display slot.
//!
//! The animator is driven by the host's injected tick deltas rather
//! than wall-clock reads, so a cooperative single-threaded host fully
//! controls its progress. Starting a new animation or cancelling
//! supersedes the one in flight; a superseded animation never reports
//! completion.

use crate::animation::{easing, lerp};

/// What an animation does when it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationKind {
    /// Page transition; wraparound correction runs on arrival.
    Slide,
    /// Snap-back after an under-threshold drag; indices stay untouched.
    Bounce,
}

#[derive(Clone, Copy)]
struct Animation {
    kind: AnimationKind,
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

/// Progress report for one tick of an active animation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AnimationFrame {
    /// Offset the container should show this frame.
    pub(crate) offset: f32,
    /// Kind of the animation that produced the frame.
    pub(crate) kind: AnimationKind,
    /// True when the animation reached its target this tick.
    pub(crate) finished: bool,
}

/// Interpolates the container offset over a fixed duration.
pub(crate) struct PositionAnimator {
    active: Option<Animation>,
}

impl PositionAnimator {
    pub(crate) fn new() -> Self {
        Self { active: None }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a new animation, superseding any in-flight one.
    pub(crate) fn start(&mut self, kind: AnimationKind, from: f32, to: f32, duration: f32) {
        self.active = Some(Animation {
            kind,
            from,
            to,
            duration,
            elapsed: 0.0,
        });
    }

    /// Cancels without completing; no completion frame is reported.
    pub(crate) fn cancel(&mut self) {
        self.active = None;
    }

    /// Advances the active animation by `dt` seconds.
    pub(crate) fn tick(&mut self, dt: f32) -> Option<AnimationFrame> {
        let animation = self.active.as_mut()?;
        animation.elapsed += dt;

        if animation.duration <= f32::EPSILON || animation.elapsed >= animation.duration {
            let frame = AnimationFrame {
                offset: animation.to,
                kind: animation.kind,
                finished: true,
            };
            self.active = None;
            return Some(frame);
        }

        let progress = easing(animation.elapsed / animation.duration);
        Some(AnimationFrame {
            offset: lerp(animation.from, animation.to, progress),
            kind: animation.kind,
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_animator_reports_nothing() {
        let mut animator = PositionAnimator::new();
        assert!(!animator.is_active());
        assert!(animator.tick(0.1).is_none());
    }

    #[test]
    fn reaches_target_at_duration() {
        let mut animator = PositionAnimator::new();
        animator.start(AnimationKind::Slide, 0.0, -750.0, 0.3);

        let frame = animator.tick(0.15).expect("animation is active");
        assert!(!frame.finished);
        assert!(frame.offset < 0.0 && frame.offset > -750.0);

        let frame = animator.tick(0.15).expect("animation is active");
        assert!(frame.finished);
        assert_eq!(frame.offset, -750.0);
        assert!(!animator.is_active());
    }

    #[test]
    fn interpolation_is_eased_not_linear() {
        let mut animator = PositionAnimator::new();
        animator.start(AnimationKind::Slide, 0.0, -1000.0, 1.0);
        let frame = animator.tick(0.25).expect("animation is active");
        // Ease-in covers less than the linear quarter of the distance.
        assert!(frame.offset > -250.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut animator = PositionAnimator::new();
        animator.start(AnimationKind::Bounce, 10.0, 0.0, 0.0);
        let frame = animator.tick(0.016).expect("animation is active");
        assert!(frame.finished);
        assert_eq!(frame.offset, 0.0);
    }

    #[test]
    fn cancel_supersedes_without_completion() {
        let mut animator = PositionAnimator::new();
        animator.start(AnimationKind::Slide, 0.0, -750.0, 0.3);
        animator.cancel();
        assert!(!animator.is_active());
        assert!(animator.tick(1.0).is_none());
    }

    #[test]
    fn restart_replaces_the_active_animation() {
        let mut animator = PositionAnimator::new();
        animator.start(AnimationKind::Slide, 0.0, -750.0, 0.3);
        animator.tick(0.1);
        animator.start(AnimationKind::Bounce, -200.0, 0.0, 0.2);

        let frame = animator.tick(0.2).expect("animation is active");
        assert!(frame.finished);
        assert_eq!(frame.kind, AnimationKind::Bounce);
        assert_eq!(frame.offset, 0.0);
    }
}
