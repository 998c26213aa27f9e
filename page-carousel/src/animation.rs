//! Progress curves for carousel motion.

/// Cubic ease-in-out mapping.
///
/// Takes linear progress in `[0.0, 1.0]` and returns eased progress in
/// the same range; out-of-range input is clamped first.
pub(crate) fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
    }
}

/// Linear interpolation from `from` to `to` at eased `progress`.
pub(crate) fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(easing(0.0), 0.0);
        assert_eq!(easing(1.0), 1.0);
        assert!((easing(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(easing(-2.0), 0.0);
        assert_eq!(easing(3.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = easing(0.0);
        for step in 1..=100 {
            let eased = easing(step as f32 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn easing_starts_slow() {
        // Ease-in: the first quarter covers less ground than linear.
        assert!(easing(0.25) < 0.25);
        // Ease-out: the last quarter mirrors it.
        assert!(easing(0.75) > 0.75);
    }

    #[test]
    fn lerp_interpolates_between_endpoints() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-100.0, 100.0, 0.5), 0.0);
    }
}
