//! Geometry primitives for carousel layout.
//!
//! The carousel reasons about a single scroll axis; these types carry
//! positions and sizes between the core and its [`PageHost`], and
//! [`Axis`] centralizes the per-axis arithmetic.
//!
//! [`PageHost`]: crate::host::PageHost

/// A 2D position in the host's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the carousel container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    /// Width of the container.
    pub width: f32,
    /// Height of the container.
    pub height: f32,
}

impl Extent {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates an extent from width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scroll axis of the page strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Pages advance along the X axis.
    #[default]
    Horizontal,
    /// Pages advance along the Y axis.
    Vertical,
}

impl Axis {
    /// Container size along the scroll axis.
    pub(crate) fn extent_of(self, extent: Extent) -> f32 {
        match self {
            Self::Horizontal => extent.width,
            Self::Vertical => extent.height,
        }
    }

    /// Component of a position along the scroll axis.
    pub(crate) fn component_of(self, point: Point) -> f32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Position of a display slot inside the page strip.
    ///
    /// Vertical slots grow toward negative Y so that the positive
    /// container offsets of [`Axis::target_offset`] cancel them out.
    pub(crate) fn slot_position(self, slot: usize, extent: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(slot as f32 * extent, 0.0),
            Self::Vertical => Point::new(0.0, -(slot as f32) * extent),
        }
    }

    /// Container offset that brings a display slot to the origin.
    ///
    /// The vertical strip moves opposite to the horizontal one; the
    /// asymmetry is part of the component's contract.
    pub(crate) fn target_offset(self, slot: i32, extent: f32) -> f32 {
        match self {
            Self::Horizontal => -(slot as f32) * extent,
            Self::Vertical => slot as f32 * extent,
        }
    }

    /// Expands a scalar offset along this axis into a 2D offset.
    pub(crate) fn offset_point(self, offset: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(offset, 0.0),
            Self::Vertical => Point::new(0.0, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_axis_arithmetic() {
        let axis = Axis::Horizontal;
        assert_eq!(axis.extent_of(Extent::new(750.0, 1334.0)), 750.0);
        assert_eq!(axis.component_of(Point::new(3.0, 9.0)), 3.0);
        assert_eq!(axis.slot_position(2, 100.0), Point::new(200.0, 0.0));
        assert_eq!(axis.target_offset(2, 100.0), -200.0);
        assert_eq!(axis.offset_point(-50.0), Point::new(-50.0, 0.0));
    }

    #[test]
    fn vertical_axis_arithmetic() {
        let axis = Axis::Vertical;
        assert_eq!(axis.extent_of(Extent::new(750.0, 1334.0)), 1334.0);
        assert_eq!(axis.component_of(Point::new(3.0, 9.0)), 9.0);
        assert_eq!(axis.slot_position(2, 100.0), Point::new(0.0, -200.0));
        assert_eq!(axis.target_offset(2, 100.0), 200.0);
        assert_eq!(axis.offset_point(-50.0), Point::new(0.0, -50.0));
    }

    #[test]
    fn slot_and_target_cancel_out() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            for slot in 0..4 {
                let placed = axis.slot_position(slot, 320.0);
                let offset = axis.offset_point(axis.target_offset(slot as i32, 320.0));
                assert_eq!(placed.x + offset.x, 0.0);
                assert_eq!(placed.y + offset.y, 0.0);
            }
        }
    }

    #[test]
    fn negative_target_slots_are_representable() {
        assert_eq!(Axis::Horizontal.target_offset(-1, 100.0), 100.0);
        assert_eq!(Axis::Vertical.target_offset(-1, 100.0), -100.0);
    }
}
