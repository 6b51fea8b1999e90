//! The building being searched.

use crate::{Axis, Coordinate, Interval, InvalidArgument, Rectangle};

/// Validated building size.
///
/// # Invariants
///
/// - `MIN_WIDTH <= width <= MAX_WIDTH`
/// - `MIN_HEIGHT <= height <= MAX_HEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub const MIN_WIDTH: i32 = 1;
    pub const MAX_WIDTH: i32 = 10_000;
    pub const MIN_HEIGHT: i32 = 5;
    pub const MAX_HEIGHT: i32 = 10_000;

    pub fn new(width: i64, height: i64) -> Result<Self, InvalidArgument> {
        let width = i32::try_from(width)
            .ok()
            .filter(|w| (Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(w))
            .ok_or(InvalidArgument::Width {
                value: width,
                min: Self::MIN_WIDTH,
                max: Self::MAX_WIDTH,
            })?;
        let height = i32::try_from(height)
            .ok()
            .filter(|h| (Self::MIN_HEIGHT..=Self::MAX_HEIGHT).contains(h))
            .ok_or(InvalidArgument::Height {
                value: height,
                min: Self::MIN_HEIGHT,
                max: Self::MAX_HEIGHT,
            })?;
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The whole building: `[0, width-1] x [0, height-1]`.
    #[must_use]
    pub const fn full_window(&self) -> Rectangle {
        Rectangle::new(
            Interval::new_unchecked(0, self.width - 1),
            Interval::new_unchecked(0, self.height - 1),
        )
    }
}

/// Validate the agent's starting window against the building.
pub fn start_position(bounds: &Bounds, x: i64, y: i64) -> Result<Coordinate, InvalidArgument> {
    let check = |axis: Axis, value: i64| {
        let limit = bounds.extent(axis);
        i32::try_from(value)
            .ok()
            .filter(|v| (0..limit).contains(v))
            .ok_or(InvalidArgument::Start { axis, value, limit })
    };
    Ok(Coordinate::new(
        check(Axis::Horizontal, x)?,
        check(Axis::Vertical, y)?,
    ))
}
