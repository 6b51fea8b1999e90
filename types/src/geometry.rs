//! Window geometry: coordinates, inclusive intervals and the search rectangle.
//!
//! Row `y = 0` is the top floor of the building and column `x = 0` the
//! leftmost window, so "up" shrinks `y` and "left" shrinks `x`.

use std::fmt;

use crate::InvalidArgument;

/// A single window of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of `self` with the `axis` component replaced.
    #[must_use]
    pub const fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, self.y),
            Axis::Vertical => Self::new(self.x, value),
        }
    }
}

/// Wire format of a probe: `"x y"`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "x",
            Axis::Vertical => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty inclusive range of window indices.
///
/// # Invariant
///
/// - `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    min: i32,
    max: i32,
}

impl Interval {
    pub fn new(min: i32, max: i32) -> Result<Self, InvalidArgument> {
        if min > max {
            return Err(InvalidArgument::EmptyInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// Caller guarantees `min <= max`.
    pub(crate) const fn new_unchecked(min: i32, max: i32) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    #[must_use]
    pub const fn point(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of indices in the interval (always at least 1).
    #[must_use]
    pub const fn len(self) -> u32 {
        self.max.abs_diff(self.min) + 1
    }

    #[must_use]
    pub const fn is_point(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Floor midpoint; on even lengths the lower of the two middles.
    #[must_use]
    pub const fn midpoint(self) -> i32 {
        self.min + (self.max - self.min) / 2
    }

    /// The part strictly below `pivot`, or `None` if nothing remains.
    #[must_use]
    pub fn before(self, pivot: i32) -> Option<Self> {
        let max = self.max.min(pivot.checked_sub(1)?);
        (self.min <= max).then_some(Self { min: self.min, max })
    }

    /// The part strictly above `pivot`, or `None` if nothing remains.
    #[must_use]
    pub fn after(self, pivot: i32) -> Option<Self> {
        let min = self.min.max(pivot.checked_add(1)?);
        (min <= self.max).then_some(Self { min, max: self.max })
    }

    /// Collapse onto `pivot`, or `None` if `pivot` lies outside.
    #[must_use]
    pub fn at(self, pivot: i32) -> Option<Self> {
        self.contains(pivot).then_some(Self::point(pivot))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Axis-aligned search window: every coordinate not yet excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: Interval,
    y: Interval,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(&self) -> Interval {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> Interval {
        self.y
    }

    #[must_use]
    pub const fn axis(&self, axis: Axis) -> Interval {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    #[must_use]
    pub const fn area(&self) -> u64 {
        self.x.len() as u64 * self.y.len() as u64
    }

    #[must_use]
    pub const fn contains(&self, coord: Coordinate) -> bool {
        self.x.contains(coord.x) && self.y.contains(coord.y)
    }

    #[must_use]
    pub const fn is_point(&self) -> bool {
        self.x.is_point() && self.y.is_point()
    }

    /// Floor midpoint on both axes.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        Coordinate::new(self.x.midpoint(), self.y.midpoint())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
