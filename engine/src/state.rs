//! Search state: the window still known to contain the bomb.

use knight_types::{
    Axis, BombDirection, Bounds, Coordinate, Horizontal, Interval, InvalidArgument, Rectangle,
    Vertical, start_position,
};

use crate::error::DataIntegrityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Searching,
    Found,
}

/// Snapshot of everything the strategy knows after a turn.
///
/// # Invariants
///
/// - `last_probe` lies inside `window`
/// - `window` never grows from one state to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    window: Rectangle,
    last_probe: Coordinate,
    next_axis: Axis,
    status: SearchStatus,
}

impl SearchState {
    /// Whole building, with the agent parked at `start`.
    pub fn new(bounds: &Bounds, start: Coordinate) -> Result<Self, InvalidArgument> {
        let start = start_position(bounds, start.x.into(), start.y.into())?;
        Ok(Self {
            window: bounds.full_window(),
            last_probe: start,
            next_axis: Axis::Horizontal,
            status: SearchStatus::Searching,
        })
    }

    #[must_use]
    pub const fn window(&self) -> Rectangle {
        self.window
    }

    /// The coordinate the next feedback token refers to.
    #[must_use]
    pub const fn last_probe(&self) -> Coordinate {
        self.last_probe
    }

    /// Axis the sequential policy will try to bisect next.
    ///
    /// The simultaneous policy ignores it and leaves it at [`Axis::Horizontal`].
    #[must_use]
    pub const fn next_axis(&self) -> Axis {
        self.next_axis
    }

    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self.status, SearchStatus::Found)
    }

    /// Only one candidate is left and the agent is standing on it.
    #[must_use]
    pub const fn is_converged(&self) -> bool {
        self.window.is_point() && self.window.contains(self.last_probe)
    }

    /// Window left after applying `direction` to the last probe.
    pub fn narrow(&self, direction: BombDirection) -> Result<Rectangle, DataIntegrityError> {
        let probe = self.last_probe;
        let vertical = self.window.y();
        let horizontal = self.window.x();

        let y = match direction.vertical() {
            Some(Vertical::Up) => vertical.before(probe.y),
            Some(Vertical::Down) => vertical.after(probe.y),
            None => vertical.at(probe.y),
        }
        .ok_or_else(|| contradiction(direction, probe, Axis::Vertical, vertical))?;

        let x = match direction.horizontal() {
            Some(Horizontal::Left) => horizontal.before(probe.x),
            Some(Horizontal::Right) => horizontal.after(probe.x),
            None => horizontal.at(probe.x),
        }
        .ok_or_else(|| contradiction(direction, probe, Axis::Horizontal, horizontal))?;

        Ok(Rectangle::new(x, y))
    }

    /// State after moving to `probe` inside `window`.
    pub(crate) fn searching(window: Rectangle, probe: Coordinate, next_axis: Axis) -> Self {
        debug_assert!(window.contains(probe));
        Self {
            window,
            last_probe: probe,
            next_axis,
            status: SearchStatus::Searching,
        }
    }

    /// The last probe was the bomb; nothing left to search.
    pub(crate) fn found(&self) -> Self {
        Self {
            window: Rectangle::new(
                Interval::point(self.last_probe.x),
                Interval::point(self.last_probe.y),
            ),
            status: SearchStatus::Found,
            ..*self
        }
    }
}

fn contradiction(
    direction: BombDirection,
    probe: Coordinate,
    axis: Axis,
    interval: Interval,
) -> DataIntegrityError {
    DataIntegrityError::Contradiction {
        feedback: direction.into(),
        probe,
        axis,
        interval,
    }
}
