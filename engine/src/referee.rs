//! Judge side of the protocol: what a consistent judge answers for a probe.

use std::cmp::Ordering;

use knight_types::{BombDirection, Coordinate, Feedback, Horizontal, Vertical};

/// Feedback a truthful judge sends after the agent jumps to `probe`.
#[must_use]
pub fn feedback_for(probe: Coordinate, bomb: Coordinate) -> Feedback {
    let vertical = match bomb.y.cmp(&probe.y) {
        Ordering::Less => Some(Vertical::Up),
        Ordering::Greater => Some(Vertical::Down),
        Ordering::Equal => None,
    };
    let horizontal = match bomb.x.cmp(&probe.x) {
        Ordering::Less => Some(Horizontal::Left),
        Ordering::Greater => Some(Horizontal::Right),
        Ordering::Equal => None,
    };
    BombDirection::from_parts(vertical, horizontal).map_or(Feedback::Found, Feedback::Toward)
}
