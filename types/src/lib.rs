//! Core domain types for Knight.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Every value here is validated at construction time: once you hold a
//! [`Bounds`], a [`TurnBudget`] or an [`Interval`], its invariants hold.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod budget;
mod building;
mod error;
mod feedback;
mod geometry;

pub use budget::TurnBudget;
pub use building::{Bounds, start_position};
pub use error::InvalidArgument;
pub use feedback::{BombDirection, Feedback, FeedbackParseError, Horizontal, Vertical};
pub use geometry::{Axis, Coordinate, Interval, Rectangle};
