//! Decision strategies.
//!
//! A [`Strategy`] turns the current [`SearchState`] plus one feedback token
//! into the next jump. Strategies are pure: the same state and feedback always
//! yield the same [`Decision`]. Any `Fn(&SearchState, Feedback)` closure with
//! the right signature is a strategy too.

use std::env;

use serde::Deserialize;

use knight_types::{Axis, Bounds, Coordinate, Feedback, Rectangle};

use crate::error::{InvalidState, StrategyError};
use crate::state::SearchState;

/// Where to jump next, and what the strategy knows after this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub probe: Coordinate,
    pub state: SearchState,
}

impl Decision {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.state.is_found()
    }
}

pub trait Strategy {
    /// Short label for logs.
    fn name(&self) -> &'static str {
        "custom"
    }

    fn decide(&self, state: &SearchState, feedback: Feedback) -> Result<Decision, StrategyError>;
}

impl<F> Strategy for F
where
    F: Fn(&SearchState, Feedback) -> Result<Decision, StrategyError>,
{
    fn decide(&self, state: &SearchState, feedback: Feedback) -> Result<Decision, StrategyError> {
        self(state, feedback)
    }
}

/// How many axes move per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPolicy {
    /// Bisect both axes every turn.
    #[default]
    Simultaneous,
    /// Bisect one axis per turn, alternating and skipping converged axes.
    Sequential,
}

impl AxisPolicy {
    pub const ENV_VAR: &'static str = "KNIGHT_AXIS_POLICY";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AxisPolicy::Simultaneous => "simultaneous",
            AxisPolicy::Sequential => "sequential",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "simultaneous" | "both" => Some(AxisPolicy::Simultaneous),
            "sequential" | "alternate" => Some(AxisPolicy::Sequential),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var(Self::ENV_VAR).ok()?;
        let parsed = Self::parse(&raw);
        if parsed.is_none() {
            tracing::warn!("Unknown {} value: {}", Self::ENV_VAR, raw);
        }
        parsed
    }

    /// Worst-case number of jumps until the agent lands on the bomb.
    #[must_use]
    pub fn turn_limit(self, bounds: &Bounds) -> u32 {
        let width = ceil_log2(bounds.width().unsigned_abs());
        let height = ceil_log2(bounds.height().unsigned_abs());
        match self {
            AxisPolicy::Simultaneous => width.max(height),
            AxisPolicy::Sequential => width + height,
        }
    }
}

fn ceil_log2(n: u32) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

/// Bisection over the window, rounding midpoints down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinarySearchStrategy {
    policy: AxisPolicy,
}

impl BinarySearchStrategy {
    #[must_use]
    pub const fn new(policy: AxisPolicy) -> Self {
        Self { policy }
    }

    fn next_probe(&self, state: &SearchState, window: Rectangle) -> (Coordinate, Axis) {
        match self.policy {
            // Both axes move every turn, so there is no axis to carry over.
            AxisPolicy::Simultaneous => (window.center(), Axis::Horizontal),
            AxisPolicy::Sequential => {
                let preferred = state.next_axis();
                let active = if window.axis(preferred).is_point() {
                    preferred.other()
                } else {
                    preferred
                };
                let passive = active.other();
                let rest = window.axis(passive);
                // The passive coordinate stays put unless feedback moved the window off it.
                let stay = state.last_probe().get(passive).clamp(rest.min(), rest.max());
                let probe = state
                    .last_probe()
                    .with(passive, stay)
                    .with(active, window.axis(active).midpoint());
                (probe, passive)
            }
        }
    }
}

impl Strategy for BinarySearchStrategy {
    fn name(&self) -> &'static str {
        match self.policy {
            AxisPolicy::Simultaneous => "binary-search/simultaneous",
            AxisPolicy::Sequential => "binary-search/sequential",
        }
    }

    fn decide(&self, state: &SearchState, feedback: Feedback) -> Result<Decision, StrategyError> {
        let probe = state.last_probe();
        if state.is_found() {
            return Err(InvalidState::AlreadyFound { probe }.into());
        }

        let direction = match feedback {
            Feedback::Found => {
                return Ok(Decision {
                    probe,
                    state: state.found(),
                });
            }
            Feedback::Toward(direction) => direction,
        };

        if state.is_converged() {
            return Err(InvalidState::Converged { probe, feedback }.into());
        }

        let window = state.narrow(direction)?;
        let (probe, next_axis) = self.next_probe(state, window);
        Ok(Decision {
            probe,
            state: SearchState::searching(window, probe, next_axis),
        })
    }
}
