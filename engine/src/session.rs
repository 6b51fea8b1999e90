//! Turn loop.
//!
//! A [`Session`] owns everything for one game: the building, the search state,
//! the remaining turn budget and the strategy. Each turn consumes exactly one
//! feedback token and, unless the bomb was found, emits exactly one probe.
//!
//! ```text
//! Running --FOUND--> Found
//!    |
//!    +--last turn spent, window is one cell--> Found
//!    |
//!    +--last turn spent, otherwise--> Exhausted
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use knight_types::{Coordinate, Feedback, Rectangle, TurnBudget};

use crate::error::GameError;
use crate::protocol::{Bootstrap, TokenReader, write_probe};
use crate::state::SearchState;
use crate::strategy::{AxisPolicy, BinarySearchStrategy, Strategy};

/// A jump together with the judge's answer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    coordinate: Coordinate,
    feedback: Feedback,
}

impl Probe {
    #[must_use]
    pub const fn new(coordinate: Coordinate, feedback: Feedback) -> Self {
        Self {
            coordinate,
            feedback,
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Found(Coordinate),
    Exhausted,
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// Jump here and wait for the next hint.
    Jump(Coordinate),
    /// The previous jump landed on the bomb.
    Found(Coordinate),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Found {
        bomb: Coordinate,
        turns_used: u32,
    },
    /// Budget spent; `window` is what was still possible.
    Exhausted {
        window: Rectangle,
        last_probe: Coordinate,
        turns_used: u32,
    },
    /// The judge stopped sending feedback.
    InputClosed {
        last_probe: Coordinate,
        turns_used: u32,
    },
}

pub struct Session {
    state: SearchState,
    turns: TurnBudget,
    turns_used: u32,
    strategy: Box<dyn Strategy>,
    history: Vec<Probe>,
    status: SessionStatus,
}

// Manual Debug impl: strategies are trait objects, show their name instead.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("turns", &self.turns)
            .field("turns_used", &self.turns_used)
            .field("strategy", &self.strategy.name())
            .field("history", &self.history.len())
            .field("status", &self.status)
            .finish()
    }
}

impl Session {
    pub fn new(bootstrap: Bootstrap, strategy: Box<dyn Strategy>) -> Result<Self, GameError> {
        let state = SearchState::new(&bootstrap.bounds, bootstrap.start)?;
        tracing::info!(
            width = bootstrap.bounds.width(),
            height = bootstrap.bounds.height(),
            turns = bootstrap.turns.remaining(),
            start = %bootstrap.start,
            strategy = strategy.name(),
            "Session started"
        );
        Ok(Self {
            state,
            turns: bootstrap.turns,
            turns_used: 0,
            strategy,
            history: Vec::new(),
            status: SessionStatus::Running,
        })
    }

    /// Session driven by [`BinarySearchStrategy`].
    pub fn with_policy(bootstrap: Bootstrap, policy: AxisPolicy) -> Result<Self, GameError> {
        let limit = policy.turn_limit(&bootstrap.bounds);
        if bootstrap.turns.remaining() < limit {
            tracing::warn!(
                turns = bootstrap.turns.remaining(),
                worst_case = limit,
                policy = policy.as_str(),
                "Turn budget may run out before the bomb is found"
            );
        }
        Self::new(bootstrap, Box::new(BinarySearchStrategy::new(policy)))
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn turns_remaining(&self) -> u32 {
        self.turns.remaining()
    }

    #[must_use]
    pub const fn turns_used(&self) -> u32 {
        self.turns_used
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Every answered jump, oldest first. The start position is the first entry.
    #[must_use]
    pub fn history(&self) -> &[Probe] {
        &self.history
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.status, SessionStatus::Running) && self.turns.has_turns()
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.status {
            SessionStatus::Running if self.turns.has_turns() => Ok(()),
            SessionStatus::Found(_) => Err(GameError::SessionNotRunning {
                reason: "bomb already found",
            }),
            SessionStatus::Running | SessionStatus::Exhausted => {
                Err(GameError::SessionNotRunning {
                    reason: "no turns left",
                })
            }
        }
    }

    /// Feed one hint to the strategy.
    ///
    /// A `FOUND` hint ends the session without spending a turn; any other hint
    /// spends one and yields the next jump.
    pub fn next_turn(&mut self, feedback: Feedback) -> Result<TurnReport, GameError> {
        self.ensure_running()?;

        let decision = self.strategy.decide(&self.state, feedback)?;
        self.history.push(Probe::new(self.state.last_probe(), feedback));
        self.state = decision.state;

        if decision.is_found() {
            self.status = SessionStatus::Found(decision.probe);
            tracing::info!(
                bomb = %decision.probe,
                turns_used = self.turns_used,
                "Bomb found"
            );
            return Ok(TurnReport::Found(decision.probe));
        }

        self.turns = self
            .turns
            .take_one()
            .ok_or(GameError::SessionNotRunning {
                reason: "no turns left",
            })?;
        self.turns_used += 1;
        tracing::debug!(
            turn = self.turns_used,
            %feedback,
            probe = %decision.probe,
            window = %self.state.window(),
            remaining = self.turns.remaining(),
            "Jump"
        );

        if !self.turns.has_turns() {
            // No hint will follow the last jump. A single remaining cell under
            // the agent is the bomb, so the game ends found rather than exhausted.
            if self.state.is_converged() {
                self.state = self.state.found();
                self.status = SessionStatus::Found(decision.probe);
                tracing::info!(
                    bomb = %decision.probe,
                    turns_used = self.turns_used,
                    "Last jump lands on the only candidate"
                );
            } else {
                self.status = SessionStatus::Exhausted;
                tracing::warn!(
                    window = %self.state.window(),
                    area = self.state.window().area(),
                    turns_used = self.turns_used,
                    "Turn budget exhausted before convergence"
                );
            }
        }

        Ok(TurnReport::Jump(decision.probe))
    }

    /// Drive the session against a judge until it ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut TokenReader<R>,
        output: &mut W,
    ) -> Result<SessionOutcome, GameError> {
        while self.is_running() {
            let Some(feedback) = input.read_feedback()? else {
                tracing::info!(turns_used = self.turns_used, "Judge closed the stream");
                return Ok(SessionOutcome::InputClosed {
                    last_probe: self.state.last_probe(),
                    turns_used: self.turns_used,
                });
            };
            if let TurnReport::Jump(probe) = self.next_turn(feedback)? {
                write_probe(output, probe)?;
            }
        }
        Ok(self.outcome())
    }

    fn outcome(&self) -> SessionOutcome {
        match self.status {
            SessionStatus::Found(bomb) => SessionOutcome::Found {
                bomb,
                turns_used: self.turns_used,
            },
            SessionStatus::Running | SessionStatus::Exhausted => SessionOutcome::Exhausted {
                window: self.state.window(),
                last_probe: self.state.last_probe(),
                turns_used: self.turns_used,
            },
        }
    }
}

/// Read the bootstrap from `input`, then play until the session ends.
///
/// Nothing is written to `output` unless the bootstrap is valid.
pub fn play<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    policy: AxisPolicy,
) -> Result<SessionOutcome, GameError> {
    let mut reader = TokenReader::new(input);
    let bootstrap = Bootstrap::read(&mut reader)?;
    let mut session = Session::with_policy(bootstrap, policy)?;
    session.run(&mut reader, &mut output)
}
