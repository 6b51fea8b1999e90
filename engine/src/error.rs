//! Failure taxonomy for a search session.
//!
//! Every error is terminal: nothing here is retried. [`GameError::kind`]
//! classifies a failure for the diagnostic printed at the process boundary.

use std::fmt;
use std::io;

use thiserror::Error;

use knight_types::{Axis, Coordinate, Feedback, FeedbackParseError, Interval, InvalidArgument};

/// The strategy was asked to decide in a state where no decision exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("bomb already found at ({probe})")]
    AlreadyFound { probe: Coordinate },
    #[error("search converged on ({probe}); feedback {feedback} is not possible there")]
    Converged {
        probe: Coordinate,
        feedback: Feedback,
    },
}

/// The judge sent something that cannot be true.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error(
        "feedback {feedback} for probe ({probe}) leaves no {axis} candidates in {interval}"
    )]
    Contradiction {
        feedback: Feedback,
        probe: Coordinate,
        axis: Axis,
        interval: Interval,
    },
    #[error(transparent)]
    Token(#[from] FeedbackParseError),
}

/// Everything [`Strategy::decide`](crate::Strategy::decide) may fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error(transparent)]
    InvalidState(#[from] InvalidState),
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    InvalidState(#[from] InvalidState),
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
    #[error("session is not running: {reason}")]
    SessionNotRunning { reason: &'static str },
    #[error("judge stream failed: {0}")]
    Io(#[from] io::Error),
}

impl From<StrategyError> for GameError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::InvalidState(err) => GameError::InvalidState(err),
            StrategyError::DataIntegrity(err) => GameError::DataIntegrity(err),
        }
    }
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GameError::InvalidState(_) => ErrorKind::InvalidState,
            GameError::DataIntegrity(_) => ErrorKind::DataIntegrity,
            GameError::SessionNotRunning { .. } => ErrorKind::SessionNotRunning,
            GameError::Io(_) => ErrorKind::Io,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    DataIntegrity,
    SessionNotRunning,
    Io,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::InvalidState => "invalid-state",
            ErrorKind::DataIntegrity => "data-integrity",
            ErrorKind::SessionNotRunning => "session-not-running",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
