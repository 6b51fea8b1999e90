//! Core engine for Knight - search state, strategy and turn loop.
//!
//! This crate plays one game against a judge: it reads the bootstrap, then
//! alternates between reading a bomb-direction hint and answering with the
//! next window to jump to.
//!
//! ```text
//! protocol::Bootstrap -> Session -> Strategy::decide(SearchState, Feedback)
//!                          |                 |
//!                          v                 v
//!                     write_probe       Decision { probe, state }
//! ```

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod config;
mod error;
mod protocol;
mod referee;
mod session;
mod state;
mod strategy;

pub use config::{CONFIG_ENV_VAR, ConfigError, KnightConfig, LogConfig, SearchConfig, config_path};
pub use error::{DataIntegrityError, ErrorKind, GameError, InvalidState, StrategyError};
pub use protocol::{Bootstrap, TokenReader, write_probe};
pub use referee::feedback_for;
pub use session::{Probe, Session, SessionOutcome, SessionStatus, TurnReport, play};
pub use state::{SearchState, SearchStatus};
pub use strategy::{AxisPolicy, BinarySearchStrategy, Decision, Strategy};
