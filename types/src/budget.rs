//! Turn budget invariant type.

use crate::InvalidArgument;

/// Remaining jumps before the session is declared failed.
///
/// The bootstrap value is validated into `[MIN_INPUT, MAX_INPUT]`; afterwards
/// the budget only ever decreases, one turn at a time, via [`take_one`].
///
/// [`take_one`]: TurnBudget::take_one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnBudget(u32);

impl TurnBudget {
    pub const MIN_INPUT: u32 = 2;
    pub const MAX_INPUT: u32 = 100;
    /// The session stops once fewer than this many turns remain.
    pub const STOP_BELOW: u32 = 1;

    pub fn new(turns: i64) -> Result<Self, InvalidArgument> {
        u32::try_from(turns)
            .ok()
            .filter(|t| (Self::MIN_INPUT..=Self::MAX_INPUT).contains(t))
            .map(Self)
            .ok_or(InvalidArgument::Turns {
                value: turns,
                min: Self::MIN_INPUT,
                max: Self::MAX_INPUT,
            })
    }

    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn has_turns(self) -> bool {
        self.0 >= Self::STOP_BELOW
    }

    /// Consume one turn. Returns the decremented budget, or `None` if exhausted.
    #[must_use]
    pub fn take_one(self) -> Option<TurnBudget> {
        if self.has_turns() {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}
