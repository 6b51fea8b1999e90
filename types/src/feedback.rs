//! Bomb-direction feedback tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Vertical component of a hint. `Up` means a smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Up,
    Down,
}

/// Horizontal component of a hint. `Left` means a smaller `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Right,
}

/// Compass direction from the previous probe towards the bomb.
///
/// A direction without a vertical (horizontal) component means the bomb is on
/// the same row (column) as the previous probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BombDirection {
    U,
    UR,
    R,
    DR,
    D,
    DL,
    L,
    UL,
}

impl BombDirection {
    pub const ALL: [BombDirection; 8] = [
        BombDirection::U,
        BombDirection::UR,
        BombDirection::R,
        BombDirection::DR,
        BombDirection::D,
        BombDirection::DL,
        BombDirection::L,
        BombDirection::UL,
    ];

    #[must_use]
    pub const fn vertical(self) -> Option<Vertical> {
        match self {
            BombDirection::U | BombDirection::UR | BombDirection::UL => Some(Vertical::Up),
            BombDirection::D | BombDirection::DR | BombDirection::DL => Some(Vertical::Down),
            BombDirection::R | BombDirection::L => None,
        }
    }

    #[must_use]
    pub const fn horizontal(self) -> Option<Horizontal> {
        match self {
            BombDirection::R | BombDirection::UR | BombDirection::DR => Some(Horizontal::Right),
            BombDirection::L | BombDirection::UL | BombDirection::DL => Some(Horizontal::Left),
            BombDirection::U | BombDirection::D => None,
        }
    }

    /// Rebuild a direction from its components. `None` when both are absent,
    /// which is the "found" case rather than a direction.
    #[must_use]
    pub const fn from_parts(
        vertical: Option<Vertical>,
        horizontal: Option<Horizontal>,
    ) -> Option<Self> {
        match (vertical, horizontal) {
            (Some(Vertical::Up), None) => Some(BombDirection::U),
            (Some(Vertical::Up), Some(Horizontal::Right)) => Some(BombDirection::UR),
            (None, Some(Horizontal::Right)) => Some(BombDirection::R),
            (Some(Vertical::Down), Some(Horizontal::Right)) => Some(BombDirection::DR),
            (Some(Vertical::Down), None) => Some(BombDirection::D),
            (Some(Vertical::Down), Some(Horizontal::Left)) => Some(BombDirection::DL),
            (None, Some(Horizontal::Left)) => Some(BombDirection::L),
            (Some(Vertical::Up), Some(Horizontal::Left)) => Some(BombDirection::UL),
            (None, None) => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BombDirection::U => "U",
            BombDirection::UR => "UR",
            BombDirection::R => "R",
            BombDirection::DR => "DR",
            BombDirection::D => "D",
            BombDirection::DL => "DL",
            BombDirection::L => "L",
            BombDirection::UL => "UL",
        }
    }
}

/// One turn's worth of information from the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The previous probe is the bomb.
    Found,
    Toward(BombDirection),
}

impl Feedback {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Feedback::Found => "FOUND",
            Feedback::Toward(direction) => direction.as_str(),
        }
    }

    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Feedback::Found)
    }
}

impl From<BombDirection> for Feedback {
    fn from(direction: BombDirection) -> Self {
        Feedback::Toward(direction)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback token is empty")]
    Empty,
    #[error("unknown feedback token {0:?}")]
    Unknown(String),
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(FeedbackParseError::Empty);
        }
        if token.eq_ignore_ascii_case("FOUND") {
            return Ok(Feedback::Found);
        }
        BombDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(token))
            .map(Feedback::Toward)
            .ok_or_else(|| FeedbackParseError::Unknown(token.to_string()))
    }
}
