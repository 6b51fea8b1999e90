use thiserror::Error;

use crate::Axis;

/// Rejected construction input.
///
/// Raised by every smart constructor in this crate. Bootstrap code maps it to
/// the "invalid argument" diagnostic and aborts before any probe is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("building width {value} is outside [{min}, {max}]")]
    Width { value: i64, min: i32, max: i32 },
    #[error("building height {value} is outside [{min}, {max}]")]
    Height { value: i64, min: i32, max: i32 },
    #[error("turn budget {value} is outside [{min}, {max}]")]
    Turns { value: i64, min: u32, max: u32 },
    #[error("start {axis} coordinate {value} is outside [0, {limit})")]
    Start { axis: Axis, value: i64, limit: i32 },
    #[error("interval [{min}, {max}] is empty")]
    EmptyInterval { min: i32, max: i32 },
    #[error("expected an integer for {field}, got {token:?}")]
    NotAnInteger { field: &'static str, token: String },
    #[error("missing value for {field}")]
    Missing { field: &'static str },
}
