use crate::*;
use serde::Serialize;

/// One step of the all-in loss counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Delta {
    Increment,
    Decrement,
}

impl Delta {
    /// Applies the step, flooring at zero.
    pub fn apply(&self, losses: Losses) -> Losses {
        match self {
            Self::Increment => losses.saturating_add(1),
            Self::Decrement => losses.saturating_sub(1),
        }
    }
}

/// i8 injection onto {-1, +1}
impl From<Delta> for i8 {
    fn from(delta: Delta) -> i8 {
        match delta {
            Delta::Increment => 1,
            Delta::Decrement => -1,
        }
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:+}", i8::from(*self))
    }
}
