use crate::*;

/// Change notification emitted by the [`Roster`] after a mutation lands.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Updated { seat: Seat, field: Field },
    Adjusted { seat: Seat, losses: Losses },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Updated { seat, field } => write!(f, "seat {} updated {}", seat, field),
            Self::Adjusted { seat, losses } => write!(f, "seat {} all-in losses {}", seat, losses),
        }
    }
}

/// Subscriber to roster changes.
pub trait Observer {
    fn notify(&mut self, event: &Event);
}

impl<F> Observer for F
where
    F: FnMut(&Event),
{
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}
