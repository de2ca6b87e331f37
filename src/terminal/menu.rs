use crate::*;

/// Entry picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Seat(Seat),
    Export,
    Quit,
}

impl Pick {
    /// Menu entries follow the standings, then the two trailing actions.
    pub fn labels(standings: &Standings) -> Vec<String> {
        standings
            .rows()
            .iter()
            .map(Row::to_string)
            .chain(["Export JSON", "Quit"].map(String::from))
            .collect()
    }
    pub fn resolve(standings: &Standings, index: usize) -> Self {
        match standings.players().get(index) {
            Some(player) => Self::Seat(player.seat()),
            None if index == standings.players().len() => Self::Export,
            None => Self::Quit,
        }
    }
}

/// Entry picked from a seat's row menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Rename,
    BuyIn,
    Chips,
    Lose,
    Forgive,
    Back,
}

impl Edit {
    pub const fn all() -> [Self; 6] {
        [
            Self::Rename,
            Self::BuyIn,
            Self::Chips,
            Self::Lose,
            Self::Forgive,
            Self::Back,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::BuyIn => "Initial BI",
            Self::Chips => "Current Chips",
            Self::Lose => "All-in +",
            Self::Forgive => "All-in -",
            Self::Back => "Back",
        }
    }
    /// Field edited through a text prompt, if any.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Rename => Some(Field::Name),
            Self::BuyIn => Some(Field::BuyIn),
            Self::Chips => Some(Field::Chips),
            _ => None,
        }
    }
    /// Counter step applied directly, if any.
    pub const fn delta(&self) -> Option<Delta> {
        match self {
            Self::Lose => Some(Delta::Increment),
            Self::Forgive => Some(Delta::Decrement),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_entries() {
        let standings = Roster::new().standings();
        let labels = Pick::labels(&standings);
        assert_eq!(labels.len(), SEATS + 2);
        assert_eq!(labels[SEATS], "Export JSON");
        assert_eq!(labels[SEATS + 1], "Quit");
        assert_eq!(Pick::resolve(&standings, SEATS), Pick::Export);
        assert_eq!(Pick::resolve(&standings, SEATS + 1), Pick::Quit);
    }

    #[test]
    fn rows_follow_standings() {
        let ref mut roster = Roster::new();
        roster.update_field(6, Field::Chips, "500");
        let standings = roster.standings();
        assert_eq!(Pick::resolve(&standings, 0), Pick::Seat(6));
        assert_eq!(Pick::resolve(&standings, 1), Pick::Seat(1));
    }

    #[test]
    fn every_edit_does_one_thing() {
        for edit in Edit::all() {
            let actions = edit.field().is_some() as u8 + edit.delta().is_some() as u8;
            match edit {
                Edit::Back => assert_eq!(actions, 0),
                _ => assert_eq!(actions, 1),
            }
        }
    }
}
