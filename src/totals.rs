use crate::*;
use serde::Serialize;

/// Table-wide sums. Chips neither enter nor leave a cash table mid-session,
/// so a non-zero net profit means a stack or buy-in was entered wrong.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub buyin: u64,
    pub chips: u64,
    pub losses: u64,
}

impl Totals {
    pub fn profit(&self) -> Profit {
        self.chips as Profit - self.buyin as Profit
    }
    pub fn balanced(&self) -> bool {
        self.profit() == 0
    }
}

impl From<&[Player]> for Totals {
    fn from(players: &[Player]) -> Self {
        players.iter().fold(Self::default(), |totals, p| Self {
            buyin: totals.buyin + u64::from(p.buyin()),
            chips: totals.chips + u64::from(p.chips()),
            losses: totals.losses + u64::from(p.losses()),
        })
    }
}

impl std::fmt::Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.balanced() {
            true => write!(f, "{} in play, balanced", grouped(self.chips as Profit)),
            false => write!(
                f,
                "{} bought in, {} in play, off by {}",
                grouped(self.buyin as Profit),
                grouped(self.chips as Profit),
                grouped(self.profit())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_each_column() {
        let players = [
            Player::from(1).with(Field::BuyIn, "10000").with(Field::Chips, "15000"),
            Player::from(2).with(Field::BuyIn, "10000").with(Field::Chips, "4000"),
            Player::from(3).with(Field::Losses, "2"),
        ];
        let totals = Totals::from(&players[..]);
        assert_eq!(totals.buyin, 20_000);
        assert_eq!(totals.chips, 19_000);
        assert_eq!(totals.losses, 2);
        assert_eq!(totals.profit(), -1_000);
        assert!(!totals.balanced());
    }

    #[test]
    fn empty_table_balances() {
        let roster = Roster::new();
        assert!(roster.totals().balanced());
        assert_eq!(roster.totals().to_string(), "0 in play, balanced");
    }

    #[test]
    fn reports_imbalance() {
        let totals = Totals {
            buyin: 20_000,
            chips: 19_000,
            losses: 0,
        };
        assert_eq!(
            totals.to_string(),
            "20,000 bought in, 19,000 in play, off by -1,000"
        );
    }
}
