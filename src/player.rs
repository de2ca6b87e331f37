use crate::*;
use serde::Serialize;

/// One seat's session record.
///
/// The score is derived, so it has no setter: every edit goes through
/// [`Player::with`] or [`Player::adjusted`], which return a rescored copy.
///
/// # Fields
///
/// - `seat` — Stable identifier, 1 through [`SEATS`]
/// - `name` — Free text display name
/// - `buyin` — Chips initially purchased
/// - `chips` — Current stack
/// - `losses` — All-in hands lost
/// - `score` — Derived from the three counts above
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    seat: Seat,
    name: String,
    buyin: Chips,
    chips: Chips,
    losses: Losses,
    score: Score,
}

impl From<Seat> for Player {
    fn from(seat: Seat) -> Self {
        Self {
            seat,
            name: format!("Player {}", seat),
            buyin: 0,
            chips: 0,
            losses: 0,
            score: Score::default(),
        }
        .rescored()
    }
}

impl Player {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Chips initially purchased.
    pub fn buyin(&self) -> Chips {
        self.buyin
    }
    /// Current stack.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn losses(&self) -> Losses {
        self.losses
    }
    pub fn score(&self) -> Score {
        self.score
    }
    /// Net profit (negative for losses).
    pub fn profit(&self) -> Profit {
        Profit::from(self.chips) - Profit::from(self.buyin)
    }

    /// Copy with one field overwritten from raw operator text.
    pub fn with(&self, field: Field, raw: &str) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = raw.to_string(),
            Field::BuyIn => next.buyin = parse::chips(raw),
            Field::Chips => next.chips = parse::chips(raw),
            Field::Losses => next.losses = parse::losses(raw),
        }
        next.rescored()
    }
    /// Copy with the all-in loss counter stepped.
    pub fn adjusted(&self, delta: Delta) -> Self {
        let mut next = self.clone();
        next.losses = delta.apply(self.losses);
        next.rescored()
    }

    fn rescored(mut self) -> Self {
        self.score = Score::from(&self);
        self
    }
}

impl Arbitrary for Player {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self {
            seat: rng.random_range(1..=SEATS as Seat),
            name: String::from("random"),
            buyin: rng.random_range(0..=50_000),
            chips: rng.random_range(0..=100_000),
            losses: rng.random_range(0..=5),
            score: Score::default(),
        }
        .rescored()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({} -> {}, {} all-in) {:.2}",
            self.seat,
            self.name,
            self.buyin,
            self.chips,
            self.losses,
            self.score.points()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_seat_is_empty() {
        let player = Player::from(4);
        assert_eq!(player.seat(), 4);
        assert_eq!(player.name(), "Player 4");
        assert_eq!(player.buyin(), 0);
        assert_eq!(player.chips(), 0);
        assert_eq!(player.losses(), 0);
        assert_eq!(player.score().points(), 0.);
    }

    #[test]
    fn edits_rescore() {
        let player = Player::from(1)
            .with(Field::BuyIn, "10000")
            .with(Field::Chips, "15000");
        assert_eq!(player.profit(), 5_000);
        assert_eq!(player.score(), Score::from((15_000, 10_000, 0)));
        let player = player.with(Field::Chips, "4000").adjusted(Delta::Increment);
        assert_eq!(player.profit(), -6_000);
        assert_eq!(player.score(), Score::from((4_000, 10_000, 1)));
    }

    #[test]
    fn edits_leave_original_untouched() {
        let player = Player::from(2);
        let edited = player.with(Field::BuyIn, "500");
        assert_eq!(player.buyin(), 0);
        assert_eq!(edited.buyin(), 500);
        assert_eq!(edited.seat(), player.seat());
    }

    #[test]
    fn name_is_verbatim() {
        let player = Player::from(3).with(Field::Name, "  007 ");
        assert_eq!(player.name(), "  007 ");
        assert_eq!(player.score(), Player::from(3).score());
    }

    #[test]
    fn losses_floor_at_zero() {
        let player = Player::from(5).adjusted(Delta::Decrement);
        assert_eq!(player.losses(), 0);
        let player = player.with(Field::Losses, "-3");
        assert_eq!(player.losses(), 0);
    }

    #[test]
    fn random_is_consistent() {
        for _ in 0..128 {
            let player = Player::random();
            assert_eq!(player.score(), Score::from(&player));
        }
    }
}
