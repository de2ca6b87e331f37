use crate::*;
use colored::Colorize;
use serde::Serialize;

/// Ranking metric for a seat.
///
/// Winners earn up to [`WIN_SCALE`] points as their profit grows relative
/// to the buy-in; losers drop towards -[`LOSS_SCALE`]. Each all-in loss
/// costs a flat [`ALL_IN_PENALTY`] on top.
///
/// An empty seat (no buy-in, no chips) has a zero ratio rather than 0/0.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(Points);

impl Score {
    pub fn points(&self) -> Points {
        self.0
    }
    pub fn is_positive(&self) -> bool {
        self.0 >= 0.
    }
    /// Scaled share of |profit| in |profit| + buy-in.
    fn ratio(scale: Points, delta: u64, buyin: Chips) -> Points {
        match delta + u64::from(buyin) {
            0 => 0.,
            denominator => scale * delta as Points / denominator as Points,
        }
    }
}

/// (chips, buyin, losses)
impl From<(Chips, Chips, Losses)> for Score {
    fn from((chips, buyin, losses): (Chips, Chips, Losses)) -> Self {
        let profit = Profit::from(chips) - Profit::from(buyin);
        let penalty = Points::from(losses) * ALL_IN_PENALTY;
        let ratio = if profit >= 0 {
            Self::ratio(WIN_SCALE, profit.unsigned_abs(), buyin)
        } else {
            -Self::ratio(LOSS_SCALE, profit.unsigned_abs(), buyin)
        };
        Self(ratio - penalty)
    }
}

impl From<&Player> for Score {
    fn from(player: &Player) -> Self {
        Self::from((player.chips(), player.buyin(), player.losses()))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = format!("{:.2}", self.0);
        let text = match f.width() {
            Some(width) => format!("{:>width$}", text, width = width),
            None => text,
        };
        match self.is_positive() {
            true => write!(f, "{}", text.green().bold()),
            false => write!(f, "{}", text.red().bold()),
        }
    }
}
