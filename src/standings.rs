use crate::*;
use colored::Colorize;
use serde::Serialize;

/// Seats ranked by score, best first.
///
/// A projection of the roster taken at construction time. Equal scores keep
/// seat order since the sort is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings(Vec<Player>);

impl From<&[Player]> for Standings {
    fn from(players: &[Player]) -> Self {
        let mut ranked = players.to_vec();
        ranked.sort_by(|a, b| b.score().points().total_cmp(&a.score().points()));
        Self(ranked)
    }
}

impl Standings {
    pub fn players(&self) -> &[Player] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    /// Flattened rows for export.
    pub fn rows(&self) -> Vec<Row> {
        self.iter()
            .enumerate()
            .map(|(i, p)| Row::from((i + 1, p)))
            .collect()
    }
    pub fn json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows())
    }
}

/// One exported line of the standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub rank: usize,
    pub seat: Seat,
    pub name: String,
    pub buyin: Chips,
    pub chips: Chips,
    pub profit: Profit,
    pub losses: Losses,
    pub score: Score,
}

impl From<(usize, &Player)> for Row {
    fn from((rank, player): (usize, &Player)) -> Self {
        Self {
            rank,
            seat: player.seat(),
            name: player.name().to_string(),
            buyin: player.buyin(),
            chips: player.chips(),
            profit: player.profit(),
            losses: player.losses(),
            score: player.score(),
        }
    }
}

impl Row {
    /// Column titles aligned with the row layout.
    pub fn header() -> String {
        format!(
            "{:>3}  {:<20} {:>12} {:>14} {:>12} {:>8} {:>10}",
            "#", "Name", "Initial BI", "Current Chips", "Profit", "All-in", "Score"
        )
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // an unset buy-in shows as an empty cell
        let buyin = match self.buyin {
            0 => String::new(),
            n => n.to_string(),
        };
        let profit = format!("{:>12}", grouped(self.profit));
        let profit = match self.profit >= 0 {
            true => profit.green(),
            false => profit.red(),
        };
        write!(
            f,
            "{:>3}  {:<20} {:>12} {:>14} {} {:>8} {:>10}",
            self.rank,
            self.name,
            buyin,
            self.chips,
            profit,
            self.losses,
            self.score,
        )
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", Row::header().bold())?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Thousands-separated integer, e.g. `-1,234,567`.
pub fn grouped(n: Profit) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
