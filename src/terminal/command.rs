use crate::*;
use clap::Parser;

/// One line of script input.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(no_binary_name = true)]
pub enum Command {
    #[command(about = "Overwrite a field of a seat (name, buyin, chips, losses)")]
    Set {
        #[arg(required = true)]
        seat: Seat,
        #[arg(required = true, value_parser = field)]
        field: Field,
        /// Rest of the line after the field, untouched.
        #[arg(skip)]
        value: String,
    },
    #[command(about = "Record an all-in loss for a seat", alias = "bust")]
    Lose {
        #[arg(required = true)]
        seat: Seat,
    },
    #[command(about = "Take back an all-in loss from a seat", alias = "unbust")]
    Forgive {
        #[arg(required = true)]
        seat: Seat,
    },
    #[command(about = "Print the standings", alias = "ls")]
    Show,
    #[command(about = "Print the standings as JSON")]
    Export,
    #[command(about = "Stop reading commands", alias = "exit")]
    Quit,
}

/// Only the `set <seat> <field>` head of a set line goes through clap; the
/// value is whatever follows, so names keep their spacing and leading dashes.
impl TryFrom<&str> for Command {
    type Error = clap::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        match line.split_whitespace().next() {
            Some("set") => {
                let (head, value) = split(line, 3);
                match Self::try_parse_from(head.split_whitespace())? {
                    Self::Set { seat, field, .. } => Ok(Self::Set {
                        seat,
                        field,
                        value: value.to_string(),
                    }),
                    other => Ok(other),
                }
            }
            _ => Self::try_parse_from(line.split_whitespace()),
        }
    }
}

/// Splits after the first `n` words. The remainder loses only the single
/// separator that ended the last word.
fn split(line: &str, n: usize) -> (&str, &str) {
    let mut end = 0;
    for _ in 0..n {
        let rest = &line[end..];
        let word = rest.trim_start();
        end += rest.len() - word.len();
        end += word.find(char::is_whitespace).unwrap_or(word.len());
    }
    let rest = &line[end..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => (&line[..end], chars.as_str()),
        _ => (&line[..end], rest),
    }
}

fn field(s: &str) -> Result<Field, String> {
    Field::try_from(s)
}

/// Result of running a [`Command`] against the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Seat(Player),
    Ignored(Seat),
    Table(Standings, Totals),
    Export(String),
    Quit,
}

impl Command {
    pub fn apply(self, roster: &mut Roster) -> anyhow::Result<Reply> {
        let reply = match self {
            Self::Set { seat, field, value } => roster
                .update_field(seat, field, &value)
                .cloned()
                .map_or(Reply::Ignored(seat), Reply::Seat),
            Self::Lose { seat } => roster
                .adjust_all_in_losses(seat, Delta::Increment)
                .cloned()
                .map_or(Reply::Ignored(seat), Reply::Seat),
            Self::Forgive { seat } => roster
                .adjust_all_in_losses(seat, Delta::Decrement)
                .cloned()
                .map_or(Reply::Ignored(seat), Reply::Seat),
            Self::Show => Reply::Table(roster.standings(), roster.totals()),
            Self::Export => Reply::Export(roster.standings().json()?),
            Self::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seat(player) => write!(f, "{}", player),
            Self::Ignored(seat) => write!(f, "no seat {}", seat),
            Self::Table(standings, totals) => write!(f, "{}{}", standings, totals),
            Self::Export(json) => write!(f, "{}", json),
            Self::Quit => Ok(()),
        }
    }
}
