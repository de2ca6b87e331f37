use crate::*;
use anyhow::Context;
use dialoguer::Input;
use dialoguer::Select;
use std::io::BufRead;

/// Terminal front-end over a [`Roster`].
///
/// Interactive mode shows the standings as a menu, one entry per seat, and
/// drills into a row menu for edits. Script mode reads [`Command`] lines.
pub struct Board {
    roster: Roster,
    config: Config,
}

impl From<Config> for Board {
    fn from(config: Config) -> Self {
        if config.names.len() > SEATS {
            log::warn!("only the first {} names are seated", SEATS);
        }
        let mut roster = Roster::named(config.names.clone());
        roster.subscribe(|event: &Event| log::info!("{}", event));
        Self { roster, config }
    }
}

impl Board {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("opening board");
        match self.config.script {
            true => self.script(std::io::stdin().lock())?,
            false => self.interactive()?,
        }
        if self.config.json {
            println!("{}", self.roster.standings().json()?);
        }
        log::info!("closing board");
        Ok(())
    }

    /// Runs commands line by line. Bad lines are reported and skipped.
    pub fn script<R>(&mut self, input: R) -> anyhow::Result<()>
    where
        R: BufRead,
    {
        for line in input.lines() {
            let line = line.context("read command")?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::try_from(line.as_str()) {
                Err(e) => eprintln!("{}", e),
                Ok(command) => match command.apply(&mut self.roster)? {
                    Reply::Quit => break,
                    reply => println!("{}", reply),
                },
            }
        }
        Ok(())
    }

    fn interactive(&mut self) -> anyhow::Result<()> {
        loop {
            let standings = self.roster.standings();
            println!("\n{}", self.roster.totals());
            let choice = Select::new()
                .with_prompt(Row::header())
                .report(false)
                .items(&Pick::labels(&standings))
                .default(0)
                .interact_opt()?;
            match choice.map(|i| Pick::resolve(&standings, i)) {
                None | Some(Pick::Quit) => break,
                Some(Pick::Export) => println!("{}", standings.json()?),
                Some(Pick::Seat(seat)) => self.edit(seat)?,
            }
        }
        Ok(())
    }

    fn edit(&mut self, seat: Seat) -> anyhow::Result<()> {
        loop {
            let Some(player) = self.roster.get(seat) else {
                return Ok(());
            };
            let labels = Edit::all().map(|e| e.label());
            let choice = Select::new()
                .with_prompt(format!("{}", player))
                .report(false)
                .items(&labels)
                .default(0)
                .interact_opt()?;
            let edit = match choice {
                None => Edit::Back,
                Some(i) => Edit::all()[i],
            };
            if let Some(field) = edit.field() {
                let raw = Self::prompt(player, field)?;
                self.roster.update_field(seat, field, &raw);
            }
            if let Some(delta) = edit.delta() {
                self.roster.adjust_all_in_losses(seat, delta);
            }
            if edit == Edit::Back {
                return Ok(());
            }
        }
    }

    fn prompt(player: &Player, field: Field) -> anyhow::Result<String> {
        let current = match field {
            Field::Name => player.name().to_string(),
            Field::BuyIn => player.buyin().to_string(),
            Field::Chips => player.chips().to_string(),
            Field::Losses => player.losses().to_string(),
        };
        // numeric cells start empty rather than showing a bare 0
        let current = match (field.numeric(), current.as_str()) {
            (true, "0") => String::new(),
            _ => current,
        };
        Input::<String>::new()
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .context("read input")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn board(args: &[&str]) -> Board {
        let args = std::iter::once("board").chain(args.iter().copied());
        Board::from(Config::try_parse_from(args).expect("valid args"))
    }

    #[test]
    fn seats_configured_names() {
        let board = board(&["--name", "Mai", "--name", "Tuan"]);
        assert_eq!(board.roster().get(1).map(Player::name), Some("Mai"));
        assert_eq!(board.roster().get(2).map(Player::name), Some("Tuan"));
        assert_eq!(board.roster().get(3).map(Player::name), Some("Player 3"));
    }

    #[test]
    fn script_applies_commands() {
        let ref mut board = board(&[]);
        let input = "set 1 buyin 10000\nset 1 chips 15000\n\nnonsense\nbust 2\nshow\n";
        board.script(input.as_bytes()).expect("script runs");
        let standings = board.roster().standings();
        assert_eq!(standings.players().first().map(Player::seat), Some(1));
        assert_eq!(standings.players().last().map(Player::seat), Some(2));
        assert_eq!(board.roster().get(2).map(Player::losses), Some(1));
    }

    #[test]
    fn script_stops_at_quit() {
        let ref mut board = board(&[]);
        board
            .script("bust 3\nquit\nbust 3\n".as_bytes())
            .expect("script runs");
        assert_eq!(board.roster().get(3).map(Player::losses), Some(1));
    }
}
