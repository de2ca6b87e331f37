use crate::*;

/// The nine seats at the table plus anyone watching them.
///
/// Mutations are copy-on-write: the edited record is rebuilt and the whole
/// collection replaced, so readers never see a half-applied update. Unknown
/// seats are ignored rather than reported.
pub struct Roster {
    players: Vec<Player>,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: (1..=SEATS as Seat).map(Player::from).collect(),
            observers: Vec::new(),
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }
    /// Seats the given names in order. Extra names beyond [`SEATS`] are dropped.
    pub fn named<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut roster = Self::new();
        for (seat, name) in (1..=SEATS as Seat).zip(names) {
            roster.update_field(seat, Field::Name, &name);
        }
        roster
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// All seats in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn get(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat() == seat)
    }
    /// Current ranking, derived fresh on every call.
    pub fn standings(&self) -> Standings {
        Standings::from(self.players())
    }
    pub fn totals(&self) -> Totals {
        Totals::from(self.players())
    }

    /// Overwrites one field of a seat from raw operator text and rescores it.
    pub fn update_field(&mut self, seat: Seat, field: Field, raw: &str) -> Option<&Player> {
        self.replace(seat, |p| p.with(field, raw))?;
        self.broadcast(Event::Updated { seat, field });
        self.get(seat)
    }
    /// Steps a seat's all-in loss counter, never below zero, and rescores it.
    pub fn adjust_all_in_losses(&mut self, seat: Seat, delta: Delta) -> Option<&Player> {
        let losses = self.replace(seat, |p| p.adjusted(delta))?.losses();
        self.broadcast(Event::Adjusted { seat, losses });
        self.get(seat)
    }

    fn replace<F>(&mut self, seat: Seat, edit: F) -> Option<&Player>
    where
        F: Fn(&Player) -> Player,
    {
        if self.get(seat).is_none() {
            log::debug!("ignoring update for unknown seat {}", seat);
            return None;
        }
        self.players = self
            .players
            .iter()
            .map(|p| match p.seat() == seat {
                true => edit(p),
                false => p.clone(),
            })
            .collect();
        self.get(seat)
    }

    fn broadcast(&mut self, event: Event) {
        log::debug!("{}", event);
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl Arbitrary for Roster {
    fn random() -> Self {
        let mut roster = Self::new();
        roster.players = roster
            .players
            .iter()
            .map(|p| {
                let random = Player::random();
                p.with(Field::BuyIn, &random.buyin().to_string())
                    .with(Field::Chips, &random.chips().to_string())
                    .with(Field::Losses, &random.losses().to_string())
            })
            .collect();
        roster
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("players", &self.players)
            .field("observers", &self.observers.len())
            .finish()
    }
}
