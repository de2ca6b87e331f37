use serde::Serialize;

/// Editable column of a seat's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    BuyIn,
    Chips,
    Losses,
}

impl Field {
    pub const fn numeric(&self) -> bool {
        !matches!(self, Self::Name)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::BuyIn => "Initial BI",
            Self::Chips => "Current Chips",
            Self::Losses => "All-in Losses",
        }
    }
}

/// str injection, accepting both short and long column names
impl TryFrom<&str> for Field {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "buyin" | "bi" | "initialbi" => Ok(Self::BuyIn),
            "chips" | "stack" | "currentchips" => Ok(Self::Chips),
            "losses" | "allin" | "allinlosses" => Ok(Self::Losses),
            _ => Err(format!("unknown field: {}", s)),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
