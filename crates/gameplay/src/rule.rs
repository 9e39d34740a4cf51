use super::*;
use std::cmp::Ordering;

/// How two revealed cards are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rule {
    /// The higher card wins.
    Higher,
    /// The lower card wins.
    Lower,
    /// The card nearer to the target wins.
    Closest(u8),
}

impl Rule {
    /// Orders the attacker's card against the defender's.
    /// `Greater` means the attacker's card is the better one.
    pub fn compare(&self, attacker: Card, defender: Card) -> Ordering {
        match self {
            Self::Higher => attacker.cmp(&defender),
            Self::Lower => defender.cmp(&attacker),
            Self::Closest(n) => defender.distance(*n).cmp(&attacker.distance(*n)),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Higher => write!(f, "higher wins"),
            Self::Lower => write!(f, "lower wins"),
            Self::Closest(n) => write!(f, "closest to {} wins", n),
        }
    }
}
