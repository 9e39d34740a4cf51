/// Reasons a game operation is refused.
///
/// None of these are fatal: each leaves the game exactly as it was, and
/// the player may resubmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidCard(i64),
    SelfPlay,
    Unauthorized,
    AlreadyCountered,
    AlreadySettled,
    Unfinished,
    UnknownCondition(String),
    InvalidCondition(String),
    NoConditions,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(n) => write!(f, "invalid card value: {}", n),
            Self::SelfPlay => write!(f, "cannot challenge yourself"),
            Self::Unauthorized => write!(f, "not a participant allowed to act"),
            Self::AlreadyCountered => write!(f, "game has already been countered"),
            Self::AlreadySettled => write!(f, "game has already been settled"),
            Self::Unfinished => write!(f, "game has no result yet"),
            Self::UnknownCondition(s) => write!(f, "unknown winning condition: {}", s),
            Self::InvalidCondition(s) => write!(
                f,
                "winning condition code must be 1 to {} characters: {:?}",
                wgr_core::CONDITION_LEN,
                s
            ),
            Self::NoConditions => write!(f, "no winning conditions configured"),
        }
    }
}

impl std::error::Error for GameError {}
