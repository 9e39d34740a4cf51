use wgr_core::ID;
use wgr_gameplay::Game;
use wgr_gameplay::GameError;

/// Why a game request produced no state change.
#[derive(Debug)]
pub enum Refusal {
    /// Missing or malformed input; the player should fix and resubmit.
    BadInput(String),
    /// The game or member does not exist.
    NotFound(&'static str),
    /// The actor may not view this game.
    Forbidden,
    /// The actor may not act on this game now; send them to its detail.
    Redirect(ID<Game>),
    /// Another request changed the game first.
    Conflict,
    /// The game names a winning condition the server no longer offers.
    Retired(String),
    /// Storage failed.
    Internal(anyhow::Error),
}

impl Refusal {
    /// Maps a rules rejection for `game` onto the request surface.
    pub fn from_game(game: ID<Game>, error: GameError) -> Self {
        match error {
            GameError::Unauthorized | GameError::AlreadyCountered | GameError::AlreadySettled => {
                Self::Redirect(game)
            }
            GameError::UnknownCondition(code) => Self::Retired(code),
            other => Self::BadInput(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for Refusal {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e)
    }
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadInput(s) => write!(f, "{}", s),
            Self::NotFound(what) => write!(f, "{} not found", what),
            Self::Forbidden => write!(f, "not a participant in this game"),
            Self::Redirect(id) => write!(f, "see game {}", id),
            Self::Conflict => write!(f, "game was changed by another request"),
            Self::Retired(code) => write!(
                f,
                "winning condition {} is no longer offered; the attacker may cancel this game",
                code
            ),
            Self::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl std::error::Error for Refusal {}
