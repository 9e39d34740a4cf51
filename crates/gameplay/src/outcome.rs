/// The result of a game, from the game's point of view.
///
/// `Pending` is explicit rather than an empty string so that a finished
/// game can never be mistaken for an unfinished one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Pending,
    AttackerWin,
    DefenderWin,
    Draw,
}

impl Outcome {
    pub fn finished(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// str isomorphism, matching the stored column values
impl From<Outcome> for &'static str {
    fn from(o: Outcome) -> &'static str {
        match o {
            Outcome::Pending => "PENDING",
            Outcome::AttackerWin => "ATTACKER_WIN",
            Outcome::DefenderWin => "DEFENDER_WIN",
            Outcome::Draw => "DRAW",
        }
    }
}
impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "PENDING" => Ok(Self::Pending),
            "ATTACKER_WIN" => Ok(Self::AttackerWin),
            "DEFENDER_WIN" => Ok(Self::DefenderWin),
            "DRAW" => Ok(Self::Draw),
            other => Err(format!("unknown outcome {}", other)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let outcomes = [
            Outcome::Pending,
            Outcome::AttackerWin,
            Outcome::DefenderWin,
            Outcome::Draw,
        ];
        assert!(outcomes
            .into_iter()
            .all(|o| Outcome::try_from(<&'static str>::from(o)) == Ok(o)));
    }

    #[test]
    fn only_pending_is_unfinished() {
        assert!(!Outcome::Pending.finished());
        assert!(Outcome::Draw.finished());
        assert!(Outcome::AttackerWin.finished());
        assert!(Outcome::DefenderWin.finished());
    }
}
