use super::*;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::Points;
use wgr_core::Unique;

/// The point transfer owed by a finished game.
///
/// The winner's card is the stake: an attacker win moves the attacker's
/// card value from defender to attacker, a defender win moves the
/// defender's card value the other way, and a draw moves nothing.
/// Always zero-sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    attacker: Points,
    defender: Points,
}

impl Settlement {
    /// Settles a decided game. `None` while the outcome is pending.
    pub fn new(outcome: Outcome, attacker: Card, defender: Card) -> Option<Self> {
        let stake = |c: Card| u8::from(c) as Points;
        match outcome {
            Outcome::Pending => None,
            Outcome::Draw => Some(Self::from((0, 0))),
            Outcome::AttackerWin => Some(Self::from((stake(attacker), -stake(attacker)))),
            Outcome::DefenderWin => Some(Self::from((-stake(defender), stake(defender)))),
        }
    }
    /// Points gained (or lost, if negative) by the attacker.
    pub fn attacker(&self) -> Points {
        self.attacker
    }
    /// Points gained (or lost, if negative) by the defender.
    pub fn defender(&self) -> Points {
        self.defender
    }
    /// The two ledger rows this settlement writes.
    pub fn entries(&self, game: &Game) -> [Entry; 2] {
        [
            Entry::new(game.id(), game.attacker(), self.attacker),
            Entry::new(game.id(), game.defender(), self.defender),
        ]
    }
}

impl From<(Points, Points)> for Settlement {
    fn from((attacker, defender): (Points, Points)) -> Self {
        Self { attacker, defender }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "attacker {:+} / defender {:+}", self.attacker, self.defender)
    }
}

/// One member's share of one game's settlement.
///
/// Balances are sums of these; a game contributes at most one entry
/// per member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    game: ID<Game>,
    member: ID<Member>,
    delta: Points,
}

impl Entry {
    pub fn new(game: ID<Game>, member: ID<Member>, delta: Points) -> Self {
        Self {
            game,
            member,
            delta,
        }
    }
    pub fn game(&self) -> ID<Game> {
        self.game
    }
    pub fn member(&self) -> ID<Member> {
        self.member
    }
    pub fn delta(&self) -> Points {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(n: u8) -> Card {
        Card::try_from(n).unwrap()
    }

    #[test]
    fn attacker_win_moves_attacker_card() {
        let s = Settlement::new(Outcome::AttackerWin, card(7), card(3)).unwrap();
        assert!(s.attacker() == 7);
        assert!(s.defender() == -7);
    }

    #[test]
    fn defender_win_moves_defender_card() {
        let s = Settlement::new(Outcome::DefenderWin, card(2), card(9)).unwrap();
        assert!(s.attacker() == -9);
        assert!(s.defender() == 9);
    }

    #[test]
    fn draw_moves_nothing() {
        let s = Settlement::new(Outcome::Draw, card(5), card(5)).unwrap();
        assert!(s == Settlement::from((0, 0)));
    }

    #[test]
    fn pending_owes_nothing() {
        assert!(Settlement::new(Outcome::Pending, card(5), card(6)).is_none());
    }

    #[test]
    fn always_zero_sum() {
        let outcomes = [Outcome::AttackerWin, Outcome::DefenderWin, Outcome::Draw];
        for outcome in outcomes {
            for a in Card::all() {
                for d in Card::all() {
                    let s = Settlement::new(outcome, a, d).unwrap();
                    assert!(s.attacker() + s.defender() == 0);
                }
            }
        }
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use wgr_database::*;

    /// One row per (game, member); the primary key is what makes a second
    /// settlement of the same game impossible.
    impl Schema for Entry {
        fn name() -> &'static str {
            LEDGER
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                LEDGER,
                " (
                    game_id     UUID NOT NULL REFERENCES ",
                GAMES,
                "(id),
                    member_id   UUID NOT NULL REFERENCES ",
                USERS,
                "(id),
                    delta       BIGINT NOT NULL,
                    PRIMARY KEY (game_id, member_id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_ledger_member ON ",
                LEDGER,
                " (member_id);"
            )
        }
    }
}
