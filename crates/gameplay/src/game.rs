use super::*;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::Unique;
use wgr_core::Version;

/// One wager between an attacker and a defender.
///
/// The attacker's card is fixed at creation. The defender's card, the
/// winning condition (if the attacker left it open), and the outcome are
/// all fixed together by [`Game::counter`], which also hands back the
/// settlement exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: ID<Self>,
    attacker: ID<Member>,
    defender: ID<Member>,
    attacker_card: Card,
    defender_card: Option<Card>,
    condition: Option<Condition>,
    outcome: Outcome,
    settled: bool,
    version: Version,
}

impl Game {
    /// Opens a challenge from `attacker` to `defender`.
    pub fn new(
        attacker: ID<Member>,
        defender: ID<Member>,
        card: Card,
        condition: Option<Condition>,
    ) -> Result<Self, GameError> {
        if attacker == defender {
            return Err(GameError::SelfPlay);
        }
        Ok(Self {
            id: ID::default(),
            attacker,
            defender,
            attacker_card: card,
            defender_card: None,
            condition,
            outcome: Outcome::Pending,
            settled: false,
            version: 0,
        })
    }

    /// Rebuilds a game from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn hydrate(
        id: ID<Self>,
        attacker: ID<Member>,
        defender: ID<Member>,
        attacker_card: Card,
        defender_card: Option<Card>,
        condition: Option<Condition>,
        outcome: Outcome,
        settled: bool,
        version: Version,
    ) -> Self {
        Self {
            id,
            attacker,
            defender,
            attacker_card,
            defender_card,
            condition,
            outcome,
            settled,
            version,
        }
    }

    pub fn attacker(&self) -> ID<Member> {
        self.attacker
    }
    pub fn defender(&self) -> ID<Member> {
        self.defender
    }
    pub fn attacker_card(&self) -> Card {
        self.attacker_card
    }
    pub fn defender_card(&self) -> Option<Card> {
        self.defender_card
    }
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn settled(&self) -> bool {
        self.settled
    }
    /// Write counter; storage accepts an update only against this value.
    pub fn version(&self) -> Version {
        self.version
    }
    pub fn involves(&self, member: ID<Member>) -> bool {
        member == self.attacker || member == self.defender
    }

    /// Games in storage are either waiting or countered; cancelled games
    /// are deleted rather than kept.
    pub fn phase(&self) -> Phase {
        match self.defender_card {
            None => Phase::Created,
            Some(_) => Phase::Countered,
        }
    }

    /// Checks that `actor` may withdraw this game.
    /// Only the attacker may, and only before the defender has played.
    pub fn cancel(&self, actor: ID<Member>) -> Result<Phase, GameError> {
        if actor != self.attacker {
            return Err(GameError::Unauthorized);
        }
        match self.phase() {
            Phase::Created => Ok(Phase::Cancelled),
            _ => Err(GameError::AlreadyCountered),
        }
    }

    /// Plays the defender's card, resolves the game, and settles it.
    ///
    /// All checks run before any field changes, so on error the game is
    /// untouched. An open condition is drawn from `conditions` with `rng`.
    pub fn counter<R: rand::Rng + ?Sized>(
        &mut self,
        actor: ID<Member>,
        card: Card,
        conditions: &Conditions,
        rng: &mut R,
    ) -> Result<Settlement, GameError> {
        if actor != self.defender {
            return Err(GameError::Unauthorized);
        }
        if self.phase() != Phase::Created {
            return Err(GameError::AlreadyCountered);
        }
        let condition = match self.condition.clone() {
            Some(condition) => condition,
            None => conditions.draw(rng)?.clone(),
        };
        let rule = conditions.rule(&condition)?;
        let outcome = determine(self.attacker_card, card, rule);
        self.defender_card = Some(card);
        self.condition = Some(condition);
        self.outcome = outcome;
        self.settle()
    }

    /// Hands out the settlement of a finished game, once.
    pub fn settle(&mut self) -> Result<Settlement, GameError> {
        if self.settled {
            return Err(GameError::AlreadySettled);
        }
        let settlement = self.settlement().ok_or(GameError::Unfinished)?;
        self.settled = true;
        Ok(settlement)
    }

    /// The transfer this game owes (or owed), without marking it paid.
    pub fn settlement(&self) -> Option<Settlement> {
        self.defender_card
            .and_then(|d| Settlement::new(self.outcome, self.attacker_card, d))
    }

    /// Records a successful write so the next one is checked against it.
    pub fn bump(&mut self) {
        self.version += 1;
    }

    /// The attacker's card is hidden from everyone but the attacker until
    /// the game is finished.
    pub fn revealed(&self, viewer: ID<Member>) -> Option<Card> {
        match viewer == self.attacker || self.outcome.finished() {
            true => Some(self.attacker_card),
            false => None,
        }
    }

    /// How the game looks to `viewer`. Outsiders see nothing of a game
    /// still in progress.
    pub fn status(&self, viewer: ID<Member>) -> Option<Status> {
        match self.outcome {
            Outcome::Pending if viewer == self.attacker => Some(Status::Waiting),
            Outcome::Pending if viewer == self.defender => Some(Status::Counterattack),
            Outcome::Pending => None,
            _ => Some(Status::Finished),
        }
    }

    /// Result of the game for one of its participants.
    pub fn verdict(&self, viewer: ID<Member>) -> Option<Verdict> {
        if !self.involves(viewer) {
            return None;
        }
        let attacking = viewer == self.attacker;
        Some(match self.outcome {
            Outcome::Pending => Verdict::Pending,
            Outcome::Draw => Verdict::Drew,
            Outcome::AttackerWin if attacking => Verdict::Won,
            Outcome::DefenderWin if !attacking => Verdict::Won,
            _ => Verdict::Lost,
        })
    }
}

impl Unique for Game {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.defender_card {
            None => write!(f, "{} [{}] vs ?", self.id, self.attacker_card),
            Some(d) => write!(
                f,
                "{} [{}] vs [{}] {}",
                self.id, self.attacker_card, d, self.outcome
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn card(n: u8) -> Card {
        Card::try_from(n).unwrap()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    fn game(attacker: u8, condition: Option<&str>) -> (Game, ID<Member>, ID<Member>) {
        let a = ID::default();
        let d = ID::default();
        let game = Game::new(a, d, card(attacker), condition.map(Condition::from)).unwrap();
        (game, a, d)
    }

    #[test]
    fn cannot_challenge_yourself() {
        let me = ID::default();
        assert!(Game::new(me, me, card(5), None) == Err(GameError::SelfPlay));
    }

    #[test]
    fn new_games_are_pending() {
        let (game, _, _) = game(4, None);
        assert!(game.phase() == Phase::Created);
        assert!(game.outcome() == Outcome::Pending);
        assert!(game.settlement().is_none());
        assert!(!game.settled());
    }

    #[test]
    fn seven_beats_three_under_high() {
        let (mut game, _, d) = game(7, Some("HIGH"));
        let s = game
            .counter(d, card(3), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.outcome() == Outcome::AttackerWin);
        assert!(game.phase() == Phase::Countered);
        assert!(s.attacker() == 7);
        assert!(s.defender() == -7);
    }

    #[test]
    fn open_condition_is_drawn_at_counter() {
        let (mut game, _, d) = game(6, None);
        let table = Conditions::default();
        game.counter(d, card(2), &table, &mut rng()).unwrap();
        assert!(game.condition().map_or(false, |c| table.contains(c)));
        assert!(game.outcome().finished());
    }

    #[test]
    fn only_the_defender_counters() {
        let (mut game, a, _) = game(6, Some("HIGH"));
        let before = game.clone();
        let result = game.counter(a, card(2), &Conditions::default(), &mut rng());
        assert!(result == Err(GameError::Unauthorized));
        assert!(game == before);
    }

    #[test]
    fn second_counter_is_rejected() {
        let (mut game, _, d) = game(6, Some("LOW"));
        let table = Conditions::default();
        game.counter(d, card(2), &table, &mut rng()).unwrap();
        let after = game.clone();
        let again = game.counter(d, card(9), &table, &mut rng());
        assert!(again == Err(GameError::AlreadyCountered));
        assert!(game == after);
    }

    #[test]
    fn unknown_condition_leaves_game_untouched() {
        let (mut game, _, d) = game(6, Some("SIDEWAYS"));
        let before = game.clone();
        let result = game.counter(d, card(2), &Conditions::default(), &mut rng());
        assert!(matches!(result, Err(GameError::UnknownCondition(_))));
        assert!(game == before);
    }

    #[test]
    fn settles_exactly_once() {
        let (mut game, _, d) = game(5, Some("HIGH"));
        game.counter(d, card(5), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.settled());
        assert!(game.settle() == Err(GameError::AlreadySettled));
    }

    #[test]
    fn pending_games_cannot_settle() {
        let (mut game, _, _) = game(5, None);
        assert!(game.settle() == Err(GameError::Unfinished));
        assert!(!game.settled());
    }

    #[test]
    fn attacker_cancels_before_counter() {
        let (game, a, d) = game(5, None);
        assert!(game.cancel(a) == Ok(Phase::Cancelled));
        assert!(game.cancel(d) == Err(GameError::Unauthorized));
    }

    #[test]
    fn cancel_after_counter_is_refused() {
        let (mut game, a, d) = game(5, Some("HIGH"));
        game.counter(d, card(1), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.cancel(a) == Err(GameError::AlreadyCountered));
    }

    #[test]
    fn statuses_follow_the_viewer() {
        let (mut game, a, d) = game(5, Some("HIGH"));
        let stranger = ID::default();
        assert!(game.status(a) == Some(Status::Waiting));
        assert!(game.status(d) == Some(Status::Counterattack));
        assert!(game.status(stranger).is_none());
        game.counter(d, card(8), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.status(a) == Some(Status::Finished));
        assert!(game.status(stranger) == Some(Status::Finished));
    }

    #[test]
    fn verdicts_mirror_each_other() {
        let (mut game, a, d) = game(5, Some("HIGH"));
        assert!(game.verdict(a) == Some(Verdict::Pending));
        game.counter(d, card(8), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.verdict(a) == Some(Verdict::Lost));
        assert!(game.verdict(d) == Some(Verdict::Won));
        assert!(game.verdict(ID::default()).is_none());
    }

    #[test]
    fn attacker_card_is_hidden_until_finished() {
        let (mut game, a, d) = game(5, Some("HIGH"));
        assert!(game.revealed(a) == Some(card(5)));
        assert!(game.revealed(d).is_none());
        game.counter(d, card(8), &Conditions::default(), &mut rng())
            .unwrap();
        assert!(game.revealed(d) == Some(card(5)));
    }

    #[test]
    fn ledger_entries_name_both_players() {
        let (mut game, a, d) = game(9, Some("HIGH"));
        let s = game
            .counter(d, card(4), &Conditions::default(), &mut rng())
            .unwrap();
        let [first, second] = s.entries(&game);
        assert!(first.member() == a && first.delta() == 9);
        assert!(second.member() == d && second.delta() == -9);
        assert!(first.game() == game.id() && second.game() == game.id());
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use wgr_database::*;

    impl Schema for Game {
        fn name() -> &'static str {
            GAMES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                GAMES,
                " (
                    id              UUID PRIMARY KEY,
                    attacker_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id),
                    defender_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id),
                    attacker_card   SMALLINT NOT NULL CHECK (attacker_card BETWEEN 1 AND 10),
                    defender_card   SMALLINT CHECK (defender_card BETWEEN 1 AND 10),
                    condition       VARCHAR(",
                wgr_core::CONDITION_LEN,
                "),
                    outcome         VARCHAR(16) NOT NULL DEFAULT 'PENDING',
                    settled         BOOLEAN NOT NULL DEFAULT FALSE,
                    version         INTEGER NOT NULL DEFAULT 0,
                    CHECK (attacker_id <> defender_id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_games_attacker ON ",
                GAMES,
                " (attacker_id);
                 CREATE INDEX IF NOT EXISTS idx_games_defender ON ",
                GAMES,
                " (defender_id);"
            )
        }
    }
}
