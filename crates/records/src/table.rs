use super::*;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::Unique;
use wgr_gameplay::*;

/// The game service: one read, one decision, one write per call.
///
/// Knows nothing about HTTP. Raw form values come in as strings so that
/// "missing" and "malformed" can be told apart and reported.
pub struct Table<A> {
    arena: A,
    conditions: Conditions,
}

fn card(raw: Option<&str>) -> Result<Card, Refusal> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Refusal::BadInput("select a card".into()))?;
    let n = raw
        .parse::<i64>()
        .map_err(|_| Refusal::BadInput("invalid card value".into()))?;
    Card::try_from(n).map_err(|e| Refusal::BadInput(e.to_string()))
}

impl<A: Arena> Table<A> {
    pub fn new(arena: A, conditions: Conditions) -> Self {
        Self { arena, conditions }
    }
    pub fn arena(&self) -> &A {
        &self.arena
    }
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    async fn find(&self, id: ID<Game>) -> Result<Game, Refusal> {
        self.arena
            .lookup(id)
            .await?
            .ok_or(Refusal::NotFound("game"))
    }

    /// A hand to choose from and the members who can be challenged.
    pub async fn options(&self, actor: ID<Member>) -> Result<(Hand, Vec<Player>), Refusal> {
        let players = self.arena.players(actor).await?;
        Ok((Hand::deal(), players))
    }

    /// Opens a challenge from `actor`.
    pub async fn start(
        &self,
        actor: ID<Member>,
        selected: Option<&str>,
        defender: Option<&str>,
        condition: Option<&str>,
    ) -> Result<Game, Refusal> {
        let defender = defender.map(str::trim).filter(|s| !s.is_empty());
        let selected = selected.map(str::trim).filter(|s| !s.is_empty());
        if selected.is_none() || defender.is_none() {
            return Err(Refusal::BadInput(
                "select a card and an opponent".into(),
            ));
        }
        let card = card(selected)?;
        let defender = defender
            .unwrap_or_default()
            .parse::<ID<Member>>()
            .map_err(|_| Refusal::BadInput("invalid opponent".into()))?;
        let condition = condition
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Condition::from);
        if let Some(ref code) = condition {
            if !self.conditions.contains(code) {
                return Err(Refusal::BadInput(
                    GameError::UnknownCondition(code.to_string()).to_string(),
                ));
            }
        }
        self.arena
            .player(defender)
            .await?
            .ok_or(Refusal::NotFound("opponent"))?;
        let game = Game::new(actor, defender, card, condition)
            .map_err(|e| Refusal::BadInput(e.to_string()))?;
        self.arena.create(&game).await?;
        log::info!("game {} opened by {} against {}", game.id(), actor, defender);
        Ok(game)
    }

    /// The game as `actor` sees it.
    pub async fn detail(&self, actor: ID<Member>, id: ID<Game>) -> Result<(Game, Status), Refusal> {
        let game = self.find(id).await?;
        match game.status(actor) {
            Some(status) => Ok((game, status)),
            None => Err(Refusal::Forbidden),
        }
    }

    /// Withdraws a game the defender has not answered.
    pub async fn cancel(&self, actor: ID<Member>, id: ID<Game>) -> Result<(), Refusal> {
        let game = self.find(id).await?;
        game.cancel(actor)
            .inspect_err(|e| log::debug!("cancel of {} refused: {}", id, e))
            .map_err(|e| Refusal::from_game(id, e))?;
        match self.arena.cancel(&game).await? {
            true => {
                log::info!("game {} cancelled by {}", id, actor);
                Ok(())
            }
            false => Err(Refusal::Conflict),
        }
    }

    /// What the defender needs to choose a counter.
    pub async fn prepare(&self, actor: ID<Member>, id: ID<Game>) -> Result<(Game, Hand), Refusal> {
        let game = self.find(id).await?;
        if actor != game.defender() || game.phase() != Phase::Created {
            return Err(Refusal::Redirect(id));
        }
        Ok((game, Hand::deal()))
    }

    /// Plays the defender's card and records the result and settlement.
    pub async fn counter(
        &self,
        actor: ID<Member>,
        id: ID<Game>,
        selected: Option<&str>,
    ) -> Result<Game, Refusal> {
        let mut game = self.find(id).await?;
        if actor != game.defender() || game.phase() != Phase::Created {
            log::debug!("counter on {} by {} redirected", id, actor);
            return Err(Refusal::Redirect(id));
        }
        let card = card(selected)?;
        let settlement = game
            .counter(actor, card, &self.conditions, &mut rand::rng())
            .map_err(|e| Refusal::from_game(id, e))
            .inspect_err(|e| {
                if let Refusal::Retired(code) = e {
                    log::warn!("game {} names retired condition {}", id, code);
                }
            })?;
        match self.arena.counter(&game, &settlement).await? {
            true => {
                game.bump();
                log::info!("game {} resolved {} ({})", game, settlement, actor);
                Ok(game)
            }
            false => Err(Refusal::Conflict),
        }
    }

    /// Every game `actor` plays in, with their result in each.
    pub async fn games(&self, actor: ID<Member>) -> Result<Vec<(Game, Verdict)>, Refusal> {
        Ok(self
            .arena
            .games(actor)
            .await?
            .into_iter()
            .filter_map(|g| g.verdict(actor).map(|v| (g, v)))
            .collect())
    }

    /// The actor's identity and balance.
    pub async fn player(&self, actor: ID<Member>) -> Result<Player, Refusal> {
        self.arena
            .player(actor)
            .await?
            .ok_or(Refusal::NotFound("player"))
    }
}
