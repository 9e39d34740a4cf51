use super::*;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::INITIAL_POINTS;
use wgr_core::Points;
use wgr_core::Unique;
use wgr_gameplay::*;

#[derive(Default)]
struct State {
    members: BTreeMap<ID<Member>, String>,
    games: BTreeMap<ID<Game>, Game>,
    ledger: BTreeMap<(ID<Game>, ID<Member>), Entry>,
}

impl State {
    fn balance(&self, member: ID<Member>) -> Points {
        INITIAL_POINTS
            + self
                .ledger
                .values()
                .filter(|e| e.member() == member)
                .map(|e| e.delta())
                .sum::<Points>()
    }
    fn player(&self, member: ID<Member>) -> Option<Player> {
        self.members
            .get(&member)
            .map(|name| Player::new(member, name.clone(), self.balance(member)))
    }
}

/// In-process arena holding everything behind one async mutex.
///
/// Enforces the same version and ledger-key checks as the Postgres
/// arena, so service behavior can be exercised without a database.
#[derive(Default)]
pub struct Memory(Mutex<State>);

impl Memory {
    /// Registers a member so they can be challenged.
    pub async fn enroll(&self, member: &Member) {
        self.0
            .lock()
            .await
            .members
            .insert(member.id(), member.username().to_string());
    }
    /// Every ledger row written so far.
    pub async fn ledger(&self) -> Vec<Entry> {
        self.0.lock().await.ledger.values().copied().collect()
    }
}

impl Arena for Memory {
    async fn create(&self, game: &Game) -> anyhow::Result<()> {
        let mut state = self.0.lock().await;
        if state.games.contains_key(&game.id()) {
            anyhow::bail!("game {} already exists", game.id());
        }
        state.games.insert(game.id(), game.clone());
        Ok(())
    }

    async fn lookup(&self, id: ID<Game>) -> anyhow::Result<Option<Game>> {
        Ok(self.0.lock().await.games.get(&id).cloned())
    }

    async fn cancel(&self, game: &Game) -> anyhow::Result<bool> {
        let mut state = self.0.lock().await;
        let current = state
            .games
            .get(&game.id())
            .is_some_and(|g| g.version() == game.version() && g.defender_card().is_none());
        if current {
            state.games.remove(&game.id());
        }
        Ok(current)
    }

    async fn counter(&self, game: &Game, settlement: &Settlement) -> anyhow::Result<bool> {
        let mut state = self.0.lock().await;
        let current = state.games.get(&game.id()).is_some_and(|g| {
            g.version() == game.version() && g.defender_card().is_none() && !g.settled()
        });
        let entries = settlement.entries(game);
        let unpaid = entries
            .iter()
            .all(|e| !state.ledger.contains_key(&(e.game(), e.member())));
        if !(current && unpaid) {
            return Ok(false);
        }
        let mut stored = game.clone();
        stored.bump();
        state.games.insert(game.id(), stored);
        for entry in entries {
            state.ledger.insert((entry.game(), entry.member()), entry);
        }
        Ok(true)
    }

    async fn games(&self, member: ID<Member>) -> anyhow::Result<Vec<Game>> {
        Ok(self
            .0
            .lock()
            .await
            .games
            .values()
            .rev()
            .filter(|g| g.involves(member))
            .cloned()
            .collect())
    }

    async fn player(&self, member: ID<Member>) -> anyhow::Result<Option<Player>> {
        Ok(self.0.lock().await.player(member))
    }

    async fn players(&self, except: ID<Member>) -> anyhow::Result<Vec<Player>> {
        let state = self.0.lock().await;
        let mut players = state
            .members
            .keys()
            .filter(|id| **id != except)
            .filter_map(|id| state.player(*id))
            .collect::<Vec<_>>();
        players.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(players)
    }
}
