use wgr_auth::Member;
use wgr_core::ID;
use wgr_gameplay::*;

/// Storage for games, players, and the settlement ledger.
///
/// Every mutating call is a single atomic read-check-write keyed on the
/// game's [`version`](Game::version). `Ok(false)` means another writer got
/// there first and nothing was changed.
#[allow(async_fn_in_trait)]
pub trait Arena {
    /// Inserts a freshly created game.
    async fn create(&self, game: &Game) -> anyhow::Result<()>;
    /// Fetches a game by id.
    async fn lookup(&self, id: ID<Game>) -> anyhow::Result<Option<Game>>;
    /// Deletes a game the defender has not yet answered.
    async fn cancel(&self, game: &Game) -> anyhow::Result<bool>;
    /// Stores the countered game and its ledger entries together.
    async fn counter(&self, game: &Game, settlement: &Settlement) -> anyhow::Result<bool>;
    /// Every game `member` attacks or defends in, newest first.
    async fn games(&self, member: ID<Member>) -> anyhow::Result<Vec<Game>>;
    /// A member and their ledger balance.
    async fn player(&self, member: ID<Member>) -> anyhow::Result<Option<Player>>;
    /// Every member except `except`, by username.
    async fn players(&self, except: ID<Member>) -> anyhow::Result<Vec<Player>>;
}
