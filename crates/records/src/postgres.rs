use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::INITIAL_POINTS;
use wgr_core::Points;
use wgr_core::Unique;
use wgr_core::Version;
use wgr_database::*;
use wgr_gameplay::*;

const COLUMNS: &str = "id, attacker_id, defender_id, attacker_card, defender_card, condition, outcome, settled, version";

fn hydrate(row: &Row) -> anyhow::Result<Game> {
    let outcome = Outcome::try_from(row.get::<_, &str>(6)).map_err(anyhow::Error::msg)?;
    let defender_card = match row.get::<_, Option<i16>>(4) {
        Some(n) => Some(Card::try_from(n as i64)?),
        None => None,
    };
    Ok(Game::hydrate(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        ID::from(row.get::<_, uuid::Uuid>(1)),
        ID::from(row.get::<_, uuid::Uuid>(2)),
        Card::try_from(row.get::<_, i16>(3) as i64)?,
        defender_card,
        row.get::<_, Option<String>>(5).map(Condition::from),
        outcome,
        row.get::<_, bool>(7),
        row.get::<_, Version>(8),
    ))
}

fn player(row: &Row) -> Player {
    Player::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        INITIAL_POINTS + row.get::<_, Points>(2),
    )
}

impl Arena for Arc<Client> {
    async fn create(&self, game: &Game) -> anyhow::Result<()> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                GAMES,
                " (id, attacker_id, defender_id, attacker_card, condition, outcome) VALUES ($1, $2, $3, $4, $5, $6)"
            ),
            &[
                &game.id().inner(),
                &game.attacker().inner(),
                &game.defender().inner(),
                &i16::from(game.attacker_card()),
                &game.condition().map(|c| c.code()),
                &<&'static str>::from(game.outcome()),
            ],
        )
        .await
        .map(|_| ())
        .map_err(anyhow::Error::from)
    }

    async fn lookup(&self, id: ID<Game>) -> anyhow::Result<Option<Game>> {
        self.query_opt(
            const_format::concatcp!("SELECT ", COLUMNS, " FROM ", GAMES, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await?
        .as_ref()
        .map(hydrate)
        .transpose()
    }

    async fn cancel(&self, game: &Game) -> anyhow::Result<bool> {
        self.execute(
            const_format::concatcp!(
                "DELETE FROM ",
                GAMES,
                " WHERE id = $1 AND version = $2 AND defender_card IS NULL"
            ),
            &[&game.id().inner(), &game.version()],
        )
        .await
        .map(|n| n == 1)
        .map_err(anyhow::Error::from)
    }

    async fn counter(&self, game: &Game, settlement: &Settlement) -> anyhow::Result<bool> {
        let defender_card = game
            .defender_card()
            .map(i16::from)
            .ok_or_else(|| anyhow::anyhow!("game {} has not been countered", game.id()))?;
        self.execute(
            const_format::concatcp!(
                "WITH g AS (
                    UPDATE ",
                GAMES,
                " SET defender_card = $3, condition = $4, outcome = $5, settled = TRUE, version = version + 1
                    WHERE id = $1 AND version = $2 AND defender_card IS NULL AND NOT settled
                    RETURNING id, attacker_id, defender_id
                )
                INSERT INTO ",
                LEDGER,
                " (game_id, member_id, delta)
                    SELECT id, attacker_id, $6::BIGINT FROM g
                    UNION ALL
                    SELECT id, defender_id, $7::BIGINT FROM g"
            ),
            &[
                &game.id().inner(),
                &game.version(),
                &defender_card,
                &game.condition().map(|c| c.code()),
                &<&'static str>::from(game.outcome()),
                &settlement.attacker(),
                &settlement.defender(),
            ],
        )
        .await
        .map(|n| n == 2)
        .map_err(anyhow::Error::from)
    }

    async fn games(&self, member: ID<Member>) -> anyhow::Result<Vec<Game>> {
        self.query(
            const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                " FROM ",
                GAMES,
                " WHERE attacker_id = $1 OR defender_id = $1 ORDER BY id DESC"
            ),
            &[&member.inner()],
        )
        .await?
        .iter()
        .map(hydrate)
        .collect()
    }

    async fn player(&self, member: ID<Member>) -> anyhow::Result<Option<Player>> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT u.id, u.username, COALESCE(SUM(l.delta), 0)::BIGINT FROM ",
                USERS,
                " u LEFT JOIN ",
                LEDGER,
                " l ON l.member_id = u.id WHERE u.id = $1 GROUP BY u.id, u.username"
            ),
            &[&member.inner()],
        )
        .await
        .map(|opt| opt.as_ref().map(player))
        .map_err(anyhow::Error::from)
    }

    async fn players(&self, except: ID<Member>) -> anyhow::Result<Vec<Player>> {
        self.query(
            const_format::concatcp!(
                "SELECT u.id, u.username, COALESCE(SUM(l.delta), 0)::BIGINT FROM ",
                USERS,
                " u LEFT JOIN ",
                LEDGER,
                " l ON l.member_id = u.id WHERE u.id <> $1 GROUP BY u.id, u.username ORDER BY u.username"
            ),
            &[&except.inner()],
        )
        .await
        .map(|rows| rows.iter().map(player).collect())
        .map_err(anyhow::Error::from)
    }
}
