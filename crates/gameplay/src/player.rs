use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::Points;

/// A member together with their current point balance.
///
/// The balance is read from the ledger, never written directly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Player {
    id: ID<Member>,
    username: String,
    points: Points,
}

impl Player {
    pub fn new(id: ID<Member>, username: String, points: Points) -> Self {
        Self {
            id,
            username,
            points,
        }
    }
    pub fn id(&self) -> ID<Member> {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn points(&self) -> Points {
        self.points
    }
}
