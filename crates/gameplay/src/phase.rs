/// Where a game sits in its lifecycle.
///
/// `Created → Countered` when the defender plays, `Created → Cancelled`
/// when the attacker withdraws. Both later states are terminal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Created,
    Countered,
    Cancelled,
}

/// What a game looks like to one of its participants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The attacker is waiting on the defender.
    Waiting,
    /// The defender owes a counterattack.
    Counterattack,
    /// The result is in.
    Finished,
}

/// A finished game's result, from one participant's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pending,
    Won,
    Lost,
    Drew,
}
