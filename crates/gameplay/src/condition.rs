use super::*;
use wgr_core::CONDITION_LEN;

/// Code naming a winning condition, e.g. `HIGH`.
///
/// Games store the code, not the rule, so a game keeps its name even if
/// the table it was drawn from is later reconfigured. The outcome is
/// stored alongside it and is never recomputed.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize)]
#[serde(from = "String")]
pub struct Condition(String);

impl Condition {
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Self(s.trim().to_uppercase())
    }
}
impl From<String> for Condition {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl serde::Serialize for Condition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the winning-condition table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Clause {
    pub code: Condition,
    pub rule: Rule,
}

/// The table of winning conditions a game may be played under.
///
/// Attackers may name one at creation; otherwise one is drawn uniformly
/// when the defender counters. The table is configuration: the default
/// holds `HIGH` and `LOW`, and `WINNING_CONDITIONS` may point at a JSON
/// array of [`Clause`] that replaces it.
#[derive(Debug, Clone)]
pub struct Conditions(Vec<Clause>);

impl Default for Conditions {
    fn default() -> Self {
        Self(vec![
            Clause {
                code: Condition::from("HIGH"),
                rule: Rule::Higher,
            },
            Clause {
                code: Condition::from("LOW"),
                rule: Rule::Lower,
            },
        ])
    }
}

impl TryFrom<Vec<Clause>> for Conditions {
    type Error = GameError;
    fn try_from(clauses: Vec<Clause>) -> Result<Self, Self::Error> {
        if clauses.is_empty() {
            return Err(GameError::NoConditions);
        }
        if let Some(bad) = clauses
            .iter()
            .map(|c| c.code.code())
            .find(|code| code.is_empty() || code.chars().count() > CONDITION_LEN)
        {
            return Err(GameError::InvalidCondition(bad.to_string()));
        }
        Ok(Self(clauses))
    }
}

impl Conditions {
    /// Parses a JSON array of entries.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let clauses = serde_json::from_str::<Vec<Clause>>(json)?;
        Ok(Self::try_from(clauses)?)
    }
    /// Loads the table named by `WINNING_CONDITIONS`, or the default.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("WINNING_CONDITIONS") {
            Err(_) => Ok(Self::default()),
            Ok(path) => {
                log::info!("loading winning conditions from {}", path);
                Self::parse(&std::fs::read_to_string(&path)?)
            }
        }
    }
    pub fn clauses(&self) -> &[Clause] {
        &self.0
    }
    pub fn contains(&self, code: &Condition) -> bool {
        self.0.iter().any(|e| &e.code == code)
    }
    /// Looks up the rule a code stands for.
    pub fn rule(&self, code: &Condition) -> Result<Rule, GameError> {
        self.0
            .iter()
            .find(|e| &e.code == code)
            .map(|e| e.rule)
            .ok_or_else(|| GameError::UnknownCondition(code.to_string()))
    }
    /// Picks a condition uniformly at random.
    pub fn draw<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<&Condition, GameError> {
        use rand::seq::IndexedRandom;
        self.0
            .choose(rng)
            .map(|e| &e.code)
            .ok_or(GameError::NoConditions)
    }
}
