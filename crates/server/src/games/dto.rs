use serde::Deserialize;
use serde::Serialize;
use wgr_auth::Member;
use wgr_core::ID;
use wgr_core::Unique;
use wgr_gameplay::*;

/// A form value that may arrive as a JSON number or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(i64),
    Text(String),
}

impl Field {
    pub fn text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StartForm {
    pub selected_card: Option<Field>,
    pub defender_id: Option<Field>,
    pub condition: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CounterForm {
    pub selected_card: Option<Field>,
}

/// A game as one viewer may see it.
#[derive(Serialize)]
pub struct GameView {
    pub id: ID<Game>,
    pub attacker: ID<Member>,
    pub defender: ID<Member>,
    pub attacker_card: Option<Card>,
    pub defender_card: Option<Card>,
    pub condition: Option<Condition>,
    pub outcome: Outcome,
    pub phase: Phase,
}

impl GameView {
    pub fn new(game: &Game, viewer: ID<Member>) -> Self {
        Self {
            id: game.id(),
            attacker: game.attacker(),
            defender: game.defender(),
            attacker_card: game.revealed(viewer),
            defender_card: game.defender_card(),
            condition: game.condition().cloned(),
            outcome: game.outcome(),
            phase: game.phase(),
        }
    }
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub cards: Hand,
    pub users: Vec<Player>,
    pub conditions: Vec<Clause>,
}

#[derive(Serialize)]
pub struct DetailResponse {
    pub game: GameView,
    pub status: Status,
}

#[derive(Serialize)]
pub struct CounterResponse {
    pub game: GameView,
    pub cards: Hand,
}

#[derive(Serialize)]
pub struct ListEntry {
    pub game: GameView,
    pub result: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_accept_numbers_and_text() {
        let json: CounterForm = serde_json::from_str(r#"{"selected_card": 7}"#).unwrap();
        assert!(json.selected_card.map(|f| f.text()) == Some("7".into()));
        let text: CounterForm = serde_json::from_str(r#"{"selected_card": "7"}"#).unwrap();
        assert!(text.selected_card.map(|f| f.text()) == Some("7".into()));
        let none: CounterForm = serde_json::from_str("{}").unwrap();
        assert!(none.selected_card.is_none());
    }

    #[test]
    fn views_hide_the_attacker_card_from_the_defender() {
        let attacker = ID::default();
        let defender = ID::default();
        let card = Card::try_from(6u8).unwrap();
        let game = Game::new(attacker, defender, card, None).unwrap();
        assert!(GameView::new(&game, attacker).attacker_card == Some(card));
        assert!(GameView::new(&game, defender).attacker_card.is_none());
        let json = serde_json::to_value(GameView::new(&game, defender)).unwrap();
        assert!(json["outcome"] == "PENDING");
        assert!(json["phase"] == "created");
    }
}
