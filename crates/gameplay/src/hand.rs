use super::*;
use wgr_core::CARD_MAX;
use wgr_core::CARD_MIN;
use wgr_core::HAND_SIZE;

/// The cards offered to a player when they choose what to play.
///
/// Drawn uniformly without replacement, so every card in a hand is
/// distinct. The selection is advisory: any valid [`Card`] may still be
/// submitted, as the offered hand is not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Deals a hand from the thread-local RNG.
    pub fn deal() -> Self {
        Self::deal_with(&mut rand::rng())
    }
    /// Deals a hand from the given RNG.
    pub fn deal_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let span = (CARD_MAX - CARD_MIN + 1) as usize;
        Self(
            rand::seq::index::sample(rng, span, HAND_SIZE)
                .into_iter()
                .map(|i| CARD_MIN + i as u8)
                .filter_map(|n| Card::try_from(n).ok())
                .collect(),
        )
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
