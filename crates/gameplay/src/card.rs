use super::*;
use wgr_core::Arbitrary;
use wgr_core::CARD_MAX;
use wgr_core::CARD_MIN;

/// A selectable card, valued `CARD_MIN..=CARD_MAX`.
///
/// Construction goes through [`TryFrom`] so an out-of-range value can
/// never reach the resolver.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Every card in the deck, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (CARD_MIN..=CARD_MAX).map(Self)
    }
    /// Absolute distance to an arbitrary target value.
    pub fn distance(&self, target: u8) -> u8 {
        self.0.abs_diff(target)
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = GameError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            CARD_MIN..=CARD_MAX => Ok(Self(n)),
            _ => Err(GameError::InvalidCard(n as i64)),
        }
    }
}

/// i64 conversions, for form fields and SMALLINT columns
impl From<Card> for i16 {
    fn from(c: Card) -> i16 {
        c.0 as i16
    }
}
impl TryFrom<i64> for Card {
    type Error = GameError;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map_err(|_| GameError::InvalidCard(n))
            .and_then(Self::try_from)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(CARD_MIN..=CARD_MAX))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_whole_range() {
        assert!(Card::all().count() == 10);
        assert!(Card::all().all(|c| Card::try_from(u8::from(c)).is_ok()));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Card::try_from(0u8).is_err());
        assert!(Card::try_from(11u8).is_err());
        assert!(Card::try_from(-3i64).is_err());
        assert!(Card::try_from(300i64).is_err());
    }

    #[test]
    fn random_cards_are_valid() {
        assert!((0..256)
            .map(|_| Card::random())
            .all(|c| (CARD_MIN..=CARD_MAX).contains(&u8::from(c))));
    }
}
