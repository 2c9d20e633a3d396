use base64ct::{Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Smallest deck worth playing with; with fewer ranks every deal is forced.
pub const MIN_DECK_SIZE: u8 = 4;
const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

/// A card is nothing but its rank. There are no suits, so two cards from
/// the same deck never tie.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(PartialEq, Debug)]
pub enum DeckError {
    OutOfCards,
    DeckTooSmall,
    NotEnoughCards,
    DeckSeedDecodeError(base64ct::Error),
}

impl Error for DeckError {}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OutOfCards => write!(f, "No more cards in deck"),
            DeckError::DeckTooSmall => {
                write!(f, "The deck must have at least {} cards", MIN_DECK_SIZE)
            }
            DeckError::NotEnoughCards => write!(f, "Too few cards to deal every player one"),
            DeckError::DeckSeedDecodeError(e) => write!(f, "{}", e),
        }
    }
}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::DeckSeedDecodeError(e)
    }
}

/// The ranks `1..=high_card`, shuffled. Built fresh for every hand and
/// discarded once the hand's cards are dealt.
#[derive(Debug, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate a new deck of `high_card` ranks, shuffled by the given seed.
    pub fn new(high_card: u8, seed: &DeckSeed) -> Result<Self, DeckError> {
        if high_card < MIN_DECK_SIZE {
            return Err(DeckError::DeckTooSmall);
        }
        let cards = (1..=high_card).map(Card::new).collect();
        let mut d = Deck { cards };
        d.seeded_shuffle(seed);
        Ok(d)
    }

    pub fn seeded_shuffle(&mut self, seed: &DeckSeed) {
        let mut rng = ChaChaRng::from_seed(seed.to_bytes());
        // For determinism given the same seed, the cards need to be in a known order before shuffling.
        self.cards.sort_unstable();
        self.cards.shuffle(&mut rng)
    }

    /// Draw the topmost card and return it, or an error if there are no more cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::OutOfCards)
    }

    /// Deal one card per player. Every dealt card is distinct because the
    /// deck holds each rank exactly once.
    pub fn deal(&mut self, num_players: usize) -> Result<Vec<Card>, DeckError> {
        if num_players >= self.cards.len() {
            return Err(DeckError::NotEnoughCards);
        }
        (0..num_players).map(|_| self.draw()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub const fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }

    pub fn to_bytes(&self) -> [u8; SEED_LEN] {
        self.0
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        let mut b = [0u8; SEED_LEN];
        thread_rng().fill_bytes(&mut b);
        Self(b)
    }
}

impl fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        Base64::encode(&self.0, &mut b).unwrap();
        write!(f, "{}", String::from_utf8_lossy(&b))
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b: [u8; SEED_LEN] = [0; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SEED1: DeckSeed = DeckSeed([1; SEED_LEN]);
    const SEED2: DeckSeed = DeckSeed([0; SEED_LEN]);

    #[test]
    fn holds_every_rank_once() {
        let d = Deck::new(9, &SEED1).unwrap();
        let ranks: HashSet<u8> = d.cards.iter().map(|c| c.rank()).collect();
        assert_eq!(d.len(), 9);
        assert_eq!(ranks.len(), 9);
        assert!(ranks.iter().all(|&r| (1..=9).contains(&r)));
    }

    #[test]
    fn too_small() {
        assert_eq!(
            Deck::new(MIN_DECK_SIZE - 1, &SEED1).unwrap_err(),
            DeckError::DeckTooSmall
        );
    }

    #[test]
    fn draw_until_empty() {
        let mut d = Deck::new(9, &SEED1).unwrap();
        for _ in 0..9 {
            assert!(d.draw().is_ok());
        }
        assert_eq!(d.draw().unwrap_err(), DeckError::OutOfCards);
    }

    #[test]
    fn deal_is_distinct() {
        let mut d = Deck::new(9, &SEED1).unwrap();
        let dealt = d.deal(4).unwrap();
        let ranks: HashSet<u8> = dealt.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks.len(), 4);
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn deal_needs_spare_cards() {
        let mut d = Deck::new(4, &SEED1).unwrap();
        assert_eq!(d.deal(4).unwrap_err(), DeckError::NotEnoughCards);
        assert!(d.deal(3).is_ok());
    }

    /// Given a specific seed, the order of the cards should always be the same.
    #[test]
    fn deck_is_seedable() {
        let d1 = Deck::new(52, &SEED1).unwrap();
        let d2 = Deck::new(52, &SEED1).unwrap();
        assert_eq!(d1, d2);
        let d3 = Deck::new(52, &SEED2).unwrap();
        assert_ne!(d1, d3);
    }

    #[test]
    fn seed_to_from_string() {
        let d = DeckSeed::default();
        let s = d.to_string();
        let d2: DeckSeed = s.parse().unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn card_order_is_by_rank() {
        assert!(Card::new(3) < Card::new(8));
        assert_eq!(Card::new(5), Card::new(5));
    }
}
