pub mod audit;
pub mod bet;
pub mod config;
pub mod deck;
pub mod game;
mod hand;
pub mod player;
pub mod round;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testutil;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub type Currency = i32;
pub type RoundNum = u32;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameError {
    NotEnoughPlayers,
    TooManyPlayers,
    #[display(fmt = "{}", _0)]
    InvalidBet(bet::BetError),
    #[display(fmt = "{}", _0)]
    Deck(deck::DeckError),
    ProtocolViolation,
}

impl From<bet::BetError> for GameError {
    fn from(e: bet::BetError) -> Self {
        Self::InvalidBet(e)
    }
}

impl From<deck::DeckError> for GameError {
    fn from(e: deck::DeckError) -> Self {
        Self::Deck(e)
    }
}
