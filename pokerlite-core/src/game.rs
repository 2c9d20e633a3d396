use crate::config::GameConfig;
use crate::deck::{Deck, DeckSeed};
use crate::audit::{AuditLog, AuditRecord, Description};
use crate::player::Player;
use crate::{Currency, GameError, RoundNum, MAX_PLAYERS, MIN_PLAYERS};
use log::debug;
use rand::prelude::*;
use rand_chacha::ChaChaRng;

/// A full game: the players, the immutable config, the audit trail, the
/// pot threaded from hand to hand, and the RNG every hand's deck seed is
/// drawn from. One seed reproduces the whole game.
#[derive(Debug)]
pub struct Game {
    pub(crate) game_id: String,
    pub(crate) config: GameConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) audit: AuditLog,
    pub(crate) pot: Currency,
    pub(crate) hand_num: RoundNum,
    rng: ChaChaRng,
}

impl Game {
    pub fn new(
        game_id: impl Into<String>,
        config: GameConfig,
        players: Vec<Player>,
        seed: DeckSeed,
    ) -> Result<Self, GameError> {
        if players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        let mut game = Self {
            game_id: game_id.into(),
            config,
            players,
            audit: AuditLog::default(),
            pot: 0,
            hand_num: 0,
            rng: ChaChaRng::from_seed(seed.to_bytes()),
        };
        game.record(Description::GameStart, None, 0, 0);
        Ok(game)
    }

    /// Play the given number of hands back to back, carrying the pot
    /// between them as configured.
    pub fn play(&mut self, hands: RoundNum) -> Result<(), GameError> {
        for _ in 0..hands {
            self.play_next_hand()?;
        }
        for p in &self.players {
            debug!("player {} balance is: {} coins", p.name(), p.cash_balance());
        }
        Ok(())
    }

    /// Deal from a fresh deck and play a single hand.
    pub fn play_next_hand(&mut self) -> Result<(), GameError> {
        let seed = self.next_deck_seed();
        let mut deck = Deck::new(self.config.card_high_number, &seed)?;
        let deal = deck.deal(self.players.len())?;
        self.play_hand_with_deal(&deal)
    }

    fn next_deck_seed(&mut self) -> DeckSeed {
        let mut bytes = [0u8; 32];
        self.rng.fill_bytes(&mut bytes);
        DeckSeed::new(bytes)
    }

    pub(crate) fn record(
        &mut self,
        description: Description,
        player: Option<usize>,
        value: Currency,
        pot: Currency,
    ) {
        let player = player.map(|i| self.players[i].name().to_string());
        self.audit.push(AuditRecord {
            game_id: self.game_id.clone(),
            round_number: self.hand_num,
            pot,
            description,
            player,
            value,
        });
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The pot that will seed the next hand. Non-zero only after a
    /// checked-out hand under pot carry.
    pub fn pot(&self) -> Currency {
        self.pot
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    pub fn into_audit_log(self) -> AuditLog {
        self.audit
    }

    /// Net win/loss per player, in seating order.
    pub fn balances(&self) -> Vec<(&str, Currency)> {
        self.players
            .iter()
            .map(|p| (p.name(), p.cash_balance()))
            .collect()
    }
}
