use crate::config::GameConfig;
use crate::deck::Card;
use crate::audit::BetRecord;
use crate::round::PlayState;
use crate::Currency;
use log::debug;
use std::fmt;

/// Everything a strategy is shown when asked for a bet.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// The deciding player's own name, as it appears in the round log.
    pub name: &'a str,
    pub card: Card,
    /// Amount needed to stay in the hand. Zero means checking is open.
    pub required_bet: Currency,
    pub pot: Currency,
    pub state: PlayState,
    /// The round's history so far, antes included.
    pub round_log: &'a [BetRecord],
    pub is_raise_allowed: bool,
    pub config: &'a GameConfig,
}

/// A betting strategy decides one bet at a time.
///
/// The returned amount must be 0 (a check when `required_bet` is 0, a fold
/// otherwise), exactly `required_bet` (a see), or more than `required_bet`
/// with the difference drawn from the configured raise amounts — and only
/// when `is_raise_allowed` is set. An opening amount must come from the
/// configured open amounts. Anything else aborts the game with an invalid
/// bet error; the engine never adjusts a bet on a strategy's behalf.
pub trait BettingStrategy: fmt::Debug {
    fn decide(&self, view: &TurnView<'_>) -> Currency;
}

/// One seat at the table: identity, balance, the current hand's card, and
/// the strategy that does the thinking.
#[derive(Debug)]
pub struct Player {
    name: String,
    cash_balance: Currency,
    card: Option<Card>,
    bet_running_total: Currency,
    staked: Currency,
    strategy: Box<dyn BettingStrategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn BettingStrategy>) -> Self {
        Self {
            name: name.into(),
            cash_balance: 0,
            card: None,
            bet_running_total: 0,
            staked: 0,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Net winnings so far; balances start at zero and may go negative.
    pub fn cash_balance(&self) -> Currency {
        self.cash_balance
    }

    pub fn card(&self) -> Option<Card> {
        self.card
    }

    pub(crate) fn set_card(&mut self, card: Card) {
        self.card = Some(card);
    }

    /// What this player has put in during the current betting round.
    pub fn bet_running_total(&self) -> Currency {
        self.bet_running_total
    }

    pub(crate) fn reset_running_total(&mut self) {
        self.bet_running_total = 0;
    }

    pub(crate) fn add_running_total(&mut self, amount: Currency) {
        self.bet_running_total += amount;
    }

    /// Ante and bets sunk into the pot and not yet resolved. Survives a
    /// pot carry so a later win can be reported net of it.
    pub(crate) fn staked(&self) -> Currency {
        self.staked
    }

    pub(crate) fn place_bet(&mut self, amount: Currency) {
        self.cash_balance -= amount;
        self.staked += amount;
        debug!(
            "player {} balance is: {} coins",
            self.name, self.cash_balance
        );
    }

    pub(crate) fn collect_winnings(&mut self, winnings: Currency) {
        self.cash_balance += winnings;
    }

    /// The pot this player was staked into has been resolved.
    pub(crate) fn settle(&mut self) {
        self.staked = 0;
    }

    pub(crate) fn decide(&self, view: &TurnView<'_>) -> Currency {
        self.strategy.decide(view)
    }
}
