use crate::bet::{OpenSize, ReplySize};
use crate::player::{BettingStrategy, TurnView};
use crate::round::PlayState;
use crate::Currency;
use std::collections::{BTreeMap, BTreeSet};

/// Bets purely on fixed card cutoffs: open at or above one rank, see at
/// or above another, raise at or above a third whenever raising is still
/// allowed. A raise that is not allowed degrades to a see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdStrategy {
    /// Open (or bet after checks) on this rank and above.
    pub open_min: u8,
    pub open_size: OpenSize,
    /// Answer a live bet on this rank and above; fold below it.
    pub see_min: u8,
    /// Raise on this rank and above. `u8::MAX` never raises.
    pub raise_min: u8,
    pub raise_size: ReplySize,
}

impl ThresholdStrategy {
    /// Bets big on anything from the middle of the deck up.
    pub fn aggressive() -> Self {
        Self {
            open_min: 4,
            open_size: OpenSize::High,
            see_min: 4,
            raise_min: 4,
            raise_size: ReplySize::High,
        }
    }

    /// Only plays strong cards and never raises.
    pub fn cautious() -> Self {
        Self {
            open_min: 7,
            open_size: OpenSize::Low,
            see_min: 6,
            raise_min: u8::MAX,
            raise_size: ReplySize::See,
        }
    }
}

impl BettingStrategy for ThresholdStrategy {
    fn decide(&self, view: &TurnView<'_>) -> Currency {
        let card = view.card.rank();
        match view.state {
            PlayState::OpeningPlay | PlayState::CheckedPlay => {
                if card >= self.open_min {
                    view.config.open_bets[self.open_size]
                } else {
                    0
                }
            }
            PlayState::FirstBetPlay | PlayState::RaisePlay => {
                if card < self.see_min {
                    return 0;
                }
                let excess = view.config.raise_excess(view.required_bet, self.raise_size);
                if view.is_raise_allowed && card >= self.raise_min && excess > 0 {
                    view.required_bet + excess
                } else {
                    view.required_bet
                }
            }
        }
    }
}

/// Plays from per-state charts: each play state maps card ranks to a bet
/// size, and any rank missing from the chart checks or folds. This is the
/// shape a tuned strategy comes in when sweeping for good play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyTable {
    /// Opening bet by rank when acting first.
    pub open: BTreeMap<u8, OpenSize>,
    /// Opening bet by rank once everyone before has checked.
    pub open_after_check: BTreeMap<u8, OpenSize>,
    /// Answer to a live bet by rank: see, or raise by a factor.
    pub reply: BTreeMap<u8, ReplySize>,
    /// Ranks that see a raise rather than folding to it.
    pub reply_after_raise: BTreeSet<u8>,
}

impl StrategyTable {
    /// A middle-of-the-road chart: opens small on the top half, answers
    /// most bets with a medium raise, and only sees a raise with the top
    /// card.
    pub fn balanced() -> Self {
        Self {
            open: (6..=9).map(|c| (c, OpenSize::Low)).collect(),
            open_after_check: (8..=9).map(|c| (c, OpenSize::High)).collect(),
            reply: (2..=9)
                .map(|c| (c, if c == 9 { ReplySize::High } else { ReplySize::Medium }))
                .collect(),
            reply_after_raise: [9].into_iter().collect(),
        }
    }

    /// A chart that folds everything but the very top of the deck.
    pub fn tight() -> Self {
        Self {
            open: (8..=9).map(|c| (c, OpenSize::Medium)).collect(),
            open_after_check: (8..=9).map(|c| (c, OpenSize::Medium)).collect(),
            reply: (7..=9).map(|c| (c, ReplySize::See)).collect(),
            reply_after_raise: (8..=9).collect(),
        }
    }
}

impl BettingStrategy for StrategyTable {
    fn decide(&self, view: &TurnView<'_>) -> Currency {
        let card = view.card.rank();
        match view.state {
            PlayState::OpeningPlay => self
                .open
                .get(&card)
                .map_or(0, |&size| view.config.open_bets[size]),
            PlayState::CheckedPlay => self
                .open_after_check
                .get(&card)
                .map_or(0, |&size| view.config.open_bets[size]),
            PlayState::FirstBetPlay => match self.reply.get(&card) {
                None => 0,
                Some(ReplySize::See) => view.required_bet,
                Some(&size) => {
                    let excess = view.config.raise_excess(view.required_bet, size);
                    if view.is_raise_allowed && excess > 0 {
                        view.required_bet + excess
                    } else {
                        view.required_bet
                    }
                }
            },
            PlayState::RaisePlay => {
                if self.reply_after_raise.contains(&card) {
                    view.required_bet
                } else {
                    0
                }
            }
        }
    }
}
