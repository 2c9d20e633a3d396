use crate::bet::{BetError, BetKind};
use crate::config::GameConfig;
use crate::audit::{AuditLog, AuditRecord, BetRecord, Description};
use crate::player::{Player, TurnView};
use crate::{Currency, GameError, RoundNum};
use log::debug;
use serde::{Deserialize, Serialize};

/// Where a betting round stands from the point of view of the player about
/// to act. Strategies branch on this instead of re-deriving it from the
/// round log themselves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
pub enum PlayState {
    /// First decision of the round: check or open.
    OpeningPlay,
    /// Everyone so far has checked: check or open.
    CheckedPlay,
    /// A bet is live and this is the player's first answer to it: fold,
    /// see, or raise.
    FirstBetPlay,
    /// The player already acted this round and was raised since: fold or
    /// see.
    RaisePlay,
}

/// Derive the play state from the round log for the named player.
///
/// The most recent ante, check, open or raise decides the shape of the
/// round; trailing sees and folds don't change what the next actor is
/// facing, so they are skipped. Must not be called once the round has
/// ended, and the log always starts with the antes, so an empty log is an
/// engine defect.
pub fn play_state(round_log: &[BetRecord], player: &str) -> Result<PlayState, GameError> {
    let decisive = round_log
        .iter()
        .rev()
        .find(|r| !matches!(r.bet_type, BetKind::See | BetKind::Fold))
        .ok_or(GameError::ProtocolViolation)?;
    match decisive.bet_type {
        BetKind::Ante => Ok(PlayState::OpeningPlay),
        BetKind::Check => Ok(PlayState::CheckedPlay),
        BetKind::Open => Ok(PlayState::FirstBetPlay),
        BetKind::Raise => {
            let has_acted = round_log
                .iter()
                .any(|r| r.bet_type != BetKind::Ante && r.player == player);
            if has_acted {
                Ok(PlayState::RaisePlay)
            } else {
                Ok(PlayState::FirstBetPlay)
            }
        }
        BetKind::See | BetKind::Fold => Err(GameError::ProtocolViolation),
    }
}

/// How a betting round finished.
#[derive(Debug)]
pub(crate) struct RoundOutcome {
    /// Pot after every bet of the round.
    pub pot: Currency,
    /// Indexes of the players still in the hand, in rotation order.
    pub survivors: Vec<usize>,
    /// The round ended with nobody ever betting.
    pub checked: bool,
    /// The full round log, antes plus one record per turn.
    pub records: Vec<BetRecord>,
}

/// Runs one betting round to completion.
///
/// Players are addressed through an explicit ring of indexes into the
/// game's player slice; a fold removes the index, and the closing-player
/// bookkeeping is plain index arithmetic on the ring.
pub(crate) struct BettingRound<'g> {
    pub config: &'g GameConfig,
    pub game_id: &'g str,
    pub round_number: RoundNum,
}

impl BettingRound<'_> {
    pub(crate) fn run(
        &self,
        players: &mut [Player],
        mut active: Vec<usize>,
        mut pot: Currency,
        mut records: Vec<BetRecord>,
        audit: &mut AuditLog,
    ) -> Result<RoundOutcome, GameError> {
        for &idx in &active {
            players[idx].reset_running_total();
        }
        // Highest cumulative amount any player has put in this round;
        // everyone must match it to stay in.
        let mut highest_cumulative_bet: Currency = 0;
        let mut number_raises: u32 = 0;
        // Position (in the ring) of the player whose completed turn ends
        // the round. Starts as the last in rotation order.
        let mut closing_pos = active.len() - 1;
        let mut cur = 0usize;
        let checked;
        loop {
            let is_raise_allowed = number_raises < self.config.max_raises;
            let idx = active[cur];
            let required_bet = highest_cumulative_bet - players[idx].bet_running_total();
            let state = play_state(&records, players[idx].name())?;
            let amount = {
                let player = &players[idx];
                let view = TurnView {
                    name: player.name(),
                    card: player.card().ok_or(GameError::ProtocolViolation)?,
                    required_bet,
                    pot,
                    state,
                    round_log: &records,
                    is_raise_allowed,
                    config: self.config,
                };
                player.decide(&view)
            };
            let kind = classify_bet(self.config, amount, required_bet, is_raise_allowed)?;
            let is_closing = cur == closing_pos;
            // The bet is legal; only now touch the player's balance.
            players[idx].place_bet(amount);
            match kind {
                BetKind::Check => {
                    debug!("player {} checks", players[idx].name());
                }
                BetKind::Fold => {
                    debug!("player {} has folded", players[idx].name());
                }
                BetKind::See => {
                    debug!(
                        "player {} has seen the bet by betting {}",
                        players[idx].name(),
                        amount
                    );
                    pot += amount;
                    players[idx].add_running_total(amount);
                }
                BetKind::Open | BetKind::Raise => {
                    debug!(
                        "player {} has bet {} above the required {}",
                        players[idx].name(),
                        amount,
                        required_bet
                    );
                    pot += amount;
                    players[idx].add_running_total(amount);
                    highest_cumulative_bet += amount - required_bet;
                    if kind == BetKind::Raise {
                        number_raises += 1;
                        if number_raises == self.config.max_raises {
                            debug!("maximum number of raises reached: {}", number_raises);
                        }
                    }
                    // The bet must come back around: every other active
                    // player acts again, and the player just before the
                    // bettor closes the round.
                    closing_pos = (cur + active.len() - 1) % active.len();
                }
                BetKind::Ante => return Err(GameError::ProtocolViolation),
            }
            records.push(BetRecord {
                round_number: self.round_number,
                pot,
                bet_type: kind,
                player: players[idx].name().to_string(),
                amount,
            });
            audit.push(AuditRecord {
                game_id: self.game_id.to_string(),
                round_number: self.round_number,
                pot,
                description: Description::Bet(kind),
                player: Some(players[idx].name().to_string()),
                value: amount,
            });
            if kind == BetKind::Fold {
                active.remove(cur);
                if closing_pos > cur {
                    closing_pos -= 1;
                }
                if cur >= active.len() {
                    cur = 0;
                }
            }
            if is_closing || active.len() == 1 {
                checked = is_closing && kind == BetKind::Check;
                break;
            }
            if kind != BetKind::Fold {
                cur = (cur + 1) % active.len();
            }
        }
        Ok(RoundOutcome {
            pot,
            survivors: active,
            checked,
            records,
        })
    }
}

/// Classify and validate a returned amount without touching any state.
fn classify_bet(
    config: &GameConfig,
    amount: Currency,
    required_bet: Currency,
    is_raise_allowed: bool,
) -> Result<BetKind, GameError> {
    use std::cmp::Ordering;
    if amount < 0 {
        return Err(BetError::NegativeBet.into());
    }
    match amount.cmp(&required_bet) {
        Ordering::Less => {
            if amount == 0 {
                Ok(BetKind::Fold)
            } else {
                // Must either fold outright or meet the requirement.
                Err(BetError::BelowRequiredBet.into())
            }
        }
        Ordering::Equal => {
            if required_bet == 0 {
                Ok(BetKind::Check)
            } else {
                Ok(BetKind::See)
            }
        }
        Ordering::Greater => {
            if required_bet == 0 {
                if !config.is_legal_open(amount) {
                    return Err(BetError::UnknownOpenAmount.into());
                }
                Ok(BetKind::Open)
            } else if !is_raise_allowed {
                Err(BetError::RaiseNotAllowed.into())
            } else if !config.is_legal_raise(required_bet, amount - required_bet) {
                Err(BetError::UnknownRaiseAmount.into())
            } else {
                Ok(BetKind::Raise)
            }
        }
    }
}
