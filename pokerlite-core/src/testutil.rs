use crate::bet::BetKind;
use crate::deck::Card;
use crate::audit::BetRecord;
use crate::player::{BettingStrategy, Player, TurnView};
use crate::{Currency, RoundNum};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Plays a canned sequence of bets, one per turn, ignoring everything the
/// engine shows it.
#[derive(Debug)]
pub(crate) struct Scripted {
    bets: RefCell<VecDeque<Currency>>,
}

impl Scripted {
    pub(crate) fn boxed(bets: &[Currency]) -> Box<Self> {
        Box::new(Self {
            bets: RefCell::new(bets.iter().copied().collect()),
        })
    }
}

impl BettingStrategy for Scripted {
    fn decide(&self, _view: &TurnView<'_>) -> Currency {
        self.bets
            .borrow_mut()
            .pop_front()
            .expect("script ran out of bets")
    }
}

pub(crate) fn player(name: &str, bets: &[Currency]) -> Player {
    Player::new(name, Scripted::boxed(bets))
}

/// Players named player1..playerN holding distinct cards 2..=N+1, each
/// playing its canned script.
pub(crate) fn scripted_players(scripts: &[&[Currency]]) -> Vec<Player> {
    scripts
        .iter()
        .enumerate()
        .map(|(i, bets)| {
            let mut p = player(&format!("player{}", i + 1), bets);
            p.set_card(Card::new(i as u8 + 2));
            p
        })
        .collect()
}

/// The ante entries a round log starts with.
pub(crate) fn ante_records(
    players: &[Player],
    round_number: RoundNum,
    ante: Currency,
) -> Vec<BetRecord> {
    let mut pot = 0;
    players
        .iter()
        .map(|p| {
            pot += ante;
            BetRecord {
                round_number,
                pot,
                bet_type: BetKind::Ante,
                player: p.name().to_string(),
                amount: ante,
            }
        })
        .collect()
}

pub(crate) fn bet_record(bet_type: BetKind, player: &str, amount: Currency) -> BetRecord {
    BetRecord {
        round_number: 1,
        pot: 0,
        bet_type,
        player: player.to_string(),
        amount,
    }
}
