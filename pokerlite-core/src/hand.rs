use crate::bet::BetKind;
use crate::deck::Card;
use crate::game::Game;
use crate::audit::{BetRecord, Description};
use crate::round::BettingRound;
use crate::{Currency, GameError};
use log::debug;

impl Game {
    /// Play one hand with an explicit deal: `deal[i]` goes to the i-th
    /// player in this hand's acting order.
    pub(crate) fn play_hand_with_deal(&mut self, deal: &[Card]) -> Result<(), GameError> {
        let n = self.players.len();
        debug_assert_eq!(deal.len(), n);
        self.hand_num += 1;
        let round_number = self.hand_num;
        debug!("round number: {}", round_number);
        self.record(
            Description::RoundStart,
            None,
            round_number as Currency,
            self.pot,
        );

        // The opening seat moves one place every hand.
        let start = (round_number as usize - 1) % n;
        let order: Vec<usize> = (0..n).map(|i| (start + i) % n).collect();

        let mut records: Vec<BetRecord> = Vec::with_capacity(n * 2);
        for (i, &idx) in order.iter().enumerate() {
            self.players[idx].set_card(deal[i]);
            self.players[idx].place_bet(self.config.ante_bet);
            self.pot += self.config.ante_bet;
            records.push(BetRecord {
                round_number,
                pot: self.pot,
                bet_type: BetKind::Ante,
                player: self.players[idx].name().to_string(),
                amount: self.config.ante_bet,
            });
            let ante = self.config.ante_bet;
            self.record(Description::Bet(BetKind::Ante), Some(idx), ante, self.pot);
            let rank = deal[i].rank() as Currency;
            self.record(Description::CardDealt, Some(idx), rank, self.pot);
        }
        debug!("the pot is: {} coins", self.pot);

        let outcome = {
            let round = BettingRound {
                config: &self.config,
                game_id: &self.game_id,
                round_number,
            };
            round.run(&mut self.players, order, self.pot, records, &mut self.audit)?
        };
        self.pot = outcome.pot;

        if outcome.checked {
            if self.config.carry_pot {
                debug!("nobody bet; the pot of {} coins carries forward", self.pot);
                let pot = self.pot;
                self.record(Description::Checked, None, pot, pot);
            } else {
                debug!("nobody bet; antes are returned");
                let ante = self.config.ante_bet;
                for p in &mut self.players {
                    p.collect_winnings(ante);
                    p.settle();
                }
                self.pot = 0;
                self.record(Description::Checked, None, 0, 0);
            }
        } else {
            // Ranks are dealt without replacement, so the maximum is unique.
            let winner = outcome
                .survivors
                .iter()
                .copied()
                .max_by_key(|&i| self.players[i].card())
                .ok_or(GameError::ProtocolViolation)?;
            let pot = self.pot;
            let profit = pot - self.players[winner].staked();
            self.players[winner].collect_winnings(pot);
            for p in &mut self.players {
                p.settle();
            }
            self.pot = 0;
            debug!("the winner is: player {}", self.players[winner].name());
            self.record(Description::Win, Some(winner), profit, pot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::deck::DeckSeed;
    use crate::testutil::scripted_players;

    const SEED: DeckSeed = DeckSeed::new([7; 32]);

    #[test]
    fn open_fold_awards_the_net_profit() {
        let config = GameConfig {
            max_raises: 0,
            ..GameConfig::default()
        };
        let players = scripted_players(&[&[10], &[0]]);
        let mut game = Game::new("g", config, players, SEED).unwrap();
        game.play_hand_with_deal(&[Card::new(8), Card::new(3)])
            .unwrap();
        assert_eq!(game.pot(), 0);
        assert_eq!(game.players()[0].cash_balance(), 10);
        assert_eq!(game.players()[1].cash_balance(), -10);
        let win = game.audit_log().records().last().unwrap();
        assert_eq!(win.description, Description::Win);
        assert_eq!(win.player.as_deref(), Some("player1"));
        // pot 30, dealer staked ante 10 + open 10
        assert_eq!(win.value, 10);
        assert_eq!(win.pot, 30);
    }

    #[test]
    fn checked_round_carries_the_pot() {
        let players = scripted_players(&[&[0, 0], &[0, 10]]);
        let mut game = Game::new("g", GameConfig::default(), players, SEED).unwrap();
        game.play_hand_with_deal(&[Card::new(8), Card::new(3)])
            .unwrap();
        assert_eq!(game.pot(), 20);
        assert!(game
            .audit_log()
            .round_records(1)
            .all(|r| r.description != Description::Win));
        let checked = game.audit_log().records().last().unwrap();
        assert_eq!(checked.description, Description::Checked);
        assert_eq!(checked.value, 20);
        assert_eq!(checked.pot, 20);

        // hand 2 opens one seat later: player2 acts first, opens into the
        // carried pot, player1 folds
        game.play_hand_with_deal(&[Card::new(9), Card::new(2)])
            .unwrap();
        assert_eq!(game.pot(), 0);
        let win = game.audit_log().records().last().unwrap();
        assert_eq!(win.description, Description::Win);
        assert_eq!(win.player.as_deref(), Some("player2"));
        // pot 50; the winner's stake is both antes plus the open
        assert_eq!(win.pot, 50);
        assert_eq!(win.value, 20);
        assert_eq!(game.players()[0].cash_balance(), -20);
        assert_eq!(game.players()[1].cash_balance(), 20);
    }

    #[test]
    fn checked_round_refunds_antes_without_carry() {
        let config = GameConfig {
            carry_pot: false,
            ..GameConfig::default()
        };
        let players = scripted_players(&[&[0], &[0]]);
        let mut game = Game::new("g", config, players, SEED).unwrap();
        game.play_hand_with_deal(&[Card::new(8), Card::new(3)])
            .unwrap();
        assert_eq!(game.pot(), 0);
        assert_eq!(game.players()[0].cash_balance(), 0);
        assert_eq!(game.players()[1].cash_balance(), 0);
        let checked = game.audit_log().records().last().unwrap();
        assert_eq!(checked.description, Description::Checked);
        assert_eq!(checked.value, 0);
    }

    #[test]
    fn showdown_picks_the_highest_surviving_card() {
        // all three see the open; player2 holds the 9
        let players = scripted_players(&[&[10], &[10], &[10]]);
        let mut game = Game::new("g", GameConfig::default(), players, SEED).unwrap();
        game.play_hand_with_deal(&[Card::new(4), Card::new(9), Card::new(6)])
            .unwrap();
        let win = game.audit_log().records().last().unwrap();
        assert_eq!(win.player.as_deref(), Some("player2"));
        // pot 60, winner staked 20
        assert_eq!(win.value, 40);
        assert_eq!(game.players()[1].cash_balance(), 40);
    }

    #[test]
    fn the_deal_follows_the_rotated_order() {
        // hand 1 starts at player1; hand 2 at player2; hand 3 at player3
        let players = scripted_players(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        let config = GameConfig {
            carry_pot: false,
            ..GameConfig::default()
        };
        let mut game = Game::new("g", config, players, SEED).unwrap();
        for hand in 0..3u8 {
            game.play_hand_with_deal(&[Card::new(7), Card::new(5), Card::new(3)])
                .unwrap();
            let first = (hand as usize) % 3;
            assert_eq!(game.players()[first].card(), Some(Card::new(7)));
        }
    }
}
