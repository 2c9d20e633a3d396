use std::error::Error;

use pokerlite_core::config::GameConfig;
use pokerlite_core::deck::DeckSeed;
use pokerlite_core::game::Game;
use pokerlite_core::audit::AuditRecord;
use pokerlite_core::player::{BettingStrategy, Player};
use pokerlite_core::strategy::{StrategyTable, ThresholdStrategy};
use pokerlite_core::{MAX_PLAYERS, MIN_PLAYERS};
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    #[structopt(short, default_value = "2")]
    n_players: usize,
    #[structopt(long, default_value = "10")]
    hands: u32,
    #[structopt(long, default_value)]
    seed: DeckSeed,
    #[structopt(
        long,
        help = "Return a checked-out pot to the players instead of carrying it"
    )]
    no_carry: bool,
    #[structopt(long, help = "Print the full audit trail after the game")]
    records: bool,
}

/// The house roster: one personality per seat.
fn roster(n: usize) -> Vec<Player> {
    let strategies: Vec<Box<dyn BettingStrategy>> = vec![
        Box::new(ThresholdStrategy::cautious()),
        Box::new(ThresholdStrategy::aggressive()),
        Box::new(StrategyTable::balanced()),
        Box::new(StrategyTable::tight()),
    ];
    strategies
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, s)| Player::new(format!("player{}", i + 1), s))
        .collect()
}

fn print_records(records: &[AuditRecord]) {
    const HEADERS: [&str; 6] = ["Game_Id", "Round", "Pot", "Description", "Player", "Value"];
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.game_id.clone(),
                r.round_number.to_string(),
                r.pot.to_string(),
                r.description.to_string(),
                r.player.clone().unwrap_or_else(|| "-".to_string()),
                r.value.to_string(),
            ]
        })
        .collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    let header = HEADERS
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{:<width$}", cell, width = w))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", line);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&opt.n_players) {
        return Err(format!(
            "the number of players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )
        .into());
    }
    let config = GameConfig {
        carry_pot: !opt.no_carry,
        ..GameConfig::default()
    };
    let game_id = format!("game-{}", opt.seed);
    let mut game = Game::new(game_id, config, roster(opt.n_players), opt.seed)?;
    game.play(opt.hands)?;
    if opt.records {
        print_records(game.audit_log().records());
    }
    for (name, balance) in game.balances() {
        println!("Player {} balance is: {} coins", name, balance);
    }
    if game.pot() != 0 {
        println!("Unclaimed pot of {} coins left on the table", game.pot());
    }
    Ok(())
}
