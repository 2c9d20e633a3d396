//! Pits every bundled strategy against every other across many seeded
//! games and tabulates wins and expected value per hand. Every pairing
//! runs in its own game with its own players and audit log, so the sweep
//! parallelizes cleanly.

use std::collections::BTreeMap;
use std::error::Error;

use itertools::Itertools;
use pokerlite_core::config::GameConfig;
use pokerlite_core::deck::DeckSeed;
use pokerlite_core::game::Game;
use pokerlite_core::audit::Description;
use pokerlite_core::player::{BettingStrategy, Player};
use pokerlite_core::strategy::{StrategyTable, ThresholdStrategy};
use pokerlite_core::{Currency, GameError};
use rayon::prelude::*;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, default_value = "2000")]
    hands: u32,
    #[structopt(long, default_value)]
    seed: DeckSeed,
}

#[derive(Debug, Clone)]
enum Candidate {
    Threshold(ThresholdStrategy),
    Table(StrategyTable),
}

impl Candidate {
    fn boxed(&self) -> Box<dyn BettingStrategy> {
        match self {
            Candidate::Threshold(s) => Box::new(s.clone()),
            Candidate::Table(s) => Box::new(s.clone()),
        }
    }
}

fn candidates() -> Vec<(&'static str, Candidate)> {
    vec![
        (
            "cautious",
            Candidate::Threshold(ThresholdStrategy::cautious()),
        ),
        (
            "aggressive",
            Candidate::Threshold(ThresholdStrategy::aggressive()),
        ),
        ("balanced", Candidate::Table(StrategyTable::balanced())),
        ("tight", Candidate::Table(StrategyTable::tight())),
    ]
}

struct Pairing {
    first: &'static str,
    second: &'static str,
    wins: [u64; 2],
    carries: u64,
    net: [Currency; 2],
}

fn run_pairing(
    hands: u32,
    base_seed: &DeckSeed,
    (ia, first): (usize, &(&'static str, Candidate)),
    (ib, second): (usize, &(&'static str, Candidate)),
) -> Result<Pairing, GameError> {
    // Every pairing plays a different but reproducible deck sequence.
    let mut bytes = base_seed.to_bytes();
    bytes[0] ^= ia as u8;
    bytes[1] ^= ib as u8;
    let seed = DeckSeed::new(bytes);
    let players = vec![
        Player::new(first.0, first.1.boxed()),
        Player::new(second.0, second.1.boxed()),
    ];
    let game_id = format!("sim-{}-{}", first.0, second.0);
    let mut game = Game::new(game_id, GameConfig::default(), players, seed)?;
    game.play(hands)?;
    let mut wins = [0u64; 2];
    let mut carries = 0u64;
    for r in game.audit_log().records() {
        match r.description {
            Description::Win => {
                if r.player.as_deref() == Some(first.0) {
                    wins[0] += 1;
                } else {
                    wins[1] += 1;
                }
            }
            Description::Checked if r.value > 0 => carries += 1,
            _ => {}
        }
    }
    let net = [
        game.players()[0].cash_balance(),
        game.players()[1].cash_balance(),
    ];
    Ok(Pairing {
        first: first.0,
        second: second.0,
        wins,
        carries,
        net,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    let candidates = candidates();
    let pairs: Vec<(usize, usize)> = (0..candidates.len())
        .cartesian_product(0..candidates.len())
        .filter(|(a, b)| a != b)
        .collect();
    let results: Result<Vec<Pairing>, GameError> = pairs
        .par_iter()
        .map(|&(ia, ib)| {
            run_pairing(
                opt.hands,
                &opt.seed,
                (ia, &candidates[ia]),
                (ib, &candidates[ib]),
            )
        })
        .collect();
    let results = results?;

    println!(
        "{} hands per pairing, seed {}",
        opt.hands, opt.seed
    );
    println!(
        "{:<12} {:<12} {:>7} {:>7} {:>8} {:>9} {:>9} {:>10} {:>10}",
        "first", "second", "wins1", "wins2", "carries", "net1", "net2", "ev1/hand", "ev2/hand"
    );
    for p in &results {
        println!(
            "{:<12} {:<12} {:>7} {:>7} {:>8} {:>9} {:>9} {:>10.4} {:>10.4}",
            p.first,
            p.second,
            p.wins[0],
            p.wins[1],
            p.carries,
            p.net[0],
            p.net[1],
            p.net[0] as f64 / opt.hands as f64,
            p.net[1] as f64 / opt.hands as f64,
        );
    }

    // Totals over every pairing a strategy took part in, either seat.
    let mut totals: BTreeMap<&str, (Currency, u64)> = BTreeMap::new();
    for p in &results {
        let t = totals.entry(p.first).or_default();
        t.0 += p.net[0];
        t.1 += u64::from(opt.hands);
        let t = totals.entry(p.second).or_default();
        t.0 += p.net[1];
        t.1 += u64::from(opt.hands);
    }
    println!();
    println!("{:<12} {:>10} {:>10}", "strategy", "net", "ev/hand");
    for (name, (net, hands)) in &totals {
        println!(
            "{:<12} {:>10} {:>10.4}",
            name,
            net,
            *net as f64 / *hands as f64
        );
    }
    Ok(())
}
