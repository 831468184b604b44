//! Strategy benchmark - Random vs Greedy over a shared set of seeded games.
//!
//! Both policies play the same per-game seeds so the spawn sequences match
//! and the comparison is fair.

use clap::Parser;
use csv::Writer;
use rand::prelude::*;
use std::error::Error;

use twenty_forty_eight::logging::setup_logging;
use twenty_forty_eight::game::simulate_game::GameOutcome;
use twenty_forty_eight::services::GameRunner;
use twenty_forty_eight::strategy::policy::Policy;

#[derive(Parser, Debug)]
#[command(
    name = "benchmark-strategies",
    about = "Compare the Random and Greedy auto-play policies"
)]
struct Args {
    /// Number of games per policy
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Board side length
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output CSV file for per-game results
    #[arg(short, long, default_value = "data/benchmark_results.csv")]
    output: String,
}

#[derive(Debug, Clone)]
struct PolicyStats {
    policy: Policy,
    mean_score: f64,
    std_dev: f64,
    max_score: u32,
    mean_moves: f64,
    rate_512: f64,
    rate_1024: f64,
    rate_2048: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging("info", None)?;
    let args = Args::parse();

    log::info!("Strategy benchmark");
    log::info!("Games per policy: {}", args.games);
    log::info!("Board size: {}", args.size);
    log::info!("Seed: {}", args.seed);

    // One seed per game, shared by both policies.
    let mut rng = StdRng::seed_from_u64(args.seed);
    let game_seeds: Vec<u64> = (0..args.games).map(|_| rng.random()).collect();

    let mut all_outcomes = Vec::new();
    let mut stats = Vec::new();

    for policy in [Policy::Random, Policy::Greedy] {
        log::info!("Running {} games with {}...", args.games, policy);
        let mut outcomes = Vec::with_capacity(args.games);

        for (game_idx, &game_seed) in game_seeds.iter().enumerate() {
            let mut runner = GameRunner::new(args.size, Some(game_seed));
            let outcome = runner.play_auto(policy);
            outcomes.push(outcome);

            if (game_idx + 1) % 20 == 0 {
                log::info!("  {}/{} games", game_idx + 1, args.games);
            }
        }

        stats.push(summarize(policy, &outcomes));
        all_outcomes.push((policy, outcomes));
    }

    log::info!("=== Results ===");
    for s in &stats {
        log::info!(
            "{:>6}: mean {:.1} (±{:.1}), max {}, mean moves {:.1}",
            s.policy.to_string(),
            s.mean_score,
            s.std_dev,
            s.max_score,
            s.mean_moves
        );
        log::info!(
            "        512: {:.1}%  1024: {:.1}%  2048: {:.1}%",
            s.rate_512 * 100.0,
            s.rate_1024 * 100.0,
            s.rate_2048 * 100.0
        );
    }

    save_results_csv(&args.output, &game_seeds, &all_outcomes)?;
    log::info!("Per-game results written to {}", args.output);

    Ok(())
}

fn summarize(policy: Policy, outcomes: &[GameOutcome]) -> PolicyStats {
    let n = outcomes.len() as f64;
    let mean_score = outcomes.iter().map(|o| o.score as f64).sum::<f64>() / n;
    let variance = outcomes
        .iter()
        .map(|o| (o.score as f64 - mean_score).powi(2))
        .sum::<f64>()
        / n;
    let reach_rate =
        |value: u32| outcomes.iter().filter(|o| o.highest_tile >= value).count() as f64 / n;

    PolicyStats {
        policy,
        mean_score,
        std_dev: variance.sqrt(),
        max_score: outcomes.iter().map(|o| o.score).max().unwrap_or(0),
        mean_moves: outcomes.iter().map(|o| o.moves as f64).sum::<f64>() / n,
        rate_512: reach_rate(512),
        rate_1024: reach_rate(1024),
        rate_2048: reach_rate(2048),
    }
}

fn save_results_csv(
    path: &str,
    game_seeds: &[u64],
    all_outcomes: &[(Policy, Vec<GameOutcome>)],
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "policy",
        "game",
        "seed",
        "score",
        "highest_tile",
        "moves",
        "reached_2048",
    ])?;

    for (policy, outcomes) in all_outcomes {
        for (game_idx, outcome) in outcomes.iter().enumerate() {
            writer.write_record([
                policy.to_string(),
                game_idx.to_string(),
                game_seeds[game_idx].to_string(),
                outcome.score.to_string(),
                outcome.highest_tile.to_string(),
                outcome.moves.to_string(),
                (outcome.reached_max_tile as u8).to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
