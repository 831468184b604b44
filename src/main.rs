use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use rand::prelude::*;

use twenty_forty_eight::data::{load_model, save_model};
use twenty_forty_eight::game::simulate_game::GameOutcome;
use twenty_forty_eight::logging::setup_logging;
use twenty_forty_eight::recording::{CsvWriter, PlayerKind};
use twenty_forty_eight::services::GameRunner;
use twenty_forty_eight::strategy::policy::Policy;

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum GameMode {
    /// Interactive terminal game
    Play,
    /// One policy-driven game, verbose
    Auto,
    /// Batch of policy-driven games with summary statistics
    Sim,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum PolicyCli {
    Random,
    Greedy,
}

impl From<PolicyCli> for Policy {
    fn from(cli: PolicyCli) -> Self {
        match cli {
            PolicyCli::Random => Policy::Random,
            PolicyCli::Greedy => Policy::Greedy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twenty-forty-eight")]
struct Config {
    /// Game mode
    #[arg(long, value_enum, default_value = "play")]
    mode: GameMode,

    /// Board side length
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Number of games to simulate (sim mode)
    #[arg(short = 'g', long, default_value_t = 100)]
    games: usize,

    /// Random seed; omit for OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Auto-play policy (auto and sim modes)
    #[arg(long, value_enum, default_value = "greedy")]
    policy: PolicyCli,

    /// Directory for CSV move recordings; omit to disable recording
    #[arg(long)]
    record_dir: Option<PathBuf>,

    /// Load a saved game instead of starting fresh (play mode)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the game here when the interactive session ends
    #[arg(long)]
    save: Option<PathBuf>,

    /// Directory for rotating log files; omit to log to stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    setup_logging("info", config.log_dir.as_deref())?;

    match config.mode {
        GameMode::Play => run_play(&config),
        GameMode::Auto => run_auto(&config),
        GameMode::Sim => run_sim(&config),
    }
}

fn run_play(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut runner = match &config.load {
        Some(path) => {
            let model = load_model(path)?;
            log::info!("Resumed game from {}", path.display());
            GameRunner::from_model(model, config.seed)
        }
        None => GameRunner::new(config.size, config.seed),
    };
    if config.record_dir.is_some() {
        runner = runner.with_recording(PlayerKind::Human);
    }

    let stdin = std::io::stdin();
    runner.play_interactive(BufReader::new(stdin.lock()), std::io::stdout())?;

    if let Some(path) = &config.save {
        save_model(path, runner.model())?;
        log::info!("Game saved to {}", path.display());
    }
    write_recording(config, runner)?;
    Ok(())
}

fn run_auto(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let policy: Policy = config.policy.clone().into();
    let player = match policy {
        Policy::Random => PlayerKind::Random,
        Policy::Greedy => PlayerKind::Greedy,
    };

    let mut runner = GameRunner::new(config.size, config.seed);
    if config.record_dir.is_some() {
        runner = runner.with_recording(player);
    }

    let outcome = runner.play_auto(policy);
    log::info!(
        "{} played {} moves: score {}, highest tile {}{}",
        policy,
        outcome.moves,
        outcome.score,
        outcome.highest_tile,
        if outcome.reached_max_tile {
            " (reached 2048!)"
        } else {
            ""
        }
    );
    println!("{}", runner.model());
    write_recording(config, runner)?;
    Ok(())
}

fn run_sim(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let policy: Policy = config.policy.clone().into();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log::info!("Simulating {} games with the {} policy", config.games, policy);

    let mut outcomes: Vec<GameOutcome> = Vec::with_capacity(config.games);
    for game_idx in 0..config.games {
        let game_seed: u64 = rng.random();
        let mut runner = GameRunner::new(config.size, Some(game_seed));
        outcomes.push(runner.play_auto(policy));

        if (game_idx + 1) % 10 == 0 {
            log::info!("{}/{} games done", game_idx + 1, config.games);
        }
    }

    let scores: Vec<f64> = outcomes.iter().map(|o| o.score as f64).collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance =
        scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    let max = outcomes.iter().map(|o| o.score).max().unwrap_or(0);

    println!("=== {} policy over {} games ===", policy, config.games);
    println!("mean score: {:.1}", mean);
    println!("std dev:    {:.1}", variance.sqrt());
    println!("max score:  {}", max);
    println!("--- highest tile reached ---");
    let mut tile = 2u32;
    let top = outcomes.iter().map(|o| o.highest_tile).max().unwrap_or(2);
    while tile <= top {
        let count = outcomes.iter().filter(|o| o.highest_tile == tile).count();
        if count > 0 {
            println!(
                "{:>5}: {:>4} ({:.1}%)",
                tile,
                count,
                100.0 * count as f64 / outcomes.len() as f64
            );
        }
        tile *= 2;
    }
    Ok(())
}

fn write_recording(
    config: &Config,
    runner: GameRunner,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match &config.record_dir {
        Some(dir) => dir,
        None => return Ok(()),
    };
    if let Some(record) = runner.into_record() {
        let mut writer = CsvWriter::new(dir, record.board_size)?;
        writer.write_game(&record)?;
        log::info!(
            "Recorded {} moves of game {} under {}",
            record.moves.len(),
            record.game_id,
            dir.display()
        );
    }
    Ok(())
}
