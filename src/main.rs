#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use solitaire_battleship::{
    cli::{run_session, Console, SessionOptions},
    init_logging, GameConfig, RepeatMissPolicy, MAX_MISSES,
};

/// Sink the hidden fleet before you run out of misses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = MAX_MISSES, help = "Misses allowed per round")]
    max_misses: usize,
    #[arg(long, help = "Repeated misses on the same cell do not count again")]
    free_repeat_misses: bool,
    #[arg(long, help = "Print a JSON summary line after each round")]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let policy = if cli.free_repeat_misses {
        RepeatMissPolicy::Free
    } else {
        RepeatMissPolicy::Charge
    };
    let config = GameConfig::new(cli.max_misses, policy);
    config.validate()?;

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let stats = run_session(
        &mut console,
        &mut rng,
        SessionOptions {
            config,
            json_summary: cli.json,
        },
    )?;
    log::info!(
        "session over: {} round(s), {} won, {} lost",
        stats.rounds,
        stats.wins,
        stats.losses
    );
    Ok(())
}
