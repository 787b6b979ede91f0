use amethyst_execution::RandomDraws;
use amethyst_simulator::{fairness, Config, Simulator};
use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "amethyst-simulator", about = "Play jackpot rounds without a screen.")]
struct Args {
    /// Path to the YAML round configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Seed for winner draws (overrides the config; entropy when neither is set).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to play (overrides the config).
    #[arg(long)]
    rounds: Option<u64>,

    /// Write archived round records to this file as JSON.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Run a fairness sweep with this many draws instead of playing rounds.
    #[arg(long)]
    fairness_draws: Option<usize>,

    /// Emit structured JSON logs.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = Level::from_str(log_level)
        .with_context(|| format!("invalid log level {log_level:?}"))?;
    let builder = tracing_subscriber::fmt().with_max_level(level);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn build_config(args: &Args, mut config: Config) -> Result<Config> {
    if let Some(0) = args.rounds {
        anyhow::bail!("rounds must be > 0 when set");
    }
    config.rounds = args.rounds.unwrap_or(config.rounds);
    config.seed = args.seed.or(config.seed);
    Ok(config)
}

fn draws(seed: Option<u64>) -> RandomDraws<ChaCha20Rng> {
    match seed {
        Some(seed) => RandomDraws::seeded(seed),
        None => RandomDraws::from_entropy(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let config = build_config(&args, config)?;
    init_tracing(&config.log_level, args.json_logs)?;
    info!(
        rounds = config.rounds,
        participants = config.participants.len(),
        seed = ?config.seed,
        "starting simulator"
    );

    if let Some(count) = args.fairness_draws {
        let rows = fairness(&config.participants, &mut draws(config.seed), count)
            .context("fairness sweep failed")?;
        for row in &rows {
            info!(
                participant = %row.id,
                expected = row.expected_percent,
                observed = row.observed_percent,
                sigma = row.sigma,
                "fairness"
            );
        }
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let seed = config.seed;
    let mut simulator = Simulator::new(config, draws(seed), StdRng::from_entropy())
        .context("failed to create simulator")?;
    let history = simulator.run().context("round failed")?;
    info!(
        rounds = history.len(),
        frames = simulator.frames().frames_requested(),
        "simulation finished"
    );

    if let Some(path) = &args.history {
        let json = serde_json::to_string_pretty(&history)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "history written");
    }
    Ok(())
}
