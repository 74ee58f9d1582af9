use std::path::PathBuf;

use clap::Parser;
use risiko_cli::input::resolve_session;
use risiko_engine::{simulate, SimulationRequest};

const DEFAULT_SEED: u64 = 12345;

#[derive(Parser)]
#[command(name = "risiko-simulate")]
#[command(about = "Monte Carlo sim: slot win rates for a dice matchup")]
struct Args {
    /// Number of rolls to sample
    #[arg(long, default_value_t = 10_000)]
    trials: u32,

    /// RNG seed (default 12345)
    #[arg(long)]
    seed: Option<u64>,

    /// Attacker dice committed (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    attackers: Option<u8>,

    /// Defender dice committed (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    defenders: Option<u8>,

    /// Optional session file supplying counts (and seed, unless --seed is given)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    risiko_cli::init_tracing();
    let args = Args::parse();

    let session = resolve_session(args.config.as_deref(), args.seed, args.attackers, args.defenders)?;
    let req = SimulationRequest {
        seed: session.seed.unwrap_or(DEFAULT_SEED),
        trials: args.trials,
        attackers: session.attackers,
        defenders: session.defenders,
    };
    let stats = simulate(&req);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("risiko-simulate results");
    println!("-----------------------");
    println!("trials:             {}", stats.trials);
    println!("matchup:            {} vs {}", stats.attackers, stats.defenders);
    println!();
    for (slot, rate) in stats.slot_attacker_win_rate.iter().enumerate() {
        println!("slot {} attacker:    {:.1}%", slot, rate * 100.0);
    }
    println!("avg attacker wins:  {:.2}", stats.avg_attacker_wins);
    println!("avg defender wins:  {:.2}", stats.avg_defender_wins);
    println!("attacker sweeps:    {:.1}%", stats.attacker_sweep_rate * 100.0);
    println!("defender sweeps:    {:.1}%", stats.defender_sweep_rate * 100.0);

    Ok(())
}
