use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use risiko_cli::{input::resolve_session, play, render::board_text};
use risiko_engine::SessionConfig;

#[derive(clap::Args)]
struct SessionArgs {
    /// RNG seed for determinism (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Attacker dice committed (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    attackers: Option<u8>,
    /// Defender dice committed (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    defenders: Option<u8>,
    /// JSON or YAML session file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print boards as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl SessionArgs {
    fn session(&self) -> anyhow::Result<SessionConfig> {
        resolve_session(self.config.as_deref(), self.seed, self.attackers, self.defenders)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Roll once and print the board
    Roll {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Interactive session on stdin: r, a1/a2, d1/d2, s, q
    Play {
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[derive(Parser)]
#[command(name = "risiko")]
#[command(version, about = "Attacker vs. defender dice duel")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    risiko_cli::init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roll { session } => {
            let ctl = session.session()?.controller();
            let board = ctl.board();
            if session.json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                println!("{}", board_text(&board));
            }
        }
        Cmd::Play { session } => {
            let mut ctl = session.session()?.controller();
            let stdin = io::stdin();
            play::run(
                &mut ctl,
                stdin.lock(),
                io::stdout().lock(),
                &play::Output { json: session.json },
            )?;
        }
    }
    Ok(())
}
