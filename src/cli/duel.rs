//! The `duel` subcommand: orchestrated rounds against a stand-in opponent

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    eval::Outcome,
    selector::Difficulty,
    session::{Phase, Session},
};

#[derive(Args, Debug)]
pub struct DuelArgs {
    /// Difficulty tier the engine plays at
    #[arg(long, value_enum, default_value_t = Difficulty::Minimax)]
    pub level: Difficulty,

    /// Stand-in selector supplying the "human" moves
    #[arg(long, value_enum, default_value_t = Difficulty::Random)]
    pub opponent: Difficulty,

    /// Number of rounds to play
    #[arg(long, default_value_t = 100)]
    pub rounds: u32,

    /// Seed for the coin flip and any random selector
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a duel run
#[derive(Debug, Serialize)]
pub struct DuelSummary {
    pub level: String,
    pub opponent: String,
    pub rounds: u32,
    pub ai_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

pub fn execute(args: DuelArgs) -> Result<()> {
    let summary = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} vs {} over {} rounds: engine {} / opponent {} / drawn {}",
            summary.level,
            summary.opponent,
            summary.rounds,
            summary.ai_wins,
            summary.opponent_wins,
            summary.draws,
        );
    }
    Ok(())
}

/// Play the configured number of rounds and tally the outcomes
pub fn run(args: &DuelArgs) -> Result<DuelSummary> {
    let mut session = Session::with_seed(args.level, args.seed);
    // the stand-in plays the human side through a role-swapped board view
    let mut opponent = args.opponent.build_selector(args.seed.map(|s| s ^ 0x9e37_79b9));

    let bar = progress_bar(args.rounds);
    let mut draws = 0u32;

    for round in 0..args.rounds {
        if round == 0 {
            session.start_round()?;
        } else {
            session.replay()?;
        }

        while session.phase() == Phase::InProgress {
            let mut mirrored = session.engine().board().swapped_roles();
            let pos = opponent.choose(&mut mirrored)?;
            let outcome = session.play_player(pos)?;
            if outcome == Outcome::Draw {
                draws += 1;
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let scores = session.scoreboard();
    Ok(DuelSummary {
        level: args.level.to_string(),
        opponent: args.opponent.to_string(),
        rounds: args.rounds,
        ai_wins: scores.ai_wins,
        opponent_wins: scores.player_wins,
        draws,
    })
}

fn progress_bar(rounds: u32) -> ProgressBar {
    let bar = ProgressBar::new(rounds as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rounds ({eta})")
    {
        bar.set_style(style);
    }
    bar
}
