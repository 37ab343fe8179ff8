//! The `analyze` subcommand: inspect a single position

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{
    board::{Board, Mark},
    eval::{self, Evaluation, Outcome},
    selector::Difficulty,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board layout, row-major ('.', ' ' or '_' empty, 'X'/'O' marks)
    #[arg(long)]
    pub board: String,

    /// Which mark the engine plays
    #[arg(long, default_value = "O", value_parser = parse_mark)]
    pub ai: Mark,

    /// Seed for the level-0 pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_mark(s: &str) -> std::result::Result<Mark, String> {
    match s {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" | "0" => Ok(Mark::O),
        other => Err(format!("expected X or O, got {other:?}")),
    }
}

/// Everything `analyze` reports about a position
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub board: String,
    pub ai: char,
    pub outcome: Outcome,
    pub score: Option<i32>,
    pub terms: eval::Terms,
    pub picks: Vec<LevelPick>,
}

#[derive(Debug, Serialize)]
pub struct LevelPick {
    pub level: u8,
    pub name: String,
    pub position: usize,
    pub row: usize,
    pub col: usize,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let report = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.board);
    println!();
    println!("engine plays {}", report.ai);
    match report.score {
        Some(score) => println!("outcome {:?}, positional score {}", report.outcome, score),
        None => println!("outcome {:?}", report.outcome),
    }
    println!(
        "terms: open-own {} / corners {} / opposite-corners {} / threats-against {} / open-opponent {}",
        report.terms.open_ai_lines,
        report.terms.ai_corners,
        report.terms.ai_opposite_corners,
        report.terms.player_threats,
        report.terms.open_player_lines,
    );
    for pick in &report.picks {
        println!(
            "level {} ({}): position {} (row {}, col {})",
            pick.level, pick.name, pick.position, pick.row, pick.col
        );
    }
    Ok(())
}

/// Evaluate the position and, when moves remain, ask every tier for its pick
pub fn run(args: &AnalyzeArgs) -> Result<PositionReport> {
    let board = Board::from_layout(&args.board, args.ai)?;
    let outcome = eval::outcome(&board);
    let score = match eval::evaluate(&board) {
        Evaluation::Heuristic(score) => Some(score),
        _ => None,
    };

    let mut picks = Vec::new();
    if outcome == Outcome::Ongoing {
        for level in 0..=4u8 {
            let difficulty = Difficulty::from_level(level)?;
            let mut selector = difficulty.build_selector(args.seed);
            let mut probe = board;
            let position = selector.choose(&mut probe)?;
            picks.push(LevelPick {
                level,
                name: difficulty.to_string(),
                position,
                row: position / 3,
                col: position % 3,
            });
        }
    }

    Ok(PositionReport {
        board: board.to_string(),
        ai: board.ai_mark().to_cell().to_char(),
        outcome,
        score,
        terms: eval::terms(&board),
        picks,
    })
}
