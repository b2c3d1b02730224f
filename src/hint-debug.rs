use anyhow::{anyhow, Context};
use clap::Parser;

use gebeta_hint::engine::evaluator::score_hole;
use gebeta_hint::{suggest_move, Board, Player, Stores, Variant};

/// Prints the hint the backend would give for a board.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board rows as JSON, e.g. '[[4,4,4,4,4,4],[4,4,4,4,4,4]]'
    board: String,
    /// Player to move (0 or 1)
    #[arg(long, default_value_t = 0)]
    player: i64,
    /// Board variant, '12-hole' or '18-hole'
    #[arg(long, default_value = "12-hole")]
    variant: String,
    /// Captured seeds of both players
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    stores: Option<Vec<u32>>,
    /// Print the score of every playable hole
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board: Board = serde_json::from_str(&args.board).context("Failed to parse board")?;
    let player = Player::try_from(args.player)?;
    let variant: Variant = args.variant.parse()?;
    let stores = match args.stores.as_deref() {
        Some(&[first, second]) => Stores([first, second]),
        _ => Stores::default(),
    };

    if args.verbose {
        let sides = board.sides(player, variant)?;
        for (hole, seeds) in sides.playable() {
            println!(
                "hole {}: {} seeds, score {}",
                hole,
                seeds,
                score_hole(&sides, hole, seeds)
            );
        }
    }

    let suggestion = suggest_move(&board, player, variant, stores)?
        .ok_or_else(|| anyhow!("No valid moves available"))?;
    println!(
        "{} ({} strategy)",
        suggestion.reasoning(),
        suggestion.strategy
    );
    Ok(())
}
