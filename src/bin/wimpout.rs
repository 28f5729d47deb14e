//! Play Cosmic Wimpout in the terminal.
//!
//! Usage: cargo run --bin wimpout -- --players 3 --bots 1 --goal 300

use std::io;

use clap::Parser;
use cosmic_wimpout::{
    ChoiceProvider, ConsoleDisplay, ConsolePrompter, Game, GameConfig, GameRng, ThresholdStrategy,
    TurnController,
};

#[derive(Parser, Debug)]
#[command(name = "wimpout")]
#[command(about = "Play Cosmic Wimpout against friends or bots")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// How many of the last seats are played automatically
    #[arg(short, long, default_value_t = 0)]
    bots: usize,

    /// Score that starts the final round
    #[arg(short, long, default_value_t = cosmic_wimpout::core::DEFAULT_GOAL)]
    goal: u32,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turn score at which bots bank
    #[arg(long, default_value_t = 100)]
    bank_at: u32,

    /// Play a single turn instead of a full match
    #[arg(long)]
    single_turn: bool,

    /// Log scoring decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut console = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    let mut bot = ThresholdStrategy::new(args.bank_at);
    let mut display = ConsoleDisplay::new(io::stdout());

    if args.single_turn {
        let mut rng = GameRng::new(seed);
        let choices: &mut dyn ChoiceProvider = if args.bots > 0 { &mut bot } else { &mut console };
        TurnController::new().play_turn(&mut rng, choices, &mut display)?;
        return Ok(());
    }

    if args.bots > args.players {
        anyhow::bail!("{} bots requested for {} players", args.bots, args.players);
    }

    let config = GameConfig::default()
        .with_players(args.players)
        .with_goal(args.goal)
        .with_seed(seed);
    let mut game = Game::new(config)?;
    let humans = args.players - args.bots;

    while let Some(player) = game.current_player() {
        let choices: &mut dyn ChoiceProvider = if player.index() < humans {
            &mut console
        } else {
            &mut bot
        };
        game.play_turn(choices, &mut display)?;
    }

    Ok(())
}
