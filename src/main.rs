//! Terminal blackjack.

use std::io;
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use shoe21::{Game, GameOptions, Session, StandRule, TerminalInterface};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Dealer stand rule as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StandRuleArg {
    /// Stand only when every total is 17 or more.
    AllTotals,
    /// Stand on any 17, soft or hard.
    Any17,
}

impl From<StandRuleArg> for StandRule {
    fn from(arg: StandRuleArg) -> Self {
        match arg {
            StandRuleArg::AllTotals => Self::AllTotals,
            StandRuleArg::Any17 => Self::Any17,
        }
    }
}

/// Play blackjack against the house.
#[derive(Debug, Parser)]
#[command(name = "shoe21", version, about)]
struct Args {
    /// Packs in the shoe.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(4..=8))]
    decks: u8,

    /// Starting chip balance.
    #[arg(long, default_value_t = 500)]
    chips: usize,

    /// Table limit per bet.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    bet_limit: u64,

    /// Reshuffle the discards back in once fewer cards than this remain.
    #[arg(long, default_value_t = 52)]
    reshuffle_at: usize,

    /// Dealer stand rule.
    #[arg(long, value_enum, default_value_t = StandRuleArg::AllTotals)]
    stand_rule: StandRuleArg,

    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between dealer cards, in milliseconds.
    #[arg(long, default_value_t = 500)]
    dealer_delay_ms: u64,

    /// Disable ANSI colour.
    #[arg(long)]
    no_color: bool,

    /// Log engine events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "shoe21=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_starting_chips(args.chips)
        .with_bet_limit(usize::try_from(args.bet_limit).unwrap_or(usize::MAX))
        .with_reshuffle_threshold(args.reshuffle_at)
        .with_stand_rule(args.stand_rule.into());

    let game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "invalid table options");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(seed, decks = args.decks, "table opened");

    println!("Blackjack (type 'q' to quit)");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut terminal = TerminalInterface::new(stdin, stdout)
        .with_color(!args.no_color)
        .with_dealer_delay(Duration::from_millis(args.dealer_delay_ms));

    match Session::new(game).run(&mut terminal) {
        Ok(summary) => {
            if summary.broke {
                println!("You are out of chips. Game over.");
            } else {
                println!("Goodbye. You leave with {} chips.", summary.final_chips);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
