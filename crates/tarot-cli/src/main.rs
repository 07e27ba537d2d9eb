//! CLI frontend for the Systems Thinking Tarot.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Systems Thinking Tarot — structured randomness for pattern recognition",
    version,
    propagate_version = true
)]
struct Cli {
    /// Deck to read from: systems or risk
    #[arg(short, long, global = true, default_value = "systems")]
    deck: String,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a spread and print the reading
    Read {
        /// Spread key (see `tarot spreads`)
        #[arg(default_value = "three")]
        spread: String,

        /// RNG seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Draw cards without a spread
    Draw {
        /// Number of cards to draw
        count: usize,

        /// RNG seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the cards in the deck
    List {
        /// Only show one suit, or "major" for the Major Arcana
        #[arg(long)]
        suit: Option<String>,
    },

    /// Show a single card in full
    Show {
        /// Card name (case-insensitive)
        name: String,

        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the spreads available for the deck
    Spreads,

    /// Write one image-generation prompt file per card
    Prompts {
        /// Output directory
        #[arg(short, long, default_value = "resources/prompts")]
        output: PathBuf,
    },

    /// Export the deck to a different format
    Export {
        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the interactive reading menu
    Menu {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let deck = cli.deck.as_str();
    let result = match cli.command {
        Commands::Read { spread, seed } => commands::read::run(deck, &spread, seed),
        Commands::Draw { count, seed } => commands::draw::run(deck, count, seed),
        Commands::List { suit } => commands::list::run(deck, suit.as_deref()),
        Commands::Show { name, json } => commands::show::run(deck, &name, json),
        Commands::Spreads => commands::spreads::run(deck),
        Commands::Prompts { output } => commands::prompts::run(deck, &output),
        Commands::Export { format, output } => {
            commands::export::run(deck, &format, output.as_deref())
        }
        Commands::Menu { seed } => commands::menu::run(deck, seed),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
