//! Command-line interface for camel-ring.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Camel Ring - desert tile placement on the race track
#[derive(Parser, Debug)]
#[command(name = "camel-ring")]
#[command(about = "Show legal desert tile placements on a 16-field camel track", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board view config (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board given on the command line.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Tiles as `field:kind[@owner]`, comma separated (e.g. `1:oasis,9:mirage@2`)
    #[arg(long, default_value = "")]
    pub tiles: String,

    /// Camels as `color:field`, comma separated, bottom of each stack first
    #[arg(long, default_value = "")]
    pub camels: String,

    /// Local player
    #[arg(long, default_value = "0")]
    pub player: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw a board, optionally with the placement overlay for a selected tile
    Show {
        #[command(flatten)]
        board: BoardArgs,

        /// Tile face to select (oasis or mirage)
        #[arg(long)]
        select: Option<String>,
    },

    /// Click a field with a tile selected and draw the result
    Place {
        #[command(flatten)]
        board: BoardArgs,

        /// Tile face to place (oasis or mirage)
        #[arg(long)]
        kind: String,

        /// Field to click (1-16)
        #[arg(long)]
        field: String,

        /// Player whose turn it is (defaults to the local player)
        #[arg(long)]
        acting: Option<u8>,
    },

    /// Draw a random seeded opening position
    Random {
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Number of players placing a tile
        #[arg(long, default_value = "4")]
        players: usize,

        /// Number of camels on the track
        #[arg(long, default_value = "5")]
        camels: usize,

        /// Tile face to select after setup
        #[arg(long)]
        select: Option<String>,
    },
}
