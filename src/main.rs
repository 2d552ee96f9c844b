//! Camel Ring - command-line board viewer.

mod cli;

use anyhow::{Context, Result};
use camel_ring::core::{BoardConfig, BoardRng, BoardSnapshot, Field, PlayerId, TileKind, TurnContext};
use camel_ring::host::Table;
use camel_ring::setup::random_board;
use camel_ring::view::{render_ascii, BoardView, PlacementOutcome};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BoardConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let view = BoardView::new(config);

    match cli.command {
        Command::Show { board, select } => run_show(&view, board, select.as_deref()),
        Command::Place {
            board,
            kind,
            field,
            acting,
        } => run_place(&view, board, &kind, &field, acting),
        Command::Random {
            seed,
            players,
            camels,
            select,
        } => run_random(&view, seed, players, camels, select.as_deref()),
    }
}

fn table_from_args(args: &BoardArgs, acting: Option<u8>) -> Result<Table> {
    let board = BoardSnapshot::parse(&args.tiles, &args.camels).context("parsing board")?;
    let local = PlayerId::new(args.player);
    let acting = acting.map_or(local, PlayerId::new);
    Ok(Table::new(board, TurnContext::new(acting, local)))
}

fn select(table: &mut Table, kind: Option<&str>) -> Result<()> {
    if let Some(kind) = kind {
        table.select(kind.parse::<TileKind>()?);
    }
    Ok(())
}

fn print_table(view: &BoardView, table: &Table) {
    let frame = view.render(table.board(), table.selection());
    print!("{}", render_ascii(&frame));
}

/// Draw a board given on the command line.
#[instrument(skip(view))]
fn run_show(view: &BoardView, args: BoardArgs, kind: Option<&str>) -> Result<()> {
    let mut table = table_from_args(&args, None)?;
    select(&mut table, kind)?;
    print_table(view, &table);
    Ok(())
}

/// Select a tile, click a field, and draw the board afterwards.
#[instrument(skip(view))]
fn run_place(
    view: &BoardView,
    args: BoardArgs,
    kind: &str,
    field: &str,
    acting: Option<u8>,
) -> Result<()> {
    let mut table = table_from_args(&args, acting)?;
    select(&mut table, Some(kind))?;
    let field: Field = field.parse()?;

    let eligible = view.eligibility().is_eligible(field, table.board());
    if !eligible {
        let reasons = view.eligibility().explain(field, table.board());
        anyhow::bail!("{field} is not open for placement ({})", reasons.join(", "));
    }

    let selection = table.selection().copied();
    let turn = *table.turn();
    match view.handle_tile_placement(field, selection.as_ref(), &turn, &mut table) {
        PlacementOutcome::Placed(tile) => info!(?tile, "placed"),
        PlacementOutcome::NotYourTurn => {
            for warning in table.warnings() {
                eprintln!("warning: {warning}");
            }
        }
        PlacementOutcome::NothingSelected => {}
    }

    print_table(view, &table);
    Ok(())
}

/// Draw a seeded random opening.
#[instrument(skip(view))]
fn run_random(
    view: &BoardView,
    seed: u64,
    players: usize,
    camels: usize,
    kind: Option<&str>,
) -> Result<()> {
    let mut rng = BoardRng::new(seed);
    let board = random_board(&mut rng, players, camels);
    let mut table = Table::new(board, TurnContext::own_turn(PlayerId::new(0)));
    select(&mut table, kind)?;
    print_table(view, &table);
    Ok(())
}
