//! Placement rule and board view integration tests.
//!
//! These tests go through the public API only: the rule functions, the
//! composed rule set, the view and the reference host.

use std::cell::RefCell;

use camel_ring::core::{
    BoardSnapshot, CamelColor, Field, PlacedTile, PlayerId, SelectedTile, TileKind, Token,
    TurnContext,
};
use camel_ring::host::Table;
use camel_ring::rules::{eligible_fields, PlacementEligibility};
use camel_ring::view::{BoardView, Callbacks, PlacementOutcome, ViewState};

fn field(n: u8) -> Field {
    Field::new(n).unwrap()
}

fn tile(n: u8) -> PlacedTile {
    PlacedTile::new(TileKind::Oasis, field(n), PlayerId::new(0))
}

fn camel(color: CamelColor, n: u8) -> Token {
    Token::new(color, field(n))
}

fn excluded(tiles: &[PlacedTile], tokens: &[Token]) -> Vec<u8> {
    let open = eligible_fields(tiles, tokens);
    Field::all()
        .filter(|f| !open.contains(f))
        .map(Field::raw)
        .collect()
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_tile_on_last_field_excludes_wraparound() {
    assert_eq!(excluded(&[tile(16)], &[]), vec![1, 15, 16]);
}

#[test]
fn test_tile_on_first_field_excludes_wraparound() {
    assert_eq!(excluded(&[tile(1)], &[]), vec![1, 2, 16]);
}

#[test]
fn test_interior_tile_excludes_three_fields() {
    assert_eq!(excluded(&[tile(8)], &[]), vec![7, 8, 9]);
}

#[test]
fn test_camel_excludes_exact_field_only() {
    assert_eq!(excluded(&[], &[camel(CamelColor::Blue, 5)]), vec![5]);
}

#[test]
fn test_eligibility_is_idempotent() {
    let tiles = [tile(4), tile(11)];
    let tokens = [camel(CamelColor::Green, 14), camel(CamelColor::White, 14)];
    assert_eq!(eligible_fields(&tiles, &tokens), eligible_fields(&tiles, &tokens));
}

/// Tiles on 1 and 2 close 16 (wraparound from 1), 1, 2 and 3; 15 stays open.
#[test]
fn test_scenario_two_tiles_at_start() {
    let open: Vec<u8> = eligible_fields(&[tile(1), tile(2)], &[] as &[Token])
        .iter()
        .map(|f| f.raw())
        .collect();
    assert_eq!(open, (4..=15).collect::<Vec<_>>());
    assert!(open.contains(&15));
}

#[test]
fn test_scenario_single_camel() {
    let open: Vec<u8> = eligible_fields(&[] as &[PlacedTile], &[camel(CamelColor::Orange, 10)])
        .iter()
        .map(|f| f.raw())
        .collect();
    let expected: Vec<u8> = (1..=16).filter(|&n| n != 10).collect();
    assert_eq!(open, expected);
}

#[test]
fn test_full_board_leaves_nothing_open() {
    let tiles: Vec<_> = [1, 4, 7, 10, 13].into_iter().map(tile).collect();
    let tokens = [camel(CamelColor::Yellow, 15)];
    assert!(eligible_fields(&tiles, &tokens).is_empty());
}

#[test]
fn test_composed_rules_agree_with_functions() {
    let board = BoardSnapshot::new()
        .with_tile(tile(3))
        .with_tile(tile(16))
        .with_token(camel(CamelColor::Blue, 8))
        .with_token(camel(CamelColor::Green, 9));
    assert_eq!(
        PlacementEligibility::standard().eligible_fields(&board),
        eligible_fields(&board.tiles, &board.tokens)
    );
}

// =============================================================================
// View and host
// =============================================================================

#[test]
fn test_out_of_turn_click_warns_without_placing() {
    let view = BoardView::default();
    let selected = SelectedTile::new(TileKind::Mirage, PlayerId::new(1));
    let turn = TurnContext::new(PlayerId::new(0), PlayerId::new(1));

    let added = RefCell::new(Vec::new());
    let warnings = RefCell::new(Vec::new());
    let mut callbacks = Callbacks::new(
        |t: PlacedTile| added.borrow_mut().push(t),
        |_: &PlacedTile| {},
        |msg: &str| warnings.borrow_mut().push(msg.to_string()),
    );

    let outcome = view.handle_tile_placement(field(6), Some(&selected), &turn, &mut callbacks);

    assert_eq!(outcome, PlacementOutcome::NotYourTurn);
    assert!(added.borrow().is_empty());
    assert_eq!(warnings.borrow().len(), 1);
}

#[test]
fn test_select_and_click_places_once() {
    let view = BoardView::default();
    let selected = SelectedTile::new(TileKind::Oasis, PlayerId::new(2));
    let turn = TurnContext::own_turn(PlayerId::new(2));

    // Calls are recorded in order to check add comes before the clear.
    let calls = RefCell::new(Vec::new());
    let mut callbacks = Callbacks::new(
        |t: PlacedTile| calls.borrow_mut().push(("add", t)),
        |t: &PlacedTile| calls.borrow_mut().push(("placed", *t)),
        |_: &str| panic!("no warning expected"),
    );

    view.handle_tile_placement(field(12), Some(&selected), &turn, &mut callbacks);

    let expected = PlacedTile::new(TileKind::Oasis, field(12), PlayerId::new(2));
    assert_eq!(*calls.borrow(), vec![("add", expected), ("placed", expected)]);
}

#[test]
fn test_table_round_trip() {
    let view = BoardView::default();
    let board = BoardSnapshot::new().with_token(camel(CamelColor::White, 2));
    let mut table = Table::new(board, TurnContext::own_turn(PlayerId::new(0)));

    // Idle: no overlay.
    let frame = view.render(table.board(), table.selection());
    assert_eq!(frame.state, ViewState::Idle);
    assert!(frame.targets.is_empty());

    // Selecting: overlay excludes the camel's field.
    table.select(TileKind::Mirage);
    let frame = view.render(table.board(), table.selection());
    assert_eq!(frame.targets.len(), 15);
    assert!(frame.target_at(field(2)).is_none());

    // Click: tile lands, selection cleared, back to idle.
    let selection = table.selection().copied();
    let turn = *table.turn();
    let outcome = view.handle_tile_placement(field(9), selection.as_ref(), &turn, &mut table);
    assert!(matches!(outcome, PlacementOutcome::Placed(_)));
    assert_eq!(table.board().tile_at(field(9)).map(|t| t.kind), Some(TileKind::Mirage));

    let frame = view.render(table.board(), table.selection());
    assert_eq!(frame.state, ViewState::Idle);
    assert_eq!(frame.tiles.len(), 1);

    // Next selection sees the new tile's neighbours closed.
    table.select(TileKind::Oasis);
    let frame = view.render(table.board(), table.selection());
    for closed in [2, 8, 9, 10] {
        assert!(frame.target_at(field(closed)).is_none(), "field {closed}");
    }
    assert_eq!(frame.targets.len(), 12);
}

#[test]
fn test_table_rejects_out_of_turn_and_keeps_selection() {
    let view = BoardView::default();
    let mut table = Table::new(
        BoardSnapshot::new(),
        TurnContext::new(PlayerId::new(1), PlayerId::new(0)),
    );
    table.select(TileKind::Oasis);

    let selection = table.selection().copied();
    let turn = *table.turn();
    let outcome = view.handle_tile_placement(field(4), selection.as_ref(), &turn, &mut table);

    assert_eq!(outcome, PlacementOutcome::NotYourTurn);
    assert!(table.board().tiles.is_empty());
    assert!(table.selection().is_some());
    assert_eq!(table.warnings().len(), 1);
    assert_eq!(
        view.render(table.board(), table.selection()).state,
        ViewState::Selecting(SelectedTile::new(TileKind::Oasis, PlayerId::new(0)))
    );
}
