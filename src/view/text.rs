//! Plain-text rendering of a frame.
//!
//! The 16 fields are laid out on the border of a 5x5 grid, the way the track
//! runs around the board: 1-5 along the top, 6-8 down the right side, 9-13
//! back along the bottom and 14-16 up the left side. Each cell shows the field
//! number followed by the tile symbol, the camel stack (bottom first) and `*`
//! when the field is a placement target.

use std::fmt::Write;

use super::board_view::ViewState;
use super::frame::BoardFrame;
use crate::core::{Field, TileKind};

const GRID: usize = 5;
const CONTENT_WIDTH: usize = 6;
const CELL_WIDTH: usize = CONTENT_WIDTH + 5;

/// Row and column of a field on the 5x5 border.
#[must_use]
pub fn grid_cell(field: Field) -> (usize, usize) {
    let n = usize::from(field.raw());
    match n {
        1..=5 => (0, n - 1),
        6..=8 => (n - 5, GRID - 1),
        9..=13 => (GRID - 1, 13 - n),
        _ => (GRID - 1 - (n - 13), 0),
    }
}

fn cell_contents(frame: &BoardFrame, field: Field) -> String {
    let mut contents = String::new();
    for sprite in frame.tiles.iter().filter(|s| s.tile.position == field) {
        contents.push(sprite.tile.kind.symbol());
    }
    for sprite in frame.camels.iter().filter(|s| s.field == field) {
        contents.push(sprite.camel.initial());
    }
    if frame.target_at(field).is_some() {
        contents.push('*');
    }
    contents.chars().take(CONTENT_WIDTH).collect()
}

/// Draw the frame as text, one line per grid row plus a status line.
#[must_use]
pub fn render_ascii(frame: &BoardFrame) -> String {
    let mut grid = vec![vec![" ".repeat(CELL_WIDTH); GRID]; GRID];
    for field in Field::all() {
        let (row, col) = grid_cell(field);
        grid[row][col] = format!(
            "[{:>2} {:<width$}]",
            field.raw(),
            cell_contents(frame, field),
            width = CONTENT_WIDTH
        );
    }

    let mut out = String::new();
    for row in &grid {
        let line = row.concat();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = match frame.state {
        ViewState::Idle => writeln!(out, "no tile selected"),
        ViewState::Selecting(selected) => writeln!(
            out,
            "{} holds the {} tile: {} open fields marked *",
            selected.owner,
            selected.kind,
            frame.targets.len()
        ),
    };
    let _ = writeln!(
        out,
        "legend: {} {}  {} {}  * open for placement",
        TileKind::Oasis.symbol(),
        TileKind::Oasis,
        TileKind::Mirage.symbol(),
        TileKind::Mirage
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSnapshot, CamelColor, PlacedTile, PlayerId, SelectedTile, Token};
    use crate::view::BoardView;

    fn field(n: u8) -> Field {
        Field::new(n).unwrap()
    }

    #[test]
    fn test_grid_cells_cover_border_once() {
        let mut seen = std::collections::HashSet::new();
        for f in Field::all() {
            let (row, col) = grid_cell(f);
            assert!(row == 0 || row == GRID - 1 || col == 0 || col == GRID - 1, "{f}");
            assert!(seen.insert((row, col)), "{f} shares a cell");
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_neighbours_share_an_edge() {
        for f in Field::all() {
            let (r1, c1) = grid_cell(f);
            let (r2, c2) = grid_cell(f.next());
            assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1, "{f}");
        }
    }

    #[test]
    fn test_render_marks_contents() {
        let board = BoardSnapshot::new()
            .with_tile(PlacedTile::new(TileKind::Mirage, field(8), PlayerId::new(0)))
            .with_token(Token::new(CamelColor::Blue, field(3)))
            .with_token(Token::new(CamelColor::Yellow, field(3)));
        let frame = BoardView::default().render(&board, None);
        let text = render_ascii(&frame);

        assert!(text.contains("[ 8 -     ]"), "{text}");
        assert!(text.contains("[ 3 BY    ]"), "{text}");
        let grid: String = text.lines().take(GRID).collect();
        assert!(!grid.contains('*'), "{text}");
        assert!(text.contains("no tile selected"));
    }

    #[test]
    fn test_render_marks_exactly_eligible_fields() {
        let board = BoardSnapshot::new()
            .with_tile(PlacedTile::new(TileKind::Oasis, field(1), PlayerId::new(0)))
            .with_tile(PlacedTile::new(TileKind::Oasis, field(2), PlayerId::new(1)));
        let selected = SelectedTile::new(TileKind::Mirage, PlayerId::new(2));
        let frame = BoardView::default().render(&board, Some(&selected));
        let text = render_ascii(&frame);

        let grid: String = text.lines().take(GRID).collect::<Vec<_>>().join("\n");
        assert_eq!(grid.matches('*').count(), 12, "{text}");
        assert!(text.contains("[15 *     ]"), "{text}");
        assert!(text.contains("[16       ]"), "{text}");
        assert!(text.contains("Player 2 holds the mirage tile: 12 open fields marked *"));
    }
}
