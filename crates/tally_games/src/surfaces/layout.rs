//! Page layout shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tally_tictactoe::Position;
use tally_tictactoe::geometry::GridGeometry;

/// Width of a cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of a cell in terminal rows.
pub const CELL_HEIGHT: u16 = 5;
/// Separator thickness between cells.
pub const GAP: u16 = 1;
/// Width of the whole grid.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
/// Height of the whole grid.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;

/// Regions of the terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Title bar.
    pub title: Rect,
    /// Results banner.
    pub banner: Rect,
    /// Board surface, including its border.
    pub board: Rect,
    /// Controls surface.
    pub controls: Rect,
    /// Key help.
    pub help: Rect,
}

impl PageLayout {
    /// Splits the terminal area into page regions.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Length(3),               // Banner
                Constraint::Min(GRID_HEIGHT + 2),    // Board and controls
                Constraint::Length(3),               // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(30)])
            .split(rows[2]);

        Self {
            title: rows[0],
            banner: rows[1],
            board: body[0],
            controls: body[1],
            help: rows[3],
        }
    }

    /// The cell grid inside the board surface.
    pub fn grid(&self) -> BoardGrid {
        BoardGrid::centered_in(self.board)
    }
}

/// Placement of the 3x3 cell grid on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGrid {
    area: Rect,
    bounds: Rect,
}

impl BoardGrid {
    /// Centers the grid in `bounds`.
    pub fn centered_in(bounds: Rect) -> Self {
        let x = bounds.x + bounds.width.saturating_sub(GRID_WIDTH) / 2;
        let y = bounds.y + bounds.height.saturating_sub(GRID_HEIGHT) / 2;
        Self {
            area: Rect::new(x, y, GRID_WIDTH, GRID_HEIGHT),
            bounds,
        }
    }

    /// The full grid rectangle, clipped to the board surface.
    pub fn area(&self) -> Rect {
        self.area.intersection(self.bounds)
    }

    /// Grid placement in terminal cell units.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            left: f64::from(self.area.x),
            top: f64::from(self.area.y),
            cell_width: f64::from(CELL_WIDTH),
            cell_height: f64::from(CELL_HEIGHT),
            gap: f64::from(GAP),
        }
    }

    /// Unclipped rectangle of a cell.
    fn raw_cell(&self, pos: Position) -> Rect {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        Rect::new(
            self.area.x + col * (CELL_WIDTH + GAP),
            self.area.y + row * (CELL_HEIGHT + GAP),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Rectangle of a cell, clipped to the board surface.
    pub fn cell(&self, pos: Position) -> Rect {
        self.raw_cell(pos).intersection(self.bounds)
    }

    /// Horizontal separator rows, clipped to the board surface.
    pub fn row_separators(&self) -> [Rect; 2] {
        [1u16, 2].map(|row| {
            Rect::new(
                self.area.x,
                self.area.y + row * (CELL_HEIGHT + GAP) - GAP,
                GRID_WIDTH,
                GAP,
            )
            .intersection(self.bounds)
        })
    }

    /// Vertical separator columns, clipped to the board surface.
    pub fn column_separators(&self) -> [Rect; 2] {
        [1u16, 2].map(|col| {
            Rect::new(
                self.area.x + col * (CELL_WIDTH + GAP) - GAP,
                self.area.y,
                GAP,
                GRID_HEIGHT,
            )
            .intersection(self.bounds)
        })
    }

    /// Returns the cell under a terminal coordinate, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let cell = self.cell(*pos);
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> BoardGrid {
        BoardGrid::centered_in(Rect::new(0, 0, GRID_WIDTH + 4, GRID_HEIGHT + 2))
    }

    #[test]
    fn test_grid_is_centered() {
        let area = grid().area();
        assert_eq!((area.x, area.y), (2, 1));
        assert_eq!((area.width, area.height), (GRID_WIDTH, GRID_HEIGHT));
    }

    #[test]
    fn test_hit_maps_back_to_rendered_cell() {
        let grid = grid();
        for pos in Position::ALL {
            let cell = grid.cell(pos);
            assert_eq!(grid.hit(cell.x, cell.y), Some(pos));
            assert_eq!(
                grid.hit(cell.x + cell.width - 1, cell.y + cell.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_hit_misses_separators_and_outside() {
        let grid = grid();
        let [first_row, _] = grid.row_separators();
        let [first_col, _] = grid.column_separators();
        assert_eq!(grid.hit(first_row.x + 1, first_row.y), None);
        assert_eq!(grid.hit(first_col.x, first_col.y + 1), None);
        assert_eq!(grid.hit(0, 0), None);
    }

    #[test]
    fn test_geometry_matches_cells() {
        let grid = grid();
        let geometry = grid.geometry();
        let rect = geometry.cell(Position::BottomRight);
        let cell = grid.cell(Position::BottomRight);
        assert_eq!(rect.left, f64::from(cell.x));
        assert_eq!(rect.top, f64::from(cell.y));
    }

    #[test]
    fn test_page_layout_regions_do_not_overlap() {
        let page = PageLayout::new(Rect::new(0, 0, 100, 40));
        assert!(!page.board.intersects(page.controls));
        assert!(!page.banner.intersects(page.board));
        assert_eq!(page.help.y + page.help.height, 40);
    }
}
