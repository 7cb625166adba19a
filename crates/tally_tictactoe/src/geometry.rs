//! Winning-line overlay geometry.
//!
//! Coordinates follow page conventions: `x` grows to the right and `y`
//! grows downwards. The grid is assumed square and evenly spaced.

use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fraction of a cell the line extends past the centre of each end cell.
pub const OVERHANG: f64 = 0.33;

/// Bounding box of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    /// Distance from the left edge of the surface.
    pub left: f64,
    /// Distance from the top edge of the surface.
    pub top: f64,
    /// Width of the cell.
    pub width: f64,
    /// Height of the cell.
    pub height: f64,
}

impl CellRect {
    /// Horizontal centre.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical centre.
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Placement of a 3x3 grid of equal cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Left edge of the first column.
    pub left: f64,
    /// Top edge of the first row.
    pub top: f64,
    /// Width of every cell.
    pub cell_width: f64,
    /// Height of every cell.
    pub cell_height: f64,
    /// Space between neighbouring cells.
    pub gap: f64,
}

impl GridGeometry {
    /// Returns the rectangle of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> CellRect {
        CellRect {
            left: self.left + pos.col() as f64 * (self.cell_width + self.gap),
            top: self.top + pos.row() as f64 * (self.cell_height + self.gap),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Returns the overlay segment for a completed triple.
    ///
    /// Only the two end cells matter; the middle cell lies on the segment.
    #[instrument(skip(self))]
    pub fn winning_segment(&self, cells: &[Position; 3]) -> Segment {
        Segment::through(self.cell(cells[0]), self.cell(cells[2]))
    }
}

/// Direction of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    Backslash,
    /// Top-right to bottom-left (`/`).
    Slash,
}

impl LineKind {
    /// Classifies the line running from `first` to `last`.
    ///
    /// `first` must be the upper end cell for diagonals, which holds for
    /// every triple in [`WINNING_LINES`](crate::rules::WINNING_LINES).
    pub fn classify(first: &CellRect, last: &CellRect) -> Self {
        if first.top == last.top {
            LineKind::Horizontal
        } else if first.left == last.left {
            LineKind::Vertical
        } else if first.left < last.left {
            LineKind::Backslash
        } else {
            LineKind::Slash
        }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Direction of the segment.
    pub kind: LineKind,
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
}

impl Segment {
    /// Builds the segment through the centres of two end cells, extended by
    /// [`OVERHANG`] of a cell beyond each centre.
    pub fn through(first: CellRect, last: CellRect) -> Self {
        let kind = LineKind::classify(&first, &last);
        let (dx1, dx2) = (first.width * OVERHANG, last.width * OVERHANG);
        let (dy1, dy2) = (first.height * OVERHANG, last.height * OVERHANG);
        let (cx1, cy1) = (first.center_x(), first.center_y());
        let (cx2, cy2) = (last.center_x(), last.center_y());

        let (x1, x2, y1, y2) = match kind {
            LineKind::Horizontal => (cx1 - dx1, cx2 + dx2, cy1, cy2),
            LineKind::Vertical => (cx1, cx2, cy1 - dy1, cy2 + dy2),
            LineKind::Backslash => (cx1 - dx1, cx2 + dx2, cy1 - dy1, cy2 + dy2),
            LineKind::Slash => (cx1 + dx1, cx2 - dx2, cy1 - dy1, cy2 + dy2),
        };

        Self {
            kind,
            x1,
            y1,
            x2,
            y2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WINNING_LINES;

    const GRID: GridGeometry = GridGeometry {
        left: 0.0,
        top: 0.0,
        cell_width: 100.0,
        cell_height: 100.0,
        gap: 0.0,
    };

    fn segment(index: usize) -> Segment {
        GRID.winning_segment(&WINNING_LINES[index])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_every_line_is_classified() {
        let kinds: Vec<LineKind> = (0..8).map(|i| segment(i).kind).collect();
        assert_eq!(
            kinds,
            [
                LineKind::Horizontal,
                LineKind::Horizontal,
                LineKind::Horizontal,
                LineKind::Vertical,
                LineKind::Vertical,
                LineKind::Vertical,
                LineKind::Backslash,
                LineKind::Slash,
            ]
        );
    }

    #[test]
    fn test_horizontal_overhang() {
        let s = segment(0);
        assert_close(s.x1, 50.0 - 33.0);
        assert_close(s.x2, 250.0 + 33.0);
        assert_close(s.y1, 50.0);
        assert_close(s.y2, 50.0);
    }

    #[test]
    fn test_vertical_overhang() {
        let s = segment(4);
        assert_close(s.x1, 150.0);
        assert_close(s.x2, 150.0);
        assert_close(s.y1, 17.0);
        assert_close(s.y2, 283.0);
    }

    #[test]
    fn test_diagonals_overhang_outwards() {
        let back = segment(6);
        assert_close(back.x1, 17.0);
        assert_close(back.y1, 17.0);
        assert_close(back.x2, 283.0);
        assert_close(back.y2, 283.0);

        let slash = segment(7);
        assert_close(slash.x1, 283.0);
        assert_close(slash.y1, 17.0);
        assert_close(slash.x2, 17.0);
        assert_close(slash.y2, 283.0);
    }

    #[test]
    fn test_gap_offsets_cells() {
        let grid = GridGeometry { gap: 10.0, ..GRID };
        let cell = grid.cell(Position::BottomRight);
        assert_close(cell.left, 220.0);
        assert_close(cell.top, 220.0);
    }
}
