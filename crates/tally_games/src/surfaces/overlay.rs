//! Winning-line overlay drawn on top of the board grid.

use ratatui::{
    Frame,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line},
};
use tally_tictactoe::GameState;
use tally_tictactoe::geometry::Segment;
use tracing::{debug, instrument};

use super::layout::BoardGrid;

/// Draws a line through the winning triple, if the round was won.
#[instrument(skip_all)]
pub fn render_winning_line(frame: &mut Frame, grid: &BoardGrid, state: &GameState) {
    let Some(win) = state.round().outcome().as_ref().and_then(|o| o.win()) else {
        return;
    };

    let area = grid.area();
    if area.is_empty() {
        return;
    }

    let segment = grid.geometry().winning_segment(win.line());
    let line = to_canvas(&segment, f64::from(area.y), f64::from(area.height));
    debug!(kind = ?segment.kind, "Drawing winning line");

    let left = f64::from(area.x);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([left, left + f64::from(area.width)])
        .y_bounds([0.0, f64::from(area.height)])
        .paint(move |ctx| ctx.draw(&line));
    frame.render_widget(canvas, area);
}

/// Converts a y-down segment into the canvas' y-up space anchored at `top`.
fn to_canvas(segment: &Segment, top: f64, height: f64) -> Line {
    let flip = |y: f64| top + height - y;
    Line {
        x1: segment.x1,
        y1: flip(segment.y1),
        x2: segment.x2,
        y2: flip(segment.y2),
        color: Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_tictactoe::geometry::LineKind;

    #[test]
    fn test_to_canvas_flips_y() {
        let segment = Segment {
            kind: LineKind::Vertical,
            x1: 5.0,
            y1: 10.0,
            x2: 5.0,
            y2: 20.0,
        };
        let line = to_canvas(&segment, 10.0, 17.0);
        assert_eq!(line.y1, 17.0);
        assert_eq!(line.y2, 7.0);
        assert_eq!(line.x1, 5.0);
    }
}
