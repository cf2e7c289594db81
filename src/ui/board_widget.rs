use crate::game::{Grid, Tile, EMPTY};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Inner width of one tile, in terminal columns.
pub const CELL_WIDTH: usize = 6;

/// Rows of text the board takes for a grid of `height` rows, capped at `u16::MAX`.
pub fn board_height(height: usize) -> u16 {
    let rows = height.saturating_mul(2).saturating_add(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Columns of text the board takes for a grid of `width` columns, capped at `u16::MAX`.
pub fn board_width(width: usize) -> u16 {
    let cols = width.saturating_mul(CELL_WIDTH + 1).saturating_add(1);
    u16::try_from(cols).unwrap_or(u16::MAX)
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        EMPTY => Color::DarkGray,
        2 => Color::White,
        4 => Color::LightYellow,
        8 => Color::Yellow,
        16 => Color::LightRed,
        32 => Color::Red,
        64 => Color::LightMagenta,
        128 => Color::Magenta,
        256 => Color::LightBlue,
        512 => Color::Blue,
        1024 => Color::LightCyan,
        _ => Color::LightGreen,
    }
}

fn separator(width: usize, left: char, mid: char, right: char) -> Line<'static> {
    let segment = "─".repeat(CELL_WIDTH);
    let mut line = String::new();
    line.push(left);
    for col in 0..width {
        if col > 0 {
            line.push(mid);
        }
        line.push_str(&segment);
    }
    line.push(right);
    Line::from(line)
}

/// Box-drawn tile grid, one text line per border and per row of tiles.
pub fn board_lines(grid: &Grid) -> Vec<Line<'static>> {
    let width = grid.width();
    let mut lines = Vec::with_capacity(grid.height() * 2 + 1);

    lines.push(separator(width, '┌', '┬', '┐'));
    for (r, row) in grid.rows().iter().enumerate() {
        if r > 0 {
            lines.push(separator(width, '├', '┼', '┤'));
        }

        let mut spans = vec![Span::raw("│")];
        for &tile in row {
            let text = if tile == EMPTY {
                " ".repeat(CELL_WIDTH)
            } else {
                format!("{tile:^width$}", width = CELL_WIDTH)
            };
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(tile_color(tile))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("│"));
        }
        lines.push(Line::from(spans));
    }
    lines.push(separator(width, '└', '┴', '┘'));

    lines
}

/// Render the tile grid into the given area.
pub fn render_board(frame: &mut Frame, grid: &Grid, area: Rect) {
    let widget = Paragraph::new(board_lines(grid)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_layout() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 2048]]).unwrap();
        let lines = board_lines(&grid);
        assert_eq!(lines.len(), board_height(2) as usize);
        assert_eq!(text(&lines[0]), "┌──────┬──────┐");
        assert_eq!(text(&lines[1]), "│  2   │      │");
        assert_eq!(text(&lines[2]), "├──────┼──────┤");
        assert_eq!(text(&lines[3]), "│      │ 2048 │");
        assert_eq!(text(&lines[4]), "└──────┴──────┘");
        assert_eq!(text(&lines[0]).chars().count(), board_width(2) as usize);
    }

    #[test]
    fn test_board_size_saturates_instead_of_wrapping() {
        assert_eq!(board_height(4), 9);
        assert_eq!(board_width(4), 29);
        // 32768 rows would wrap to 1 with a plain cast.
        assert_eq!(board_height(32_768), u16::MAX);
        assert_eq!(board_width(10_000), u16::MAX);
        assert_eq!(board_height(usize::MAX), u16::MAX);
        assert_eq!(board_width(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_tile_colors_distinguish_values() {
        assert_ne!(tile_color(2), tile_color(4));
        assert_eq!(tile_color(4096), tile_color(8192));
    }
}
