use crate::game::Snapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

const MOVE_HELP: &str = "(W)Up (S)Down (A)Left (D)Right";
const SESSION_HELP: &str = "(R)Restart (Q)Exit";
const WIN_BANNER: &str = "YOU WIN!";
const GAMEOVER_BANNER: &str = "GAME OVER";

pub fn render(frame: &mut Frame, snapshot: &Snapshot<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_widget::board_height(snapshot.grid.height())),
            Constraint::Length(4), // Status + help
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    board_widget::render_board(frame, snapshot.grid, chunks[1]);
    render_status(frame, snapshot, chunks[2]);
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("SCORE: {}", snapshot.score),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if snapshot.high_score != 0 {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("HIGHSCORE: {}", snapshot.high_score),
            Style::default().fg(Color::Cyan),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("2048 (goal {})", snapshot.win_threshold)),
        );

    frame.render_widget(header, area);
}

/// First status line: a banner when the game has ended, movement help otherwise.
fn status_line(snapshot: &Snapshot<'_>) -> Line<'static> {
    if snapshot.is_win {
        Line::from(Span::styled(
            WIN_BANNER,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else if snapshot.is_gameover {
        Line::from(Span::styled(
            GAMEOVER_BANNER,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(MOVE_HELP)
    }
}

fn render_status(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let status = Paragraph::new(vec![status_line(snapshot), Line::from(SESSION_HELP)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GridEngine, SessionState};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(snapshot: &Snapshot<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal.draw(|f| render(f, snapshot)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn engine(rows: Vec<Vec<u32>>, win: u32) -> GridEngine {
        GridEngine::from_rows(rows, win).unwrap()
    }

    #[test]
    fn test_renders_score_tiles_and_help() {
        let e = engine(
            vec![
                vec![2, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 128],
            ],
            2048,
        );
        let screen = draw(&Snapshot::of(&e, SessionState::Game));

        assert!(screen.contains("SCORE: 0"));
        assert!(!screen.contains("HIGHSCORE"));
        assert!(screen.contains("128"));
        assert!(screen.contains(MOVE_HELP));
        assert!(screen.contains(SESSION_HELP));
        assert!(!screen.contains(WIN_BANNER));
    }

    #[test]
    fn test_high_score_shown_once_set() {
        let mut e = engine(vec![vec![4, 4, 0, 0]; 2], 2048);
        e.move_in(crate::game::Direction::Left).unwrap();
        e.reset();
        let screen = draw(&Snapshot::of(&e, SessionState::Game));
        assert!(screen.contains("HIGHSCORE: 16"));
    }

    #[test]
    fn test_win_banner_replaces_move_help() {
        let e = engine(vec![vec![8, 2], vec![2, 4]], 8);
        let screen = draw(&Snapshot::of(&e, SessionState::Win));
        assert!(screen.contains(WIN_BANNER));
        assert!(!screen.contains(MOVE_HELP));
        assert!(screen.contains(SESSION_HELP));
    }

    #[test]
    fn test_gameover_banner() {
        let e = engine(vec![vec![2, 4], vec![4, 2]], 2048);
        let screen = draw(&Snapshot::of(&e, SessionState::Gameover));
        assert!(screen.contains(GAMEOVER_BANNER));
        assert!(!screen.contains(MOVE_HELP));
    }
}
