use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::kind_color;
use crate::game::Cell;
use crate::{CELL_W, DROP_INTERVAL, Game, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH || area.height < PLAY_H as u16 + 2 {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(PLAY_W as u16), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size well within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let well_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(v_center[1])[1];

    draw_playfield(frame, game, well_rect);
    draw_sidebar(frame, game, cols[1]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let width = game.board.width();
    let mut grid: Vec<Vec<Cell>> = game.board.rows().map(<[Cell]>::to_vec).collect();

    // Overlay the active piece; cells above the ceiling are not drawn.
    for (x, y, kind) in game.current.cells() {
        if game.board.get(x, y).is_some() {
            grid[y as usize][x as usize] = Cell::Filled(kind);
        }
    }

    let inner_w = width * CELL_W;
    let mut lines = Vec::with_capacity(PLAY_H);
    lines.push(Line::raw(format!("┌{}┐", "─".repeat(inner_w))));
    for row in &grid {
        let mut spans = Vec::with_capacity(width + 2);
        spans.push(Span::raw("│"));
        spans.extend(row.iter().map(|cell| match cell {
            Cell::Empty => Span::raw(" ".repeat(CELL_W)),
            Cell::Filled(kind) => {
                Span::styled("█".repeat(CELL_W), Style::default().fg(kind_color(*kind)))
            }
        }));
        spans.push(Span::raw("│"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(format!("└{}┘", "═".repeat(inner_w))));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let until_drop = DROP_INTERVAL.saturating_sub(game.drop_counter());
    let info = Paragraph::new(vec![
        Line::raw(format!("{:<8} {}", "LINES:", game.lines_cleared)),
        Line::raw(format!("{:<8} {}", "RESETS:", game.top_outs)),
        Line::from(vec![
            Span::raw(format!("{:<8} ", "PIECE:")),
            Span::styled(
                game.current.kind.name().to_string(),
                Style::default().fg(kind_color(game.current.kind)),
            ),
        ]),
        Line::raw(format!("{:<8} {}ms", "DROP:", until_drop.as_millis())),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↓ drop"),
        Line::raw("↑/w rotate cw"),
        Line::raw("q rotate ccw"),
        Line::raw("esc quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
