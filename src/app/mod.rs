use std::io::{Stdout, stdout};
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use blockfall::input::{Input, map_key};
use blockfall::ui::draw_game;
use blockfall::{FRAME, Game};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(game: Game) -> anyhow::Result<()> {
    let mut tui = TuiGuard::new().context("failed to set up terminal")?;
    run_loop(tui.terminal_mut(), game)
}

fn run_loop(terminal: &mut Term, mut game: Game) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal
            .draw(|frame| draw_game(frame, &game))
            .context("failed to draw frame")?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(Input::Quit) => break,
                        Some(Input::Action(action)) => game.apply(action),
                        None => {}
                    }
                }
            }
        }

        let now = Instant::now();
        game.tick(now - last_frame);
        last_frame = now;
    }

    info!(
        lines = game.lines_cleared,
        top_outs = game.top_outs,
        "quit"
    );
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
