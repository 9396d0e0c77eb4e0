use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Quit,
}

/// One key press maps to at most one input; there is no key repeat here.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    let action = match key.code {
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Down => Action::SoftDrop,
        KeyCode::Up | KeyCode::Char('w') => Action::RotateClockwise,
        KeyCode::Char('q') => Action::RotateCounterClockwise,
        KeyCode::Esc => return Some(Input::Quit),
        _ => return None,
    };
    Some(Input::Action(action))
}
