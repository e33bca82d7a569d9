use crate::game::Input;
use crate::geometry::Direction::*;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Game(Input),
    Quit,
    None,
}

pub fn map_key(ev: &KeyEvent) -> Command {
    // Held keys and key releases are not discrete presses. Terminals without
    // keyboard enhancement report repeats as presses, see `TermManager::setup`
    if ev.kind != KeyEventKind::Press {
        return Command::None;
    }

    if is_ctrl_c(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Enter => Command::Game(Input::Confirm),
        KeyCode::Esc => Command::Game(Input::Cancel),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Game(Input::Move(Up)),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Game(Input::Move(Left)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Game(Input::Move(Down)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Game(Input::Move(Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
