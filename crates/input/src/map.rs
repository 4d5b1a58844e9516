//! Key mapping from key names and terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a browser-style key identifier to a gameplay command.
///
/// Only the five gameplay keys are bound; lifecycle commands come from buttons.
pub fn key_name_to_command(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::MoveLeft),
        "ArrowRight" => Some(Command::MoveRight),
        "ArrowDown" => Some(Command::SoftDrop),
        "ArrowUp" => Some(Command::Rotate),
        "Space" | " " => Some(Command::HardDrop),
        _ => None,
    }
}

/// Map a terminal key press to a command.
///
/// Release events are ignored so terminals that report them do not double-fire.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Gameplay
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::HardDrop),

        // Lifecycle
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
