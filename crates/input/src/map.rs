//! Key mapping from terminal events to game actions.

use crate::types::{Direction, MenuAction, SnakeAction, TetrisAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to snake actions.
pub fn map_snake_key(key: KeyEvent) -> Option<SnakeAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            Some(SnakeAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
            Some(SnakeAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            Some(SnakeAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            Some(SnakeAction::Turn(Direction::Right))
        }
        KeyCode::Char('p' | 'P') => Some(SnakeAction::Pause),
        KeyCode::Char('r' | 'R') => Some(SnakeAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to tetris actions.
pub fn map_tetris_key(key: KeyEvent) -> Option<TetrisAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(TetrisAction::MoveLeft),
        KeyCode::Right => Some(TetrisAction::MoveRight),
        KeyCode::Down => Some(TetrisAction::SoftDrop),

        // Rotation
        KeyCode::Up => Some(TetrisAction::Rotate),

        KeyCode::Char(' ') => Some(TetrisAction::HardDrop),
        KeyCode::Char('p' | 'P') => Some(TetrisAction::Pause),
        KeyCode::Char('r' | 'R') => Some(TetrisAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to start menu navigation.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(MenuAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Confirm),
        _ => None,
    }
}

/// Esc leaves a running game for the menu.
pub fn is_back(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_turn_keys() {
        assert_eq!(
            map_snake_key(KeyEvent::from(KeyCode::Up)),
            Some(SnakeAction::Turn(Direction::Up))
        );
        assert_eq!(
            map_snake_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(SnakeAction::Turn(Direction::Left))
        );
        assert_eq!(
            map_snake_key(KeyEvent::from(KeyCode::Char('J'))),
            Some(SnakeAction::Turn(Direction::Down))
        );
        assert_eq!(
            map_snake_key(KeyEvent::from(KeyCode::Right)),
            Some(SnakeAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_tetris_keys() {
        assert_eq!(
            map_tetris_key(KeyEvent::from(KeyCode::Left)),
            Some(TetrisAction::MoveLeft)
        );
        assert_eq!(
            map_tetris_key(KeyEvent::from(KeyCode::Up)),
            Some(TetrisAction::Rotate)
        );
        assert_eq!(
            map_tetris_key(KeyEvent::from(KeyCode::Down)),
            Some(TetrisAction::SoftDrop)
        );
        assert_eq!(
            map_tetris_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(TetrisAction::HardDrop)
        );
        assert_eq!(map_tetris_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_shared_keys() {
        assert_eq!(
            map_snake_key(KeyEvent::from(KeyCode::Char('P'))),
            Some(SnakeAction::Pause)
        );
        assert_eq!(
            map_tetris_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(TetrisAction::Restart)
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Up)), Some(MenuAction::Up));
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Down)), Some(MenuAction::Down));
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Enter)),
            Some(MenuAction::Confirm)
        );
    }

    #[test]
    fn test_quit_and_back_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(is_back(KeyEvent::from(KeyCode::Esc)));
        assert!(!is_back(KeyEvent::from(KeyCode::Enter)));
    }
}
