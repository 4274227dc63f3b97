//! Key mapping from terminal events to quiz actions.

use crate::types::{Mode, QuizAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to quiz actions.
pub fn handle_key_event(key: KeyEvent) -> Option<QuizAction> {
    match key.code {
        // Judgments
        KeyCode::Left
        | KeyCode::Char('y')
        | KeyCode::Char('Y')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(QuizAction::JudgeTrue),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => Some(QuizAction::JudgeFalse),

        // Session
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(QuizAction::Start)
        }

        // Mode selection
        KeyCode::Char('1') => Some(QuizAction::ChangeMode(Mode::Easy)),
        KeyCode::Char('2') => Some(QuizAction::ChangeMode(Mode::Medium)),
        KeyCode::Char('3') => Some(QuizAction::ChangeMode(Mode::Hard)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(QuizAction::CycleMode),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_judgment_keys() {
        for code in [KeyCode::Left, KeyCode::Char('y'), KeyCode::Char('J')] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(QuizAction::JudgeTrue)
            );
        }
        for code in [KeyCode::Right, KeyCode::Char('n'), KeyCode::Char('N')] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(QuizAction::JudgeFalse)
            );
        }
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(QuizAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(QuizAction::Start)
        );
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(QuizAction::ChangeMode(Mode::Easy))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(QuizAction::ChangeMode(Mode::Hard))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(QuizAction::CycleMode)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
