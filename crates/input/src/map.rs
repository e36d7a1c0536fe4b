//! Key mapping from decoded keys to view actions.

use crate::types::{Key, ViewAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a view action. Unmapped keys return `None` and leave
/// the view untouched.
pub fn map_key(key: Key) -> Option<ViewAction> {
    match key {
        Key::Char('a') => Some(ViewAction::PanLeft),
        Key::Char('d') => Some(ViewAction::PanRight),
        Key::Char('w') => Some(ViewAction::PanUp),
        Key::Char('s') => Some(ViewAction::PanDown),

        // '=' shares a key with '+' on most layouts.
        Key::Char('=') => Some(ViewAction::ZoomIn),
        Key::Char('-') => Some(ViewAction::ZoomOut),

        Key::Char('q') | Key::Interrupt | Key::Eof => Some(ViewAction::Quit),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: Key) -> bool {
    map_key(key) == Some(ViewAction::Quit)
}

/// Translate a crossterm key event into a [`Key`].
///
/// Release events return `None`; only presses and repeats count.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_pan_keys() {
        assert_eq!(map_key(Key::Char('a')), Some(ViewAction::PanLeft));
        assert_eq!(map_key(Key::Char('d')), Some(ViewAction::PanRight));
        assert_eq!(map_key(Key::Char('w')), Some(ViewAction::PanUp));
        assert_eq!(map_key(Key::Char('s')), Some(ViewAction::PanDown));
    }

    #[test]
    fn test_zoom_keys() {
        assert_eq!(map_key(Key::Char('=')), Some(ViewAction::ZoomIn));
        assert_eq!(map_key(Key::Char('-')), Some(ViewAction::ZoomOut));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(Key::Char('x')), None);
        assert_eq!(map_key(Key::Char('A')), None);
        assert_eq!(map_key(Key::Char('+')), None);
        assert_eq!(map_key(Key::Other), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(Key::Char('q')));
        assert!(should_quit(Key::Interrupt));
        assert!(should_quit(Key::Eof));
        assert!(!should_quit(Key::Char('Q')));
        assert!(!should_quit(Key::Other));
    }

    #[test]
    fn test_event_translation() {
        assert_eq!(
            key_from_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Key::Char('d'))
        );
        assert_eq!(
            key_from_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Left)), Some(Key::Other));

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('d'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(key_from_event(release), None);
    }
}
