//! Keyboard shortcut handling.
//!
//! Maps keyboard events to the same messages the buttons send, so every
//! shortcut goes through the same gating as a click.

use iced::keyboard::{self, key};

use super::super::messages::Message;

/// Resolve a key press to an action.
///
/// - `Enter`: submit the selected file
/// - `Ctrl+O` (`Cmd+O` on macOS): browse for a file
/// - `Ctrl+D` (`Cmd+D` on macOS): open the dashboard
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Enter) if modifiers.is_empty() => {
            tracing::debug!(target: "ui::keyboard", "Enter pressed - submitting");
            Some(Message::SubmitPressed)
        }
        keyboard::Key::Character(c) if modifiers.command() => {
            match c.to_ascii_lowercase().as_str() {
                "o" => Some(Message::BrowsePressed),
                "d" => Some(Message::OpenDashboard),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn test_enter_submits() {
        let enter = keyboard::Key::Named(key::Named::Enter);
        assert!(matches!(
            shortcut(&enter, Modifiers::empty()),
            Some(Message::SubmitPressed)
        ));
    }

    #[test]
    fn test_modified_enter_is_ignored() {
        let enter = keyboard::Key::Named(key::Named::Enter);
        assert!(shortcut(&enter, Modifiers::SHIFT).is_none());
    }

    #[test]
    fn test_command_shortcuts() {
        assert!(matches!(
            shortcut(&character("o"), Modifiers::COMMAND),
            Some(Message::BrowsePressed)
        ));
        assert!(matches!(
            shortcut(&character("D"), Modifiers::COMMAND),
            Some(Message::OpenDashboard)
        ));
    }

    #[test]
    fn test_plain_letters_do_nothing() {
        assert!(shortcut(&character("o"), Modifiers::empty()).is_none());
        assert!(shortcut(&character("x"), Modifiers::COMMAND).is_none());
    }
}
