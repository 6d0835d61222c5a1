use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handler::Command;

pub fn handle_key_event(event: KeyEvent) -> Option<Command> {
    match (event.code, event.modifiers) {
        // 撤銷/重做
        (KeyCode::Char('z'), KeyModifiers::CONTROL) => Some(Command::Undo),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(Command::Redo),

        // 離開
        (KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(Command::Quit),

        // 文件操作
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(Command::Save(None)),
        (KeyCode::Char('l'), KeyModifiers::NONE) => Some(Command::Load(None)),

        // 編輯
        (KeyCode::Char('i'), KeyModifiers::NONE) => Some(Command::PromptInsert),
        (KeyCode::Char('d'), KeyModifiers::NONE) => Some(Command::PromptDelete),

        (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Command::ClearMessage),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Command::Undo)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Command::Redo)
        );
    }

    #[test]
    fn test_plain_letters() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(Command::Save(None))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(Command::Load(None))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Command::Quit)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_z_without_control_is_ignored() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }
}
