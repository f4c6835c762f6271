//! Yank (copy) handlers
//!
//! Copies the displayed response to the system clipboard. When no clipboard
//! is reachable the raw text is shown in a modal instead.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::ui::draw::SCROLL_LINES_PER_ACTION;
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Destination of the copy action
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error>;
}

/// The system clipboard, opened on first use
///
/// The handle is kept alive between copies: on X11 the copied text is only
/// served while the owning `Clipboard` exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        let result = clipboard.set_text(text.to_string());
        self.inner = Some(clipboard);
        result
    }
}

/// Copy the raw response body (or the error message) to the clipboard
pub fn handle_yank(state: &Arc<RwLock<AppState>>, clipboard: &mut impl ClipboardSink) {
    let text = {
        let s = state.read();
        s.copyable_text().map(str::to_string)
    };

    let Some(text) = text else {
        tracing::debug!("nothing to yank");
        return;
    };

    match clipboard.set_text(&text) {
        Ok(()) => {
            tracing::info!(bytes = text.len(), "copied response to clipboard");
            apply(state, AppAction::MarkCopied(Instant::now()));
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable, showing copy fallback");
            apply(state, AppAction::OpenCopyFallback);
        }
    }
}

/// Keys for the copy fallback modal
pub fn copy_fallback_action(key: &KeyEvent) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('d') if ctrl => Some(AppAction::ScrollCopyFallbackDown(SCROLL_LINES_PER_ACTION)),
        KeyCode::Char('u') if ctrl => Some(AppAction::ScrollCopyFallbackUp(SCROLL_LINES_PER_ACTION)),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('y') => {
            Some(AppAction::CloseCopyFallback)
        }
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::ScrollCopyFallbackDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::ScrollCopyFallbackUp(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseView;
    use crate::types::InputMode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_fallback_close_keys() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(copy_fallback_action(&press(code)), Some(AppAction::CloseCopyFallback));
        }
    }

    #[test]
    fn test_fallback_scroll_keys() {
        assert_eq!(
            copy_fallback_action(&press(KeyCode::Char('j'))),
            Some(AppAction::ScrollCopyFallbackDown(1))
        );
        assert_eq!(
            copy_fallback_action(&KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(AppAction::ScrollCopyFallbackUp(SCROLL_LINES_PER_ACTION))
        );
        assert_eq!(copy_fallback_action(&press(KeyCode::Char('x'))), None);
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct UnavailableClipboard;

    impl ClipboardSink for UnavailableClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), arboard::Error> {
            Err(arboard::Error::ClipboardNotSupported)
        }
    }

    fn with_failed_response(message: &str) -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.response = ResponseView::Failed(message.to_string());
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_yank_without_response_changes_nothing() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let mut clipboard = RecordingClipboard::default();
        handle_yank(&state, &mut clipboard);

        let s = state.read();
        assert!(s.ui.copied_at.is_none());
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_yank_copies_and_marks_copied() {
        let state = with_failed_response("Network error: connection refused");
        let mut clipboard = RecordingClipboard::default();
        handle_yank(&state, &mut clipboard);

        assert_eq!(clipboard.copied, vec!["Network error: connection refused"]);
        let s = state.read();
        assert!(s.ui.copied_at.is_some());
        assert_eq!(s.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_clipboard_failure_opens_fallback() {
        let state = with_failed_response("Network error: timed out");
        handle_yank(&state, &mut UnavailableClipboard);

        let s = state.read();
        assert_eq!(s.input.mode, InputMode::CopyFallback);
        assert!(s.ui.copied_at.is_none());
        assert_eq!(s.copyable_text(), Some("Network error: timed out"));
    }
}
