//! Editing modal input
//!
//! Printable characters are batched so pastes arrive as one insert.
//! Everything else is forwarded to the text editor.

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;

pub fn handle_editing_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Esc => apply(state, AppAction::CancelEdit),
        KeyCode::Enter => apply(state, AppAction::ConfirmEdit),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, count) = collect_paste_batch(c);
            if count > 1 {
                tracing::debug!(count, "batched pasted characters");
            }
            apply(state, AppAction::EditorPaste(batch));
        }
        _ => apply(state, AppAction::EditorInput(key)),
    }
}
