//! Event handling for api-tester
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles three input modes:
//! - Normal: Global commands plus panel-specific keys
//! - Editing: A field or body is open in the editing modal
//! - CopyFallback: The raw body is shown because no clipboard was reachable
//!
//! # Architecture
//!
//! Key presses are mapped to AppActions which are applied to AppState via
//! apply_action in actions.rs. The mapping functions are pure so they can be
//! tested without a terminal.
//!
//! # Lock Management
//!
//! Locks on Arc<RwLock<AppState>> are held only long enough to read what a
//! key needs or to apply one action. Never hold a guard across `apply`.

mod editing;
mod execution;
mod form;
mod helpers;
mod yank;

use self::helpers::apply;
use crate::actions::AppAction;
use crate::request::Transport;
use crate::state::AppState;
use crate::types::{EditTarget, InputMode, PanelFocus};
use crate::ui::draw::SCROLL_LINES_PER_ACTION;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Commands available from every panel in normal mode
#[derive(Debug, Clone, PartialEq)]
enum GlobalCommand {
    Quit,
    Submit,
    Action(AppAction),
}

/// Event handler for managing user input and state updates
pub struct EventHandler {
    pub should_quit: bool,
    clipboard: yank::SystemClipboard,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            clipboard: yank::SystemClipboard::default(),
        }
    }

    /// Wait briefly for input and dispatch it based on the current input mode
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        transport: &Transport,
    ) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, state, transport);
                }
                Event::Paste(text) => {
                    let mode = state.read().input.mode;
                    match paste_action(mode, text) {
                        Some(action) => apply(state, action),
                        None => tracing::debug!("paste ignored outside the editor"),
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, state: &Arc<RwLock<AppState>>, transport: &Transport) {
        let mode = state.read().input.mode;

        match mode {
            InputMode::Editing(_) => editing::handle_editing_input(key, state),
            InputMode::CopyFallback => {
                if let Some(action) = yank::copy_fallback_action(&key) {
                    apply(state, action);
                }
            }
            InputMode::Normal => self.handle_normal_key(key, state, transport),
        }
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        transport: &Transport,
    ) {
        match global_command(&key) {
            Some(GlobalCommand::Quit) => {
                tracing::info!("quit requested");
                self.should_quit = true;
                return;
            }
            Some(GlobalCommand::Submit) => {
                execution::handle_submit(state, transport);
                return;
            }
            Some(GlobalCommand::Action(action)) => {
                apply(state, action);
                return;
            }
            None => {}
        }

        let focus = state.read().ui.panel_focus;
        match focus {
            PanelFocus::Request => {
                let action = {
                    let s = state.read();
                    form::request_panel_action(&s, &key)
                };
                if let Some(action) = action {
                    apply(state, action);
                }
            }
            PanelFocus::Response => {
                if key.code == KeyCode::Char('y') {
                    yank::handle_yank(state, &mut self.clipboard);
                } else if let Some(action) = response_panel_action(&key) {
                    apply(state, action);
                }
            }
        }
    }
}

fn global_command(key: &KeyEvent) -> Option<GlobalCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = |a| Some(GlobalCommand::Action(a));

    match key.code {
        // Ctrl+D/U scroll the response from either panel
        KeyCode::Char('d') if ctrl => action(AppAction::ScrollResponseDown(SCROLL_LINES_PER_ACTION)),
        KeyCode::Char('u') if ctrl => action(AppAction::ScrollResponseUp(SCROLL_LINES_PER_ACTION)),
        KeyCode::Char('c') if ctrl => Some(GlobalCommand::Quit),
        _ if ctrl => None,

        KeyCode::Char('q') => Some(GlobalCommand::Quit),
        KeyCode::Char(' ') | KeyCode::F(5) => Some(GlobalCommand::Submit),
        KeyCode::Tab => action(AppAction::NextTab),
        KeyCode::BackTab => action(AppAction::PrevTab),
        KeyCode::Char('1') => action(AppAction::NavigateToPanel(PanelFocus::Request)),
        KeyCode::Char('2') => action(AppAction::NavigateToPanel(PanelFocus::Response)),
        KeyCode::Char('u') => action(AppAction::StartEditing(EditTarget::Url)),
        KeyCode::Char('m') => action(AppAction::NextMethod),
        KeyCode::Char('M') => action(AppAction::PreviousMethod),
        KeyCode::Char('X') => action(AppAction::ClearForm),
        _ => None,
    }
}

/// Bracketed paste only lands in an open editor
fn paste_action(mode: InputMode, text: String) -> Option<AppAction> {
    match mode {
        InputMode::Editing(_) => Some(AppAction::EditorPaste(text)),
        InputMode::Normal | InputMode::CopyFallback => None,
    }
}

fn response_panel_action(key: &KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('p') => Some(AppAction::ToggleBodyView),
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::ScrollResponseDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::ScrollResponseUp(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_quit_and_submit() {
        assert_eq!(global_command(&press(KeyCode::Char('q'))), Some(GlobalCommand::Quit));
        assert_eq!(global_command(&ctrl('c')), Some(GlobalCommand::Quit));
        assert_eq!(global_command(&press(KeyCode::Char(' '))), Some(GlobalCommand::Submit));
        assert_eq!(global_command(&press(KeyCode::F(5))), Some(GlobalCommand::Submit));
    }

    #[test]
    fn test_ctrl_scroll_does_not_clash_with_plain_keys() {
        assert_eq!(
            global_command(&ctrl('u')),
            Some(GlobalCommand::Action(AppAction::ScrollResponseUp(
                SCROLL_LINES_PER_ACTION
            )))
        );
        assert_eq!(
            global_command(&press(KeyCode::Char('u'))),
            Some(GlobalCommand::Action(AppAction::StartEditing(EditTarget::Url)))
        );
        // Plain d belongs to the request panel
        assert_eq!(global_command(&press(KeyCode::Char('d'))), None);
        assert_eq!(global_command(&ctrl('x')), None);
    }

    #[test]
    fn test_method_cycling_keys() {
        assert_eq!(
            global_command(&press(KeyCode::Char('m'))),
            Some(GlobalCommand::Action(AppAction::NextMethod))
        );
        let shifted = KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT);
        assert_eq!(
            global_command(&shifted),
            Some(GlobalCommand::Action(AppAction::PreviousMethod))
        );
    }

    #[test]
    fn test_panel_switching() {
        assert_eq!(
            global_command(&press(KeyCode::Char('2'))),
            Some(GlobalCommand::Action(AppAction::NavigateToPanel(
                PanelFocus::Response
            )))
        );
        assert_eq!(
            global_command(&press(KeyCode::BackTab)),
            Some(GlobalCommand::Action(AppAction::PrevTab))
        );
    }

    #[test]
    fn test_paste_only_reaches_editor() {
        let pasted = "line one\n\tindented q X".to_string();
        assert_eq!(
            paste_action(InputMode::Editing(EditTarget::TextBody), pasted.clone()),
            Some(AppAction::EditorPaste(pasted.clone()))
        );
        assert_eq!(paste_action(InputMode::Normal, pasted.clone()), None);
        assert_eq!(paste_action(InputMode::CopyFallback, pasted), None);
    }

    #[test]
    fn test_pasted_text_with_tabs_and_newlines_stays_in_body() {
        use crate::actions::apply_action;

        let mut state = AppState::default();
        apply_action(AppAction::StartEditing(EditTarget::TextBody), &mut state);
        let mode = state.input.mode;
        if let Some(action) = paste_action(mode, "a\t\nb q".to_string()) {
            apply_action(action, &mut state);
        }
        assert_eq!(state.input.mode, InputMode::Editing(EditTarget::TextBody));

        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.form.text_body, "a\t\nb q");
    }

    #[test]
    fn test_response_panel_keys() {
        assert_eq!(
            response_panel_action(&press(KeyCode::Char('p'))),
            Some(AppAction::ToggleBodyView)
        );
        assert_eq!(
            response_panel_action(&press(KeyCode::Down)),
            Some(AppAction::ScrollResponseDown(1))
        );
        assert_eq!(response_panel_action(&press(KeyCode::Char('a'))), None);
    }
}
