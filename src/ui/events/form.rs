//! Request panel key handling
//!
//! Maps keys pressed while the request panel has focus to actions:
//! - j/k move between the rows and fields of the active tab
//! - h/l pick the key or value column of a row
//! - Enter/e edit the selected field or cycle the selected selector
//! - a/d add and remove rows

use crate::actions::AppAction;
use crate::state::{AppState, RequestItem};
use crate::types::RowColumn;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action for a key pressed in the request panel, if the key means anything there
pub fn request_panel_action(state: &AppState, key: &KeyEvent) -> Option<AppAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::SelectPrevious),
        KeyCode::Char('h') | KeyCode::Left => Some(AppAction::SelectColumn(RowColumn::Key)),
        KeyCode::Char('l') | KeyCode::Right => Some(AppAction::SelectColumn(RowColumn::Value)),
        KeyCode::Enter | KeyCode::Char('e') => activate_selected(state),
        KeyCode::Char('a') => state.active_row_list().map(AppAction::AddRow),
        KeyCode::Char('d') => match state.selected_request_item()? {
            RequestItem::Row(list, idx) => Some(AppAction::RemoveRow(list, idx)),
            _ => None,
        },
        KeyCode::Char('c') if state.form.method.allows_body() => {
            Some(AppAction::CycleContentType)
        }
        KeyCode::Char('t') => Some(AppAction::CycleAuthKind),
        KeyCode::Char('f') => Some(AppAction::FormatJsonBody),
        _ => None,
    }
}

fn activate_selected(state: &AppState) -> Option<AppAction> {
    match state.selected_request_item()? {
        RequestItem::ContentTypeSelector => Some(AppAction::CycleContentType),
        RequestItem::AuthKindSelector => Some(AppAction::CycleAuthKind),
        RequestItem::ApiKeyLocation => Some(AppAction::ToggleApiKeyLocation),
        RequestItem::Row(..) | RequestItem::BodyEditor(_) | RequestItem::AuthField(_) => {
            state.selected_edit_target().map(AppAction::StartEditing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::apply_action;
    use crate::types::{AuthField, AuthKind, EditTarget, HttpMethod, RequestTab, RowList};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn on_tab(tab: RequestTab) -> AppState {
        let mut state = AppState::default();
        state.ui.request_tab = tab;
        state
    }

    #[test]
    fn test_navigation_keys() {
        let state = AppState::default();
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('j'))),
            Some(AppAction::SelectNext)
        );
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Up)),
            Some(AppAction::SelectPrevious)
        );
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('l'))),
            Some(AppAction::SelectColumn(RowColumn::Value))
        );
    }

    #[test]
    fn test_add_row_targets_active_tab() {
        let state = on_tab(RequestTab::Headers);
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('a'))),
            Some(AppAction::AddRow(RowList::Headers))
        );

        let state = on_tab(RequestTab::Auth);
        assert_eq!(request_panel_action(&state, &press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_enter_edits_selected_row_column() {
        let mut state = on_tab(RequestTab::Params);
        apply_action(AppAction::AddRow(RowList::Query), &mut state);
        assert_eq!(state.ui.selected_item, 1);
        state.ui.selected_column = RowColumn::Value;

        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Enter)),
            Some(AppAction::StartEditing(EditTarget::RowValue(RowList::Query, 1)))
        );
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('d'))),
            Some(AppAction::RemoveRow(RowList::Query, 1))
        );
    }

    #[test]
    fn test_delete_only_applies_to_rows() {
        let state = on_tab(RequestTab::Auth);
        assert_eq!(request_panel_action(&state, &press(KeyCode::Char('d'))), None);
    }

    #[test]
    fn test_enter_cycles_selectors() {
        let mut state = on_tab(RequestTab::Auth);
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Enter)),
            Some(AppAction::CycleAuthKind)
        );

        state.form.auth.kind = AuthKind::ApiKey;
        state.ui.selected_item = 3;
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Enter)),
            Some(AppAction::ToggleApiKeyLocation)
        );

        state.ui.selected_item = 2;
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('e'))),
            Some(AppAction::StartEditing(EditTarget::Auth(AuthField::ApiKeyValue)))
        );
    }

    #[test]
    fn test_content_type_key_needs_body_method() {
        let mut state = on_tab(RequestTab::Body);
        state.form.method = HttpMethod::Get;
        assert_eq!(request_panel_action(&state, &press(KeyCode::Char('c'))), None);

        state.form.method = HttpMethod::Post;
        assert_eq!(
            request_panel_action(&state, &press(KeyCode::Char('c'))),
            Some(AppAction::CycleContentType)
        );
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(request_panel_action(&state, &key), None);
    }
}
