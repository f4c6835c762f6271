use crate::editor::pretty_json;
use crate::error::{TransportError, ValidationError};
use crate::form::FormState;
use crate::response::{BodyView, ResponseDisplay, ResponseView};
use crate::state::{AppState, RequestItem, ValidationState};
use crate::types::{
    ContentType, EditTarget, InputMode, PanelFocus, RequestTab, ResponseSummary, RowColumn,
    RowList,
};
use crossterm::event::KeyEvent;
use std::time::Instant;

/// Represents all possible state-changing actions in the application
/// Input handling produces these; `apply_action` is the only place they mutate state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation
    NavigateToPanel(PanelFocus),
    NextTab,
    PrevTab,
    SelectNext,
    SelectPrevious,
    SelectColumn(RowColumn),

    // Form
    NextMethod,
    PreviousMethod,
    CycleContentType,
    CycleAuthKind,
    ToggleApiKeyLocation,
    AddRow(RowList),
    RemoveRow(RowList, usize),
    FormatJsonBody,
    ClearForm,

    // Editing modal
    StartEditing(EditTarget),
    EditorInput(KeyEvent),
    EditorPaste(String),
    ConfirmEdit,
    CancelEdit,

    // Request lifecycle
    SetValidation(Vec<ValidationError>),
    BeginRequest,
    CompleteRequest(Result<ResponseSummary, TransportError>),

    // Response panel
    ToggleBodyView,
    ScrollResponseUp(usize),
    ScrollResponseDown(usize),
    MarkCopied(Instant),
    OpenCopyFallback,
    CloseCopyFallback,
    ScrollCopyFallbackUp(usize),
    ScrollCopyFallbackDown(usize),
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateToPanel(panel) => {
            state.ui.panel_focus = panel;
        }
        AppAction::NextTab => {
            let tab = state.ui.request_tab.next();
            switch_tab(state, tab);
        }
        AppAction::PrevTab => {
            let tab = state.ui.request_tab.previous();
            switch_tab(state, tab);
        }
        AppAction::SelectNext => {
            let len = state.request_items().len();
            if state.ui.selected_item + 1 < len {
                state.ui.selected_item += 1;
            }
        }
        AppAction::SelectPrevious => {
            state.ui.selected_item = state.ui.selected_item.saturating_sub(1);
        }
        AppAction::SelectColumn(column) => {
            state.ui.selected_column = column;
        }

        // Form
        AppAction::NextMethod => {
            state.form.method = state.form.method.next();
            state.clamp_selection();
        }
        AppAction::PreviousMethod => {
            state.form.method = state.form.method.previous();
            state.clamp_selection();
        }
        AppAction::CycleContentType => {
            state.form.content_type = state.form.content_type.next();
            state.validation.body_error = None;
            state.clamp_selection();
        }
        AppAction::CycleAuthKind => {
            state.form.auth.kind = state.form.auth.kind.next();
            state.clamp_selection();
        }
        AppAction::ToggleApiKeyLocation => {
            state.form.auth.api_key_location = state.form.auth.api_key_location.toggle();
        }
        AppAction::AddRow(list) => {
            let idx = state.form.add_row(list);
            if let Some(pos) = state
                .request_items()
                .iter()
                .position(|item| *item == RequestItem::Row(list, idx))
            {
                state.ui.selected_item = pos;
                state.ui.selected_column = RowColumn::Key;
            }
        }
        AppAction::RemoveRow(list, idx) => {
            state.form.remove_row(list, idx);
            state.clamp_selection();
        }
        AppAction::FormatJsonBody => {
            if state.form.content_type != ContentType::Json
                || state.form.json_body.trim().is_empty()
            {
                return;
            }
            match pretty_json(&state.form.json_body) {
                Ok(pretty) => {
                    state.form.json_body = pretty;
                    state.validation.body_error = None;
                }
                Err(e) => {
                    state.validation.body_error =
                        Some(ValidationError::InvalidJsonBody(e.to_string()).to_string());
                }
            }
        }
        AppAction::ClearForm => {
            state.form = FormState::from_defaults(&state.defaults);
            state.validation = ValidationState::default();
            state.ui.selected_item = 0;
            state.ui.selected_column = RowColumn::Key;
        }

        // Editing modal
        AppAction::StartEditing(target) => {
            let value = state.form.field_value(target);
            state.input.editor.load(value, target.is_multiline());
            state.input.mode = InputMode::Editing(target);
        }
        AppAction::EditorInput(key) => {
            state.input.editor.handle_key_event(key);
        }
        AppAction::EditorPaste(text) => {
            // Word processors hand out curly quotes that break JSON
            if state.input.mode == InputMode::Editing(EditTarget::JsonBody) {
                state.input.editor.insert_str_normalized(&text);
            } else {
                state.input.editor.insert_str(&text);
            }
        }
        AppAction::ConfirmEdit => {
            if let InputMode::Editing(target) = state.input.mode {
                let value = state.input.editor.content().to_string();
                state.form.set_field(target, value);
                match target {
                    EditTarget::Url => state.validation.url_error = None,
                    EditTarget::JsonBody => state.validation.body_error = None,
                    _ => {}
                }
            }
            state.input.editor.clear();
            state.input.mode = InputMode::Normal;
        }
        AppAction::CancelEdit => {
            state.input.editor.clear();
            state.input.mode = InputMode::Normal;
        }

        // Request lifecycle
        AppAction::SetValidation(errors) => {
            state.validation = ValidationState::from_errors(&errors);
        }
        AppAction::BeginRequest => {
            state.validation = ValidationState::default();
            state.response = ResponseView::Loading;
            state.ui.response_scroll = 0;
        }
        AppAction::CompleteRequest(result) => {
            state.response = match result {
                Ok(summary) => ResponseView::Loaded(Box::new(ResponseDisplay::new(summary))),
                Err(e) => ResponseView::Failed(e.to_string()),
            };
            state.ui.body_view = BodyView::Pretty;
            state.ui.response_scroll = 0;
            state.ui.copied_at = None;
        }

        // Response panel
        AppAction::ToggleBodyView => {
            state.ui.body_view = state.ui.body_view.toggle();
            state.ui.response_scroll = 0;
        }
        AppAction::ScrollResponseUp(lines) => {
            state.ui.response_scroll = state.ui.response_scroll.saturating_sub(lines);
        }
        AppAction::ScrollResponseDown(lines) => {
            state.ui.response_scroll = state
                .ui
                .response_scroll
                .saturating_add(lines)
                .min(state.max_response_scroll());
        }
        AppAction::MarkCopied(at) => {
            state.ui.copied_at = Some(at);
        }
        AppAction::OpenCopyFallback => {
            state.input.copy_fallback_scroll = 0;
            state.input.mode = InputMode::CopyFallback;
        }
        AppAction::CloseCopyFallback => {
            state.input.mode = InputMode::Normal;
        }
        AppAction::ScrollCopyFallbackUp(lines) => {
            state.input.copy_fallback_scroll = state.input.copy_fallback_scroll.saturating_sub(lines);
        }
        AppAction::ScrollCopyFallbackDown(lines) => {
            state.input.copy_fallback_scroll =
                state.input.copy_fallback_scroll.saturating_add(lines);
        }
    }
}

fn switch_tab(state: &mut AppState, tab: RequestTab) {
    state.ui.panel_focus = PanelFocus::Request;
    state.ui.request_tab = tab;
    state.ui.selected_item = 0;
    state.ui.selected_column = RowColumn::Key;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequestDefaults;
    use crate::types::{AuthKind, HttpMethod, OrderedMap};
    use std::time::Duration;

    fn summary(status_code: u16, body: &str) -> ResponseSummary {
        ResponseSummary {
            status_code,
            status_text: String::new(),
            headers: OrderedMap::new(),
            body_raw: body.to_string(),
            body_parsed: None,
            is_json: false,
            size_bytes: body.len(),
            elapsed_ms: 10,
        }
    }

    #[test]
    fn test_navigate_to_panel() {
        let mut state = AppState::default();
        apply_action(AppAction::NavigateToPanel(PanelFocus::Response), &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Response);
    }

    #[test]
    fn test_tab_cycle_resets_selection_and_focuses_request() {
        let mut state = AppState::default();
        state.ui.selected_item = 3;
        state.ui.panel_focus = PanelFocus::Response;

        apply_action(AppAction::NextTab, &mut state);
        assert_eq!(state.ui.request_tab, RequestTab::Headers);
        assert_eq!(state.ui.selected_item, 0);
        assert_eq!(state.ui.panel_focus, PanelFocus::Request);

        apply_action(AppAction::PrevTab, &mut state);
        apply_action(AppAction::PrevTab, &mut state);
        assert_eq!(state.ui.request_tab, RequestTab::Auth);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = AppState::default();
        apply_action(AppAction::AddRow(RowList::Query), &mut state);
        assert_eq!(state.ui.selected_item, 1);

        apply_action(AppAction::SelectNext, &mut state);
        assert_eq!(state.ui.selected_item, 1);

        apply_action(AppAction::SelectPrevious, &mut state);
        apply_action(AppAction::SelectPrevious, &mut state);
        assert_eq!(state.ui.selected_item, 0);
    }

    #[test]
    fn test_remove_row_clamps_selection() {
        let mut state = AppState::default();
        state.ui.request_tab = RequestTab::Headers;
        apply_action(AppAction::AddRow(RowList::Headers), &mut state);
        apply_action(AppAction::RemoveRow(RowList::Headers, 1), &mut state);
        assert_eq!(state.form.headers.len(), 1);
        assert_eq!(state.ui.selected_item, 0);
    }

    #[test]
    fn test_switching_to_get_empties_body_tab() {
        let mut state = AppState::default();
        state.form.method = HttpMethod::Options;
        state.ui.request_tab = RequestTab::Body;
        state.ui.selected_item = 1;

        apply_action(AppAction::NextMethod, &mut state);
        assert_eq!(state.form.method, HttpMethod::Get);
        assert_eq!(state.ui.selected_item, 0);
        assert!(state.request_items().is_empty());
    }

    #[test]
    fn test_edit_confirm_writes_back() {
        let mut state = AppState::default();
        state.validation.url_error = Some("Invalid URL: bad".to_string());

        apply_action(AppAction::StartEditing(EditTarget::Url), &mut state);
        assert_eq!(state.input.mode, InputMode::Editing(EditTarget::Url));
        state.input.editor.insert_str("https://example.com");

        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.form.url, "https://example.com");
        assert_eq!(state.input.mode, InputMode::Normal);
        assert!(state.validation.url_error.is_none());
    }

    #[test]
    fn test_edit_cancel_discards() {
        let mut state = AppState::default();
        state.form.json_body = "{}".to_string();

        apply_action(AppAction::StartEditing(EditTarget::JsonBody), &mut state);
        assert!(state.input.editor.is_multiline());
        state.input.editor.insert_str("garbage");

        apply_action(AppAction::CancelEdit, &mut state);
        assert_eq!(state.form.json_body, "{}");
        assert_eq!(state.input.editor.content(), "");
    }

    #[test]
    fn test_editor_input_and_paste() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut state = AppState::default();
        apply_action(AppAction::StartEditing(EditTarget::JsonBody), &mut state);
        apply_action(
            AppAction::EditorPaste("{\u{201C}a\u{201D}:1}".to_string()),
            &mut state,
        );
        apply_action(
            AppAction::EditorInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            &mut state,
        );
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.form.json_body, r#"{"a":1"#);

        apply_action(AppAction::StartEditing(EditTarget::Url), &mut state);
        apply_action(AppAction::EditorPaste("http://x\n/y".to_string()), &mut state);
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.form.url, "http://x/y");
    }

    #[test]
    fn test_tab_key_kept_in_text_body() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut state = AppState::default();
        apply_action(AppAction::StartEditing(EditTarget::TextBody), &mut state);
        apply_action(AppAction::EditorPaste("a".to_string()), &mut state);
        apply_action(
            AppAction::EditorInput(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            &mut state,
        );
        apply_action(AppAction::EditorPaste("b".to_string()), &mut state);
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.form.text_body, "a\tb");
    }

    #[test]
    fn test_format_json_body() {
        let mut state = AppState::default();
        state.form.json_body = r#"{"b":1,"a":2}"#.to_string();
        apply_action(AppAction::FormatJsonBody, &mut state);
        assert_eq!(state.form.json_body, "{\n  \"b\": 1,\n  \"a\": 2\n}");

        state.form.json_body = "{nope".to_string();
        apply_action(AppAction::FormatJsonBody, &mut state);
        assert_eq!(state.form.json_body, "{nope");
        assert!(state
            .validation
            .body_error
            .as_deref()
            .is_some_and(|e| e.starts_with("Invalid JSON body: ")));
    }

    #[test]
    fn test_clear_form_restores_defaults() {
        let mut state = AppState::new(RequestDefaults {
            default_url: Some("https://api.local".to_string()),
            default_method: HttpMethod::Post,
            ..Default::default()
        });
        state.form.url = "https://other".to_string();
        state.form.method = HttpMethod::Delete;
        state.form.auth.kind = AuthKind::Bearer;
        state.form.add_row(RowList::Headers);
        state.response = ResponseView::Failed("Network error: boom".to_string());

        apply_action(AppAction::ClearForm, &mut state);
        assert_eq!(state.form.url, "https://api.local");
        assert_eq!(state.form.method, HttpMethod::Post);
        assert_eq!(state.form.auth.kind, AuthKind::None);
        assert_eq!(state.form.headers.len(), 1);
        // The displayed response is not part of the form
        assert!(matches!(state.response, ResponseView::Failed(_)));
    }

    #[test]
    fn test_request_lifecycle_success() {
        let mut state = AppState::default();
        state.ui.body_view = BodyView::Raw;
        state.ui.response_scroll = 12;

        apply_action(AppAction::BeginRequest, &mut state);
        assert!(state.response.is_loading());
        assert_eq!(state.ui.response_scroll, 0);

        apply_action(AppAction::CompleteRequest(Ok(summary(404, "nope"))), &mut state);
        match &state.response {
            ResponseView::Loaded(display) => assert_eq!(display.summary.status_code, 404),
            other => panic!("expected loaded response, got {other:?}"),
        }
        assert_eq!(state.ui.body_view, BodyView::Pretty);
    }

    #[test]
    fn test_request_lifecycle_failure_shows_message() {
        let mut state = AppState::default();
        apply_action(AppAction::BeginRequest, &mut state);
        apply_action(
            AppAction::CompleteRequest(Err(TransportError::new("connection refused"))),
            &mut state,
        );
        assert_eq!(
            state.response,
            ResponseView::Failed("Network error: connection refused".to_string())
        );
    }

    #[test]
    fn test_set_validation_marks_fields() {
        let mut state = AppState::default();
        apply_action(
            AppAction::SetValidation(vec![ValidationError::InvalidUrl("x".to_string())]),
            &mut state,
        );
        assert!(state.validation.url_error.is_some());
        assert!(state.validation.body_error.is_none());

        apply_action(AppAction::BeginRequest, &mut state);
        assert!(state.validation.is_empty());
    }

    #[test]
    fn test_response_scroll_stays_in_bounds() {
        let mut state = AppState::default();
        apply_action(AppAction::ScrollResponseDown(5), &mut state);
        assert_eq!(state.ui.response_scroll, 0);

        let body = (1..=20).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        apply_action(AppAction::CompleteRequest(Ok(summary(200, &body))), &mut state);
        // Empty header list, spacer, body title and 20 body lines
        assert_eq!(state.max_response_scroll(), 22);

        apply_action(AppAction::ScrollResponseUp(5), &mut state);
        assert_eq!(state.ui.response_scroll, 0);
        for _ in 0..10 {
            apply_action(AppAction::ScrollResponseDown(5), &mut state);
        }
        assert_eq!(state.ui.response_scroll, 22);

        // Scrolling back responds on the first press
        apply_action(AppAction::ScrollResponseUp(5), &mut state);
        assert_eq!(state.ui.response_scroll, 17);
    }

    #[test]
    fn test_copy_marker_and_fallback() {
        let mut state = AppState::default();
        let now = Instant::now();
        apply_action(AppAction::MarkCopied(now), &mut state);
        assert!(state.copy_confirmation_visible(now + Duration::from_secs(1)));

        apply_action(AppAction::OpenCopyFallback, &mut state);
        assert_eq!(state.input.mode, InputMode::CopyFallback);
        apply_action(AppAction::ScrollCopyFallbackDown(3), &mut state);
        assert_eq!(state.input.copy_fallback_scroll, 3);
        apply_action(AppAction::CloseCopyFallback, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_toggle_api_key_location_and_auth_kind() {
        use crate::types::ApiKeyLocation;
        let mut state = AppState::default();
        apply_action(AppAction::CycleAuthKind, &mut state);
        assert_eq!(state.form.auth.kind, AuthKind::Basic);
        apply_action(AppAction::ToggleApiKeyLocation, &mut state);
        assert_eq!(state.form.auth.api_key_location, ApiKeyLocation::Query);
    }
}
