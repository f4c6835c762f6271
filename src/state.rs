use crate::config::RequestDefaults;
use crate::editor::TextEditor;
use crate::error::ValidationError;
use crate::form::FormState;
use crate::response::{BodyView, ResponseView};
use crate::types::{
    AuthField, AuthKind, EditTarget, InputMode, PanelFocus, RequestTab, RowColumn, RowList,
};
use std::time::{Duration, Instant};

/// How long the "Copied!" marker stays visible
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    /// What "clear form" resets to
    pub defaults: RequestDefaults,
    pub validation: ValidationState,
    pub response: ResponseView,
    pub ui: UiState,
    pub input: InputState,
}

/// Inline field errors from the last submit attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    pub url_error: Option<String>,
    pub body_error: Option<String>,
}

impl ValidationState {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut validation = Self::default();
        for error in errors {
            match error {
                ValidationError::InvalidUrl(_) => validation.url_error = Some(error.to_string()),
                ValidationError::InvalidJsonBody(_) => {
                    validation.body_error = Some(error.to_string())
                }
            }
        }
        validation
    }

    pub fn is_empty(&self) -> bool {
        self.url_error.is_none() && self.body_error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub panel_focus: PanelFocus,
    pub request_tab: RequestTab,
    /// Index into `AppState::request_items`
    pub selected_item: usize,
    pub selected_column: RowColumn,
    pub body_view: BodyView,
    /// Scroll offset for the response body (lines)
    pub response_scroll: usize,
    pub copied_at: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mode: InputMode,
    pub editor: TextEditor,
    pub copy_fallback_scroll: usize,
}

/// One selectable line of the active request tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestItem {
    Row(RowList, usize),
    ContentTypeSelector,
    BodyEditor(EditTarget),
    AuthKindSelector,
    AuthField(AuthField),
    ApiKeyLocation,
}

impl AppState {
    pub fn new(defaults: RequestDefaults) -> Self {
        Self {
            form: FormState::from_defaults(&defaults),
            defaults,
            ..Default::default()
        }
    }

    /// Items of the active request tab, top to bottom
    pub fn request_items(&self) -> Vec<RequestItem> {
        let rows = |list: RowList| {
            (0..self.form.rows(list).len())
                .map(move |idx| RequestItem::Row(list, idx))
                .collect::<Vec<_>>()
        };

        match self.ui.request_tab {
            RequestTab::Params => rows(RowList::Query),
            RequestTab::Headers => rows(RowList::Headers),
            RequestTab::Body => {
                if !self.form.method.allows_body() {
                    return Vec::new();
                }
                let mut items = vec![RequestItem::ContentTypeSelector];
                match self.form.body_target() {
                    Some(target) => items.push(RequestItem::BodyEditor(target)),
                    None => items.extend(rows(RowList::Form)),
                }
                items
            }
            RequestTab::Auth => {
                let mut items = vec![RequestItem::AuthKindSelector];
                match self.form.auth.kind {
                    AuthKind::None => {}
                    AuthKind::Basic => items.extend([
                        RequestItem::AuthField(AuthField::Username),
                        RequestItem::AuthField(AuthField::Password),
                    ]),
                    AuthKind::Bearer => items.push(RequestItem::AuthField(AuthField::Token)),
                    AuthKind::ApiKey => items.extend([
                        RequestItem::AuthField(AuthField::ApiKeyName),
                        RequestItem::AuthField(AuthField::ApiKeyValue),
                        RequestItem::ApiKeyLocation,
                    ]),
                }
                items
            }
        }
    }

    pub fn selected_request_item(&self) -> Option<RequestItem> {
        self.request_items().get(self.ui.selected_item).copied()
    }

    /// Row list that `a` appends to on the active tab
    pub fn active_row_list(&self) -> Option<RowList> {
        match self.ui.request_tab {
            RequestTab::Params => Some(RowList::Query),
            RequestTab::Headers => Some(RowList::Headers),
            RequestTab::Body
                if self.form.method.allows_body() && self.form.content_type.uses_form_rows() =>
            {
                Some(RowList::Form)
            }
            RequestTab::Body | RequestTab::Auth => None,
        }
    }

    /// Edit target for the selected item and column, if it is editable
    pub fn selected_edit_target(&self) -> Option<EditTarget> {
        match self.selected_request_item()? {
            RequestItem::Row(list, idx) => Some(match self.ui.selected_column {
                RowColumn::Key => EditTarget::RowKey(list, idx),
                RowColumn::Value => EditTarget::RowValue(list, idx),
            }),
            RequestItem::BodyEditor(target) => Some(target),
            RequestItem::AuthField(field) => Some(EditTarget::Auth(field)),
            RequestItem::ContentTypeSelector
            | RequestItem::AuthKindSelector
            | RequestItem::ApiKeyLocation => None,
        }
    }

    /// Keep the selection inside the item list after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.request_items().len();
        self.ui.selected_item = self.ui.selected_item.min(len.saturating_sub(1));
    }

    pub fn copy_confirmation_visible(&self, now: Instant) -> bool {
        self.ui
            .copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_CONFIRMATION)
    }

    /// Furthest the response panel can scroll, last line at the top
    pub fn max_response_scroll(&self) -> usize {
        match &self.response {
            ResponseView::Loaded(display) => display.line_count().saturating_sub(1),
            ResponseView::Empty | ResponseView::Loading | ResponseView::Failed(_) => 0,
        }
    }

    /// Text the copy action places on the clipboard
    pub fn copyable_text(&self) -> Option<&str> {
        match &self.response {
            ResponseView::Loaded(display) => Some(display.raw_text()),
            ResponseView::Failed(message) => Some(message.as_str()),
            ResponseView::Empty | ResponseView::Loading => None,
        }
    }
}
