//! Request tab rendering
//!
//! - Params and Headers tabs (key/value rows)
//! - Body tab (content type selector, body preview or form rows)
//! - Auth tab (auth type selector and credential fields)

use super::highlight::{highlight_json, plain_lines};
use super::styling;
use crate::state::{AppState, RequestItem};
use crate::types::{AuthField, ContentType, EditTarget, KeyValueRow, RowColumn, RowList};
use crate::utils::mask_secret;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 24;
const BODY_PREVIEW_LINES: usize = 200;

/// Render the content of the active request tab
pub fn render_request_tab(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let items = state.request_items();
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;

    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} requests do not carry a body", state.form.method),
            styling::hint_style(),
        )));
    }

    for (idx, item) in items.iter().enumerate() {
        let is_selected = focused && idx == state.ui.selected_item;
        if is_selected {
            selected_line = lines.len();
        }

        match *item {
            RequestItem::Row(list, row_idx) => {
                if idx == 0 || !matches!(items[idx - 1], RequestItem::Row(..)) {
                    lines.push(row_header(list));
                    if is_selected {
                        selected_line = lines.len();
                    }
                }
                if let Some(row) = state.form.rows(list).get(row_idx) {
                    lines.push(row_line(row, is_selected, state.ui.selected_column));
                }
            }
            RequestItem::ContentTypeSelector => {
                lines.push(selector_line(
                    "Content-Type",
                    state.form.content_type.mime(),
                    "c",
                    is_selected,
                ));
                lines.push(Line::from(""));
            }
            RequestItem::BodyEditor(target) => {
                body_preview(&mut lines, state, target, is_selected);
            }
            RequestItem::AuthKindSelector => {
                lines.push(selector_line(
                    "Type",
                    state.form.auth.kind.label(),
                    "t",
                    is_selected,
                ));
                lines.push(Line::from(""));
            }
            RequestItem::AuthField(field) => {
                lines.push(auth_field_line(state, field, is_selected));
            }
            RequestItem::ApiKeyLocation => {
                lines.push(selector_line(
                    "Add to",
                    state.form.auth.api_key_location.label(),
                    "Enter",
                    is_selected,
                ));
            }
        }
    }

    // Keep the selection visible
    let height = area.height as usize;
    let scroll = selected_line.saturating_sub(height.saturating_sub(1));

    let content = Paragraph::new(lines).scroll((to_u16(scroll), 0));
    frame.render_widget(content, area);
}

pub(super) fn to_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

fn row_header(list: RowList) -> Line<'static> {
    let title = match list {
        RowList::Query => "Query Parameters:",
        RowList::Headers => "Request Headers:",
        RowList::Form => "Form Fields:",
    };
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row_line(row: &KeyValueRow, is_selected: bool, column: RowColumn) -> Line<'static> {
    let cell_style = |col: RowColumn| {
        if is_selected && column == col {
            styling::selected_style()
        } else {
            Style::default()
        }
    };

    let key = if row.key.is_empty() {
        Span::styled(
            format!("{:width$}", "<key>", width = KEY_COLUMN_WIDTH),
            styling::hint_style().patch(cell_style(RowColumn::Key)),
        )
    } else {
        Span::styled(
            format!("{:width$}", row.key, width = KEY_COLUMN_WIDTH),
            cell_style(RowColumn::Key),
        )
    };

    let value = if row.value.is_empty() {
        Span::styled("<value>", styling::hint_style().patch(cell_style(RowColumn::Value)))
    } else {
        Span::styled(row.value.clone(), cell_style(RowColumn::Value))
    };

    Line::from(vec![
        Span::raw(if is_selected { ">> " } else { "   " }),
        key,
        Span::styled(" = ", styling::hint_style()),
        value,
    ])
}

fn selector_line(label: &str, value: &str, key_hint: &str, is_selected: bool) -> Line<'static> {
    let value_style = if is_selected {
        styling::selected_style()
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::raw(if is_selected { ">> " } else { "   " }),
        Span::styled(format!("{label}: "), styling::label_style()),
        Span::styled(format!("< {value} >"), value_style),
        Span::styled(format!("  ({key_hint} to change)"), styling::hint_style()),
    ])
}

fn body_preview(lines: &mut Vec<Line>, state: &AppState, target: EditTarget, is_selected: bool) {
    let text = state.form.field_value(target);

    lines.push(Line::from(vec![
        Span::raw(if is_selected { ">> " } else { "   " }),
        Span::styled(
            format!("{}:", target.title()),
            if is_selected {
                styling::selected_style()
            } else {
                styling::label_style()
            },
        ),
        Span::styled("  (e to edit", styling::hint_style()),
        Span::styled(
            if state.form.content_type == ContentType::Json {
                ", f to format)"
            } else {
                ")"
            },
            styling::hint_style(),
        ),
    ]));

    if let Some(error) = &state.validation.body_error {
        lines.push(Line::from(Span::styled(
            format!("   {error}"),
            styling::error_style(),
        )));
    }

    if text.trim().is_empty() {
        lines.push(Line::from(Span::styled("   (empty)", styling::hint_style())));
        return;
    }

    let body_lines = if target == EditTarget::JsonBody {
        highlight_json(&text)
    } else {
        plain_lines(&text)
    };

    for line in body_lines.into_iter().take(BODY_PREVIEW_LINES) {
        let mut spans = vec![Span::raw("   ")];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
}

fn auth_field_line(state: &AppState, field: AuthField, is_selected: bool) -> Line<'static> {
    let value = state.form.auth_field(field);

    let shown = if value.is_empty() {
        Span::styled("<empty>", styling::hint_style())
    } else if field.is_secret() {
        Span::raw(mask_secret(value))
    } else {
        Span::raw(value.to_string())
    };

    let label_style = if is_selected {
        styling::selected_style()
    } else {
        styling::label_style()
    };

    Line::from(vec![
        Span::raw(if is_selected { ">> " } else { "   " }),
        Span::styled(format!("{:10}", format!("{}:", field.label())), label_style),
        shown,
    ])
}

/// Body of the request panel when the tab has nothing to list
pub fn render_wrapped_hint(frame: &mut Frame, area: Rect, text: &str) {
    let hint = Paragraph::new(text.to_string())
        .style(styling::hint_style())
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, area);
}
