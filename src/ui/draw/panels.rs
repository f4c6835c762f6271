//! Main panel rendering
//!
//! - Request panel (left side) - tab bar plus the active request tab
//! - Response panel (right side) - status line, then headers and body

use super::components::SPINNER;
use super::highlight::{highlight_body, plain_lines};
use super::styling::{self, get_status_color};
use super::tabs::{render_request_tab, render_wrapped_hint, to_u16};
use crate::response::{BodyFormat, BodyView, ResponseDisplay, ResponseView};
use crate::state::AppState;
use crate::types::{PanelFocus, RequestTab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const MAX_HEADER_NAME_WIDTH: usize = 32;

/// Render the left panel with the request tabs
pub fn render_request_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.panel_focus == PanelFocus::Request;

    let block = Block::default()
        .title("[1] Request")
        .borders(Borders::ALL)
        .border_style(styling::border_style(focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Content area
        ])
        .split(inner_area);

    render_tab_bar(frame, chunks[0], state);
    render_request_tab(frame, chunks[2], state, focused);
}

/// Render the right panel with the current response view
pub fn render_response_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
) {
    let focused = state.ui.panel_focus == PanelFocus::Response;

    let block = Block::default()
        .title("[2] Response")
        .borders(Borders::ALL)
        .border_style(styling::border_style(focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &state.response {
        ResponseView::Empty => {
            render_wrapped_hint(frame, inner_area, "Press [Space] to send the request");
        }
        ResponseView::Loading => {
            let loading = Paragraph::new(format!(
                "{} Sending request...",
                SPINNER[spinner_index % SPINNER.len()]
            ))
            .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, inner_area);
        }
        ResponseView::Failed(message) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "❌ Error",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for line in message.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    styling::error_style(),
                )));
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner_area);
        }
        ResponseView::Loaded(display) => {
            render_loaded_response(frame, inner_area, state, display);
        }
    }
}

/// Render the tab bar showing [ Params ] [ Headers ] [ Body ] [ Auth ]
fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let separator = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("[ ", separator)];

    for (idx, tab) in RequestTab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ] [ ", separator));
        }

        let style = if *tab == state.ui.request_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let has_error = *tab == RequestTab::Body && state.validation.body_error.is_some();
        let label = if has_error {
            format!("{} !", tab.title())
        } else {
            tab.title().to_string()
        };

        spans.push(Span::styled(
            label,
            if has_error {
                style.fg(Color::Red)
            } else {
                style
            },
        ));
    }
    spans.push(Span::styled(" ]", separator));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Headers and body scroll together below the fixed status line
fn render_loaded_response(frame: &mut Frame, area: Rect, state: &AppState, display: &ResponseDisplay) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Headers + body
        ])
        .split(area);

    render_status_line(frame, chunks[0], state, display);

    let mut lines = header_lines(display);
    lines.push(Line::from(""));

    let view_label = match (state.ui.body_view, display.body_format) {
        (BodyView::Raw, _) => "Raw",
        (BodyView::Pretty, BodyFormat::Json) => "Pretty (JSON)",
        (BodyView::Pretty, BodyFormat::Xml) => "Pretty (XML)",
        (BodyView::Pretty, BodyFormat::PlainText) => "Pretty (Text)",
    };
    lines.push(Line::from(vec![
        Span::styled("Body ", section_style()),
        Span::styled(format!("[{view_label}]"), styling::hint_style()),
    ]));

    match state.ui.body_view {
        BodyView::Pretty => lines.extend(highlight_body(display.body_format, display.raw_text())),
        BodyView::Raw => lines.extend(plain_lines(display.raw_text())),
    }

    let max_scroll = lines.len().saturating_sub(1);
    let scroll = state.ui.response_scroll.min(max_scroll);

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((to_u16(scroll), 0));
    frame.render_widget(content, chunks[2]);
}

fn section_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

fn header_lines(display: &ResponseDisplay) -> Vec<Line<'static>> {
    let headers = &display.summary.headers;
    let mut lines = vec![Line::from(Span::styled(
        format!("Headers ({})", headers.len()),
        section_style(),
    ))];

    let name_width = headers
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_HEADER_NAME_WIDTH);

    for (name, value) in headers {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {name:name_width$}"),
                styling::label_style(),
            ),
            Span::styled("  ", styling::hint_style()),
            Span::raw(value.clone()),
        ]));
    }

    lines
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, display: &ResponseDisplay) {
    let status_color = get_status_color(display.status_class);

    let mut spans = vec![
        Span::styled("Status: ", styling::label_style()),
        Span::styled(
            display.status_line(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Time: ", styling::label_style()),
        Span::raw(display.elapsed_label.clone()),
        Span::raw("  "),
        Span::styled("Size: ", styling::label_style()),
        Span::raw(display.size_label.clone()),
    ];

    if state.copy_confirmation_visible(Instant::now()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Copied!",
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
