//! Reusable UI components
//!
//! - Header (title, request status)
//! - URL bar (method and URL, inline URL error)
//! - Footer (command help for the focused area)

use super::styling::{self, get_method_color};
use crate::response::ResponseView;
use crate::state::AppState;
use crate::types::{InputMode, PanelFocus};
use crate::utils::truncate_start;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with request status
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let status_text = match &state.response {
        ResponseView::Empty => "Ready".to_string(),
        ResponseView::Loading => format!("{} Sending...", SPINNER[spinner_index % SPINNER.len()]),
        ResponseView::Loaded(display) => format!(
            "{} in {}",
            display.status_line(),
            display.elapsed_label
        ),
        ResponseView::Failed(_) => "Request failed".to_string(),
    };

    let header_text = format!("api-tester v{} [{status_text}]", env!("CARGO_PKG_VERSION"));

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the method selector and URL field
pub fn render_url_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let method = state.form.method;

    let (border, title) = match &state.validation.url_error {
        Some(error) => (styling::error_style(), format!(" URL - {error} ")),
        None => (Style::default().fg(Color::DarkGray), " URL (u) ".to_string()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);

    let available = block.inner(area).width.saturating_sub(9) as usize;

    let url_span = if state.form.url.is_empty() {
        Span::styled("Press [u] to enter a request URL", styling::hint_style())
    } else {
        Span::raw(truncate_start(&state.form.url, available))
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:7}", method.as_str()),
            Style::default()
                .fg(get_method_color(method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        url_span,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match state.input.mode {
        InputMode::Editing(target) if target.is_multiline() => {
            "Enter:Save  Ctrl+N:Newline  Esc:Cancel  Ctrl+L:Clear  ←↑↓→/Home/End:Move"
        }
        InputMode::Editing(_) => "Enter:Save  Esc:Cancel  Ctrl+L:Clear  ←/→/Home/End:Move",
        InputMode::CopyFallback => "Select the text with your terminal to copy  j/k:Scroll  Esc:Close",
        InputMode::Normal => match state.ui.panel_focus {
            PanelFocus::Request => {
                "Space:Send u:URL m/M:Method Tab:Tab j/k:Nav h/l:Col e:Edit a:Add d:Del c:Type t:Auth f:Format X:Clear 2:Response q:Quit"
            }
            PanelFocus::Response => {
                "Space:Send p:Pretty/Raw y:Copy j/k:Scroll Ctrl+D/U:Page 1:Request q:Quit"
            }
        },
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
