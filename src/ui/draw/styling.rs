//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::response::StatusClass;
use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Scroll lines per action (Ctrl+U / Ctrl+D)
pub const SCROLL_LINES_PER_ACTION: usize = 5;

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Cyan,
        HttpMethod::Head | HttpMethod::Options => Color::Magenta,
    }
}

pub fn get_status_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Success => Color::Green,
        StatusClass::Redirect => Color::Cyan,
        StatusClass::ClientError => Color::Yellow,
        StatusClass::ServerError => Color::Red,
        StatusClass::Informational => Color::Gray,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused {
        focused_border()
    } else {
        unfocused_border()
    })
}

pub fn label_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_style() -> Style {
    Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White)
}

pub fn help_style() -> Style {
    Style::default().fg(Color::Rgb(150, 150, 150))
}

// Syntax highlighting palette
pub fn json_key_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn json_string_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn json_number_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn json_literal_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub fn punctuation_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn xml_tag_style() -> Style {
    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
}

pub fn xml_attr_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn xml_comment_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
