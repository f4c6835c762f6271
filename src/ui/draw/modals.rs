//! Modal dialog rendering
//!
//! - Field editor (single-line fields and multi-line bodies)
//! - Copy fallback (raw body shown for manual selection)

use super::styling;
use super::tabs::to_u16;
use crate::editor::TextEditor;
use crate::state::AppState;
use crate::types::EditTarget;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn modal_block(title: String, color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(styling::modal_style())
}

/// Render the editing modal for `target`
pub fn render_edit_modal(frame: &mut Frame, state: &AppState, target: EditTarget) {
    if target.is_multiline() {
        render_body_editor_modal(frame, &state.input.editor, target);
    } else {
        render_field_editor_modal(frame, &state.input.editor, target);
    }
}

fn render_field_editor_modal(frame: &mut Frame, editor: &TextEditor, target: EditTarget) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.6).min(80.0) as u16;
    let modal_area = centered_rect(area, modal_width, 7);

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = modal_block(format!(" Edit {} ", target.title()), Color::Cyan);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let label = Paragraph::new(format!("{}:", target.title()))
        .style(Style::default().fg(Color::LightCyan));
    frame.render_widget(label, chunks[0]);

    // Show the full value while editing, scrolled so the cursor stays visible
    let (_, col) = editor.cursor_line_col();
    let width = chunks[1].width as usize;
    let offset = (col + 1).saturating_sub(width);

    let input = Paragraph::new(editor.content().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .scroll((0, to_u16(offset)));
    frame.render_widget(input, chunks[1]);

    frame.set_cursor_position(Position {
        x: chunks[1].x + to_u16(col.saturating_sub(offset)),
        y: chunks[1].y,
    });

    let help = Paragraph::new("Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(styling::help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn render_body_editor_modal(frame: &mut Frame, editor: &TextEditor, target: EditTarget) {
    let area = frame.area();

    // Larger modal for multi-line editing
    let modal_width = (area.width as f32 * 0.8).min(100.0) as u16;
    let modal_height = (area.height as f32 * 0.7).min(30.0) as u16;
    let modal_area = centered_rect(area, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(format!(" Edit {} ", target.title()), Color::Green);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Body content (grows)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let (line, col) = editor.cursor_line_col();
    let height = chunks[0].height as usize;
    let width = chunks[0].width as usize;
    let row_offset = (line + 1).saturating_sub(height);
    let col_offset = (col + 1).saturating_sub(width);

    let body_text = Paragraph::new(editor.content().to_string())
        .style(Style::default().fg(Color::Yellow))
        .scroll((to_u16(row_offset), to_u16(col_offset)));
    frame.render_widget(body_text, chunks[0]);

    frame.set_cursor_position(Position {
        x: chunks[0].x + to_u16(col.saturating_sub(col_offset)),
        y: chunks[0].y + to_u16(line.saturating_sub(row_offset)),
    });

    let help = Paragraph::new("Enter: Save  |  Ctrl+N: Newline  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(styling::help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

/// Raw body for manual selection when the clipboard is unavailable
pub fn render_copy_fallback_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.9) as u16;
    let modal_height = (area.height as f32 * 0.8) as u16;
    let modal_area = centered_rect(area, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Clipboard unavailable ".to_string(), Color::Yellow);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Message
            Constraint::Min(1),    // Text
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let message = Paragraph::new("Select the text below with your terminal and copy it manually.")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(message, chunks[0]);

    let text = state.copyable_text().unwrap_or_default().to_string();
    let content = Paragraph::new(text).scroll((to_u16(state.input.copy_fallback_scroll), 0));
    frame.render_widget(content, chunks[1]);

    let help = Paragraph::new("j/k: Scroll  |  Esc: Close")
        .style(styling::help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
