//! Response presentation model
//!
//! Classifies the status, picks the body format and prepares the text shown
//! in the pretty and raw views. Drawing lives in `ui::draw::response`.

use crate::types::ResponseSummary;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Severity bucket of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Informational,
}

pub fn classify_status(status_code: u16) -> StatusClass {
    match status_code {
        200..=299 => StatusClass::Success,
        300..=399 => StatusClass::Redirect,
        400..=499 => StatusClass::ClientError,
        500..=599 => StatusClass::ServerError,
        _ => StatusClass::Informational,
    }
}

/// How the body is highlighted in the pretty view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Xml,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyView {
    #[default]
    Pretty,
    Raw,
}

impl BodyView {
    pub fn toggle(self) -> Self {
        match self {
            BodyView::Pretty => BodyView::Raw,
            BodyView::Raw => BodyView::Pretty,
        }
    }
}

/// Human-readable size on a 1024 basis, at most two decimals
pub fn format_size(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Body format and the text shared by both views
pub fn format_body(summary: &ResponseSummary) -> (BodyFormat, String) {
    if summary.is_json {
        if let Some(value) = &summary.body_parsed {
            if let Ok(pretty) = serde_json::to_string_pretty(value) {
                return (BodyFormat::Json, pretty);
            }
        }
    }

    if summary.body_raw.trim_start().starts_with('<') {
        (BodyFormat::Xml, summary.body_raw.clone())
    } else {
        (BodyFormat::PlainText, summary.body_raw.clone())
    }
}

/// A completed response prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDisplay {
    pub summary: ResponseSummary,
    pub status_class: StatusClass,
    pub body_format: BodyFormat,
    body_text: String,
    pub size_label: String,
    pub elapsed_label: String,
}

impl ResponseDisplay {
    pub fn new(summary: ResponseSummary) -> Self {
        let status_class = classify_status(summary.status_code);
        let (body_format, body_text) = format_body(&summary);
        let size_label = format_size(summary.size_bytes);
        let elapsed_label = format!("{} ms", summary.elapsed_ms);

        Self {
            summary,
            status_class,
            body_format,
            body_text,
            size_label,
            elapsed_label,
        }
    }

    /// Text of the raw view, also what the copy action copies
    pub fn raw_text(&self) -> &str {
        &self.body_text
    }

    /// Lines of the scrollable area: headers section, spacer, body title, body
    pub fn line_count(&self) -> usize {
        self.summary.headers.len() + 3 + self.body_text.lines().count()
    }

    pub fn status_line(&self) -> String {
        if self.summary.status_text.is_empty() {
            self.summary.status_code.to_string()
        } else {
            format!("{} {}", self.summary.status_code, self.summary.status_text)
        }
    }
}

/// The response panel shows exactly one of these
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseView {
    #[default]
    Empty,
    Loading,
    Loaded(Box<ResponseDisplay>),
    Failed(String),
}

impl ResponseView {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResponseView::Loading)
    }
}
