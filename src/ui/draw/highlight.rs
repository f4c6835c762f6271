//! Syntax highlighting for response bodies
//!
//! Both highlighters work on already formatted text and return one styled
//! line per input line, so scrolling stays line-accurate.

use super::styling::{
    json_key_style, json_literal_style, json_number_style, json_string_style, punctuation_style,
    xml_attr_style, xml_comment_style, xml_tag_style,
};
use crate::response::BodyFormat;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub fn highlight_body(format: BodyFormat, text: &str) -> Vec<Line<'static>> {
    match format {
        BodyFormat::Json => highlight_json(text),
        BodyFormat::Xml => highlight_xml(text),
        BodyFormat::PlainText => plain_lines(text),
    }
}

pub fn plain_lines(text: &str) -> Vec<Line<'static>> {
    text.lines().map(|line| Line::from(line.to_string())).collect()
}

/// Spans of one line, adjacent runs with the same style merged
#[derive(Default)]
struct LineBuilder {
    spans: Vec<(String, Style)>,
}

impl LineBuilder {
    fn push(&mut self, text: &str, style: Style) {
        match self.spans.last_mut() {
            Some((last, last_style)) if *last_style == style => last.push_str(text),
            _ => self.spans.push((text.to_string(), style)),
        }
    }

    fn push_char(&mut self, c: char, style: Style) {
        let mut buf = [0u8; 4];
        self.push(c.encode_utf8(&mut buf), style);
    }

    fn finish(self) -> Line<'static> {
        Line::from(
            self.spans
                .into_iter()
                .map(|(text, style)| Span::styled(text, style))
                .collect::<Vec<_>>(),
        )
    }
}

pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let mut builder = LineBuilder::default();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let end = i.min(chars.len());
                let token: String = chars[start..end].iter().collect();
                let is_key = chars[end..]
                    .iter()
                    .find(|c| !c.is_whitespace())
                    .is_some_and(|c| *c == ':');
                let style = if is_key {
                    json_key_style()
                } else {
                    json_string_style()
                };
                builder.push(&token, style);
                i = end;
            }
            '-' | '0'..='9' => {
                let start = i;
                while i < chars.len()
                    && matches!(chars[i], '0'..='9' | '-' | '+' | '.' | 'e' | 'E')
                {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                builder.push(&token, json_number_style());
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                builder.push(&token, json_literal_style());
            }
            '{' | '}' | '[' | ']' | ',' | ':' => {
                builder.push_char(c, punctuation_style());
                i += 1;
            }
            _ => {
                builder.push_char(c, Style::default());
                i += 1;
            }
        }
    }

    builder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XmlState {
    Text,
    TagName,
    TagBody,
    AttrValue(char),
    Comment,
}

/// Tags, attribute names and values, comments; state carries across lines
pub fn highlight_xml(text: &str) -> Vec<Line<'static>> {
    let mut state = XmlState::Text;
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut builder = LineBuilder::default();
        let chars: Vec<char> = line.chars().collect();

        for (i, &c) in chars.iter().enumerate() {
            state = match state {
                XmlState::Text => {
                    if c == '<' {
                        let rest: String = chars[i..].iter().take(4).collect();
                        if rest == "<!--" {
                            builder.push_char(c, xml_comment_style());
                            XmlState::Comment
                        } else {
                            builder.push_char(c, punctuation_style());
                            XmlState::TagName
                        }
                    } else {
                        builder.push_char(c, Style::default());
                        XmlState::Text
                    }
                }
                XmlState::TagName => match c {
                    '>' => {
                        builder.push_char(c, punctuation_style());
                        XmlState::Text
                    }
                    '/' | '?' | '!' => {
                        builder.push_char(c, punctuation_style());
                        XmlState::TagName
                    }
                    c if c.is_whitespace() => {
                        builder.push_char(c, Style::default());
                        XmlState::TagBody
                    }
                    _ => {
                        builder.push_char(c, xml_tag_style());
                        XmlState::TagName
                    }
                },
                XmlState::TagBody => match c {
                    '>' => {
                        builder.push_char(c, punctuation_style());
                        XmlState::Text
                    }
                    '"' | '\'' => {
                        builder.push_char(c, json_string_style());
                        XmlState::AttrValue(c)
                    }
                    '=' | '/' | '?' => {
                        builder.push_char(c, punctuation_style());
                        XmlState::TagBody
                    }
                    c if c.is_whitespace() => {
                        builder.push_char(c, Style::default());
                        XmlState::TagBody
                    }
                    _ => {
                        builder.push_char(c, xml_attr_style());
                        XmlState::TagBody
                    }
                },
                XmlState::AttrValue(quote) => {
                    builder.push_char(c, json_string_style());
                    if c == quote {
                        XmlState::TagBody
                    } else {
                        XmlState::AttrValue(quote)
                    }
                }
                XmlState::Comment => {
                    builder.push_char(c, xml_comment_style());
                    if c == '>' && i >= 2 && chars[i - 1] == '-' && chars[i - 2] == '-' {
                        XmlState::Text
                    } else {
                        XmlState::Comment
                    }
                }
            };
        }

        lines.push(builder.finish());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(line: &Line<'_>) -> Vec<(String, Style)> {
        line.spans
            .iter()
            .map(|span| (span.content.to_string(), span.style))
            .collect()
    }

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_json_key_and_values() {
        let lines = highlight_json("{\n  \"name\": \"Ada\",\n  \"age\": 36,\n  \"ok\": true\n}");
        assert_eq!(lines.len(), 5);

        let name = spans(&lines[1]);
        assert!(name.contains(&("\"name\"".to_string(), json_key_style())));
        assert!(name.contains(&("\"Ada\"".to_string(), json_string_style())));

        let age = spans(&lines[2]);
        assert!(age.contains(&("36".to_string(), json_number_style())));

        let ok = spans(&lines[3]);
        assert!(ok.contains(&("true".to_string(), json_literal_style())));
    }

    #[test]
    fn test_json_escaped_quote_stays_in_string() {
        let lines = highlight_json(r#"  "say": "a \"b\" c""#);
        let line = spans(&lines[0]);
        assert!(line.contains(&(r#""a \"b\" c""#.to_string(), json_string_style())));
    }

    #[test]
    fn test_json_text_preserved() {
        let input = "[\n  -1.5e3,\n  null\n]";
        let lines = highlight_json(input);
        let rebuilt: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(rebuilt.join("\n"), input);
    }

    #[test]
    fn test_xml_tags_and_attributes() {
        let lines = highlight_xml(r#"<note id="7">hi</note>"#);
        let line = spans(&lines[0]);
        assert!(line.contains(&("note".to_string(), xml_tag_style())));
        assert!(line.contains(&("id".to_string(), xml_attr_style())));
        assert!(line.contains(&("\"7\"".to_string(), json_string_style())));
        assert!(line.contains(&("hi".to_string(), Style::default())));
        assert_eq!(text_of(&lines[0]), r#"<note id="7">hi</note>"#);
    }

    #[test]
    fn test_xml_comment_spans_lines() {
        let lines = highlight_xml("<!-- one\ntwo -->\n<a/>");
        assert_eq!(spans(&lines[1]), vec![("two -->".to_string(), xml_comment_style())]);
        assert!(spans(&lines[2]).contains(&("a".to_string(), xml_tag_style())));
    }

    #[test]
    fn test_plain_lines() {
        let lines = highlight_body(BodyFormat::PlainText, "a\nb");
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[1]), "b");
    }
}
