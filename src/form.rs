//! Editable request form
//!
//! `FormState` is the snapshot the composer reads. It owns the three row lists,
//! one body text per text encoding, and every auth field.

use crate::config::RequestDefaults;
use crate::types::{
    AuthField, AuthInputs, ContentType, EditTarget, HttpMethod, KeyValueRow, RowList,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<KeyValueRow>,
    pub query: Vec<KeyValueRow>,
    pub form: Vec<KeyValueRow>,
    pub content_type: ContentType,
    pub json_body: String,
    pub text_body: String,
    pub xml_body: String,
    pub auth: AuthInputs,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: String::new(),
            headers: vec![KeyValueRow::default()],
            query: vec![KeyValueRow::default()],
            form: vec![KeyValueRow::default()],
            content_type: ContentType::Json,
            json_body: String::new(),
            text_body: String::new(),
            xml_body: String::new(),
            auth: AuthInputs::default(),
        }
    }
}

impl FormState {
    pub fn from_defaults(defaults: &RequestDefaults) -> Self {
        Self {
            method: defaults.default_method,
            url: defaults.default_url.clone().unwrap_or_default(),
            content_type: defaults.default_content_type,
            ..Default::default()
        }
    }

    pub fn rows(&self, list: RowList) -> &[KeyValueRow] {
        match list {
            RowList::Query => &self.query,
            RowList::Headers => &self.headers,
            RowList::Form => &self.form,
        }
    }

    pub fn rows_mut(&mut self, list: RowList) -> &mut Vec<KeyValueRow> {
        match list {
            RowList::Query => &mut self.query,
            RowList::Headers => &mut self.headers,
            RowList::Form => &mut self.form,
        }
    }

    /// Append an empty row, returning its index
    pub fn add_row(&mut self, list: RowList) -> usize {
        let rows = self.rows_mut(list);
        rows.push(KeyValueRow::default());
        rows.len() - 1
    }

    /// Remove a row; the last remaining row is cleared instead
    pub fn remove_row(&mut self, list: RowList, index: usize) {
        let rows = self.rows_mut(list);
        if index >= rows.len() {
            return;
        }
        if rows.len() == 1 {
            rows[0] = KeyValueRow::default();
        } else {
            rows.remove(index);
        }
    }

    /// Editing target of the body editor for the active content type
    pub fn body_target(&self) -> Option<EditTarget> {
        match self.content_type {
            ContentType::Json => Some(EditTarget::JsonBody),
            ContentType::PlainText => Some(EditTarget::TextBody),
            ContentType::Xml => Some(EditTarget::XmlBody),
            ContentType::FormUrlEncoded | ContentType::Multipart => None,
        }
    }

    pub fn field_value(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Url => self.url.clone(),
            EditTarget::RowKey(list, idx) => self
                .rows(list)
                .get(idx)
                .map(|row| row.key.clone())
                .unwrap_or_default(),
            EditTarget::RowValue(list, idx) => self
                .rows(list)
                .get(idx)
                .map(|row| row.value.clone())
                .unwrap_or_default(),
            EditTarget::JsonBody => self.json_body.clone(),
            EditTarget::TextBody => self.text_body.clone(),
            EditTarget::XmlBody => self.xml_body.clone(),
            EditTarget::Auth(field) => self.auth_field(field).to_string(),
        }
    }

    pub fn set_field(&mut self, target: EditTarget, value: String) {
        match target {
            EditTarget::Url => self.url = value,
            EditTarget::RowKey(list, idx) => {
                if let Some(row) = self.rows_mut(list).get_mut(idx) {
                    row.key = value;
                }
            }
            EditTarget::RowValue(list, idx) => {
                if let Some(row) = self.rows_mut(list).get_mut(idx) {
                    row.value = value;
                }
            }
            EditTarget::JsonBody => self.json_body = value,
            EditTarget::TextBody => self.text_body = value,
            EditTarget::XmlBody => self.xml_body = value,
            EditTarget::Auth(field) => *self.auth_field_mut(field) = value,
        }
    }

    pub fn auth_field(&self, field: AuthField) -> &str {
        match field {
            AuthField::Username => &self.auth.username,
            AuthField::Password => &self.auth.password,
            AuthField::Token => &self.auth.token,
            AuthField::ApiKeyName => &self.auth.api_key_name,
            AuthField::ApiKeyValue => &self.auth.api_key_value,
        }
    }

    fn auth_field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Username => &mut self.auth.username,
            AuthField::Password => &mut self.auth.password,
            AuthField::Token => &mut self.auth.token,
            AuthField::ApiKeyName => &mut self.auth.api_key_name,
            AuthField::ApiKeyValue => &mut self.auth.api_key_value,
        }
    }
}
