//! Request composition
//!
//! Turns a `FormState` snapshot into a `RequestDescriptor`. No network I/O
//! happens here; everything that can be rejected is rejected before transport.

use crate::error::ValidationError;
use crate::form::FormState;
use crate::types::{
    ApiKeyLocation, AuthConfig, ContentType, KeyValueRow, OrderedMap, RequestBody,
    RequestDescriptor, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

/// Check every field at once so the UI can mark all invalid inputs
pub fn validate_form(form: &FormState) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = parse_url(&form.url) {
        errors.push(e);
    }
    if let Err(e) = parse_json_body(form) {
        errors.push(e);
    }

    errors
}

/// Build the descriptor for a submission, re-running the form checks
pub fn compose(form: &FormState) -> Result<RequestDescriptor, ValidationError> {
    let url = parse_url(&form.url)?;
    let json_body = parse_json_body(form)?;

    let mut headers = collect_rows(&form.headers);
    let mut query_params = collect_rows(&form.query);

    apply_auth(&form.auth.to_config(), &mut headers, &mut query_params);

    let body = if form.method.allows_body() {
        headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            form.content_type.mime().to_string(),
        );

        match form.content_type {
            ContentType::Json => json_body.map(RequestBody::Json),
            ContentType::FormUrlEncoded => Some(RequestBody::UrlEncoded(collect_rows(&form.form))),
            ContentType::Multipart => Some(RequestBody::Multipart(collect_rows(&form.form))),
            ContentType::PlainText => Some(RequestBody::Text(form.text_body.clone())),
            ContentType::Xml => Some(RequestBody::Text(form.xml_body.clone())),
        }
    } else {
        None
    };

    Ok(RequestDescriptor {
        method: form.method,
        url,
        headers,
        query_params,
        body,
    })
}

/// Rows with a blank key are skipped; a repeated key overwrites the earlier value
pub fn collect_rows(rows: &[KeyValueRow]) -> OrderedMap {
    let mut map = OrderedMap::new();
    for row in rows {
        let key = row.key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), row.value.clone());
    }
    map
}

/// Inject credentials; incomplete credentials add nothing
pub fn apply_auth(auth: &AuthConfig, headers: &mut OrderedMap, query_params: &mut OrderedMap) {
    match auth {
        AuthConfig::None => {}
        AuthConfig::Basic { username, password } => {
            if !username.is_empty() && !password.is_empty() {
                let credentials = STANDARD.encode(format!("{username}:{password}"));
                headers.insert(
                    AUTHORIZATION_HEADER.to_string(),
                    format!("Basic {credentials}"),
                );
            }
        }
        AuthConfig::Bearer { token } => {
            if !token.is_empty() {
                headers.insert(AUTHORIZATION_HEADER.to_string(), format!("Bearer {token}"));
            }
        }
        AuthConfig::ApiKey {
            name,
            value,
            location,
        } => {
            if !name.is_empty() && !value.is_empty() {
                let target = match location {
                    ApiKeyLocation::Header => headers,
                    ApiKeyLocation::Query => query_params,
                };
                target.insert(name.clone(), value.clone());
            }
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUrl("URL cannot be empty".to_string()));
    }

    Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl(format!("{trimmed}: {e}")))
}

/// Only a non-blank body under the JSON content type is checked
fn parse_json_body(form: &FormState) -> Result<Option<serde_json::Value>, ValidationError> {
    if form.content_type != ContentType::Json || form.json_body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&form.json_body)
        .map(Some)
        .map_err(|e| ValidationError::InvalidJsonBody(e.to_string()))
}
