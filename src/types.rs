use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Insertion-ordered string mapping used for headers, query parameters and form fields
pub type OrderedMap = IndexMap<String, String>;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// GET and HEAD never carry a body or a Content-Type
    pub fn allows_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Head)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "application/x-www-form-urlencoded")]
    FormUrlEncoded,
    #[serde(rename = "multipart/form-data")]
    Multipart,
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "application/xml")]
    Xml,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Json,
        ContentType::FormUrlEncoded,
        ContentType::Multipart,
        ContentType::PlainText,
        ContentType::Xml,
    ];

    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::Multipart => "multipart/form-data",
            ContentType::PlainText => "text/plain",
            ContentType::Xml => "application/xml",
        }
    }

    /// Form encodings take their body from the key/value rows instead of a text editor
    pub fn uses_form_rows(&self) -> bool {
        matches!(self, ContentType::FormUrlEncoded | ContentType::Multipart)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Where an API key credential is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiKeyLocation {
    #[default]
    Header,
    Query,
}

impl ApiKeyLocation {
    pub fn toggle(self) -> Self {
        match self {
            ApiKeyLocation::Header => ApiKeyLocation::Query,
            ApiKeyLocation::Query => ApiKeyLocation::Header,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiKeyLocation::Header => "Header",
            ApiKeyLocation::Query => "Query Params",
        }
    }
}

/// Authentication applied to a composed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    None,
    Basic {
        username: String,
        password: String,
    },
    Bearer {
        token: String,
    },
    ApiKey {
        name: String,
        value: String,
        location: ApiKeyLocation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthKind {
    #[default]
    None,
    Basic,
    Bearer,
    ApiKey,
}

impl AuthKind {
    pub fn next(self) -> Self {
        match self {
            AuthKind::None => AuthKind::Basic,
            AuthKind::Basic => AuthKind::Bearer,
            AuthKind::Bearer => AuthKind::ApiKey,
            AuthKind::ApiKey => AuthKind::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthKind::None => "No Auth",
            AuthKind::Basic => "Basic Auth",
            AuthKind::Bearer => "Bearer Token",
            AuthKind::ApiKey => "API Key",
        }
    }
}

/// Every credential field the user can fill in, kept across auth kind switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthInputs {
    pub kind: AuthKind,
    pub username: String,
    pub password: String,
    pub token: String,
    pub api_key_name: String,
    pub api_key_value: String,
    pub api_key_location: ApiKeyLocation,
}

impl AuthInputs {
    /// Snapshot the fields of the selected kind
    pub fn to_config(&self) -> AuthConfig {
        match self.kind {
            AuthKind::None => AuthConfig::None,
            AuthKind::Basic => AuthConfig::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            AuthKind::Bearer => AuthConfig::Bearer {
                token: self.token.clone(),
            },
            AuthKind::ApiKey => AuthConfig::ApiKey {
                name: self.api_key_name.clone(),
                value: self.api_key_value.clone(),
                location: self.api_key_location,
            },
        }
    }
}

/// One user-editable key/value row (header, query or form field)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueRow {
    pub key: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body of a composed request, one variant per encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    UrlEncoded(OrderedMap),
    Multipart(OrderedMap),
    /// Plain text and XML, sent verbatim
    Text(String),
}

/// A composed, ready-to-send request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: OrderedMap,
    pub query_params: OrderedMap,
    /// Always `None` for GET and HEAD
    pub body: Option<RequestBody>,
}

/// A completed HTTP response, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSummary {
    /// HTTP status code (200, 404, etc.)
    pub status_code: u16,

    /// Canonical reason phrase ("OK", "Not Found", etc.)
    pub status_text: String,

    /// Response headers in arrival order, names lowercase
    pub headers: OrderedMap,

    /// Full body as received
    pub body_raw: String,

    /// Parsed body when the server declared JSON and it parsed
    pub body_parsed: Option<serde_json::Value>,

    pub is_json: bool,

    /// Byte length of `body_raw`
    pub size_bytes: usize,

    pub elapsed_ms: u64,
}

/// Which row list a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowList {
    Query,
    Headers,
    Form,
}

/// Column of a key/value row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowColumn {
    #[default]
    Key,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
    Token,
    ApiKeyName,
    ApiKeyValue,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Username => "Username",
            AuthField::Password => "Password",
            AuthField::Token => "Token",
            AuthField::ApiKeyName => "Key",
            AuthField::ApiKeyValue => "Value",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            AuthField::Password | AuthField::Token | AuthField::ApiKeyValue
        )
    }
}

/// The form field an editing session writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Url,
    RowKey(RowList, usize),
    RowValue(RowList, usize),
    JsonBody,
    TextBody,
    XmlBody,
    Auth(AuthField),
}

impl EditTarget {
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            EditTarget::JsonBody | EditTarget::TextBody | EditTarget::XmlBody
        )
    }

    pub fn title(&self) -> String {
        match self {
            EditTarget::Url => "Request URL".to_string(),
            EditTarget::RowKey(list, _) => format!("{} Key", row_list_label(*list)),
            EditTarget::RowValue(list, _) => format!("{} Value", row_list_label(*list)),
            EditTarget::JsonBody => "JSON Body".to_string(),
            EditTarget::TextBody => "Text Body".to_string(),
            EditTarget::XmlBody => "XML Body".to_string(),
            EditTarget::Auth(field) => field.label().to_string(),
        }
    }
}

fn row_list_label(list: RowList) -> &'static str {
    match list {
        RowList::Query => "Query Param",
        RowList::Headers => "Header",
        RowList::Form => "Form Field",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing(EditTarget),
    /// Clipboard unavailable: raw text shown for manual selection
    CopyFallback,
}

/// Tracks which main panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    Request, // Left panel
    Response, // Right panel
}

/// Tabs of the request panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTab {
    #[default]
    Params,
    Headers,
    Body,
    Auth,
}

impl RequestTab {
    pub const ALL: [RequestTab; 4] = [
        RequestTab::Params,
        RequestTab::Headers,
        RequestTab::Body,
        RequestTab::Auth,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            RequestTab::Params => "Params",
            RequestTab::Headers => "Headers",
            RequestTab::Body => "Body",
            RequestTab::Auth => "Auth",
        }
    }
}
