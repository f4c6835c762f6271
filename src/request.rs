use crate::actions::{apply_action, AppAction};
use crate::config::HttpConfig;
use crate::error::TransportError;
use crate::state::AppState;
use crate::types::{HttpMethod, OrderedMap, RequestBody, RequestDescriptor, ResponseSummary};
use parking_lot::RwLock;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

const MAX_REDIRECTS: usize = 10;

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Final wire form of a descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: PreparedBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    Empty,
    Text(String),
    /// The client writes the boundary-bearing Content-Type itself
    Multipart(Vec<(String, String)>),
}

/// Resolve query string, headers and body encoding without touching the network
pub fn prepare(descriptor: &RequestDescriptor) -> PreparedRequest {
    let url = build_url(&descriptor.url, &descriptor.query_params);

    let mut headers: Vec<(String, String)> = descriptor
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let body = match &descriptor.body {
        None => PreparedBody::Empty,
        Some(RequestBody::Json(value)) => PreparedBody::Text(value.to_string()),
        Some(RequestBody::UrlEncoded(fields)) => PreparedBody::Text(encode_form(fields)),
        Some(RequestBody::Multipart(fields)) => {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
            PreparedBody::Multipart(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
            )
        }
        Some(RequestBody::Text(text)) => PreparedBody::Text(text.clone()),
    };

    PreparedRequest {
        method: descriptor.method,
        url,
        headers,
        body,
    }
}

/// Append query parameters after any already present in the URL
pub(crate) fn build_url(base: &Url, query_params: &OrderedMap) -> Url {
    let mut url = base.clone();

    if !query_params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query_params {
            pairs.append_pair(key, value);
        }
    }

    url
}

/// `application/x-www-form-urlencoded` serialization of the form rows
pub(crate) fn encode_form(fields: &OrderedMap) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Build the summary from a fully read response
pub(crate) fn summarize(
    status_code: u16,
    status_text: &str,
    headers: OrderedMap,
    body_raw: String,
    elapsed_ms: u64,
) -> ResponseSummary {
    let declares_json = headers
        .get("content-type")
        .map(|value| value.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let body_parsed = if declares_json {
        serde_json::from_str(&body_raw).ok()
    } else {
        None
    };

    ResponseSummary {
        status_code,
        status_text: status_text.to_string(),
        headers,
        is_json: body_parsed.is_some(),
        body_parsed,
        size_bytes: body_raw.len(),
        body_raw,
        elapsed_ms,
    }
}

/// Repeated header names are joined with ", " in arrival order
fn collect_headers(header_map: &HeaderMap) -> OrderedMap {
    let mut headers = OrderedMap::new();
    for (name, value) in header_map {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    headers
}

fn round_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}

/// URL for the log file: query, fragment and credentials dropped
///
/// API keys may travel in the query string.
pub fn loggable_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    // Only fails for URLs that cannot carry credentials anyway
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.to_string()
}

/// One reusable HTTP client; every `send` is a single attempt
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<ResponseSummary, TransportError> {
        let prepared = prepare(&descriptor);

        tracing::info!(
            method = %prepared.method,
            url = %loggable_url(&prepared.url),
            "sending request"
        );

        let mut request_builder = self
            .client
            .request(prepared.method.into(), prepared.url.clone());

        for (name, value) in &prepared.headers {
            request_builder = request_builder.header(name.as_str(), value.as_str());
        }

        request_builder = match prepared.body {
            PreparedBody::Empty => request_builder,
            PreparedBody::Text(text) => request_builder.body(text),
            PreparedBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                        form.text(name, value)
                    });
                request_builder.multipart(form)
            }
        };

        // Start timing the request
        let start = Instant::now();

        let response = request_builder.send().await?;
        let status = response.status();
        let headers = collect_headers(response.headers());
        let body_raw = response.text().await?;

        let elapsed_ms = round_millis(start.elapsed());

        Ok(summarize(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            headers,
            body_raw,
            elapsed_ms,
        ))
    }
}

/// Executes a composed request in the background and publishes the outcome
pub fn execute_request_background(
    state: Arc<RwLock<AppState>>,
    transport: Transport,
    descriptor: RequestDescriptor,
) {
    tokio::spawn(async move {
        let result = transport.send(descriptor).await;

        match &result {
            Ok(summary) => tracing::info!(
                status = summary.status_code,
                elapsed_ms = summary.elapsed_ms,
                size = summary.size_bytes,
                is_json = summary.is_json,
                "request completed"
            ),
            Err(e) => tracing::warn!(error = %e, "request failed"),
        }

        let mut s = state.write();
        apply_action(AppAction::CompleteRequest(result), &mut s);
    });
}
