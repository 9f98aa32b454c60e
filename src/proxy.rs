//! Same-origin pass-through to the camera-monitoring backend.
//!
//! The browser client calls `/backend/...` on the dashboard's own origin and
//! this router forwards the request to the configured backend, so the
//! backend does not need CORS for the dashboard.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use url::Url;

pub const PROXY_PREFIX: &str = "/backend/";

/// Face photo uploads can be large.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

const RELAYED_RESPONSE_HEADERS: [HeaderName; 2] =
    [header::CONTENT_TYPE, header::CONTENT_DISPOSITION];

#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    backend: Url,
}

impl ProxyState {
    pub fn new(backend_url: &str) -> Result<Self, url::ParseError> {
        let mut backend = Url::parse(backend_url)?;
        if !backend.path().ends_with('/') {
            let path = format!("{}/", backend.path());
            backend.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            backend,
        })
    }

    pub fn backend(&self) -> &Url {
        &self.backend
    }

    /// Resolve a proxied path under the backend base. Each segment is
    /// decoded and pushed back, so the result can never leave the backend's
    /// origin or climb above its base path.
    fn target(&self, path: &str, query: Option<&str>) -> Result<Url, ProxyError> {
        let bad = || ProxyError::BadTarget(format!("invalid backend path: {path}"));

        let raw: Vec<&str> = path.split('/').collect();
        let last = raw.len() - 1;
        let mut segments = Vec::with_capacity(raw.len());
        for (i, segment) in raw.into_iter().enumerate() {
            let decoded = urlencoding::decode(segment).map_err(|_| bad())?.into_owned();
            match decoded.as_str() {
                // Only a trailing slash may leave an empty segment
                "" if i != last => return Err(bad()),
                "." | ".." => return Err(bad()),
                _ => segments.push(decoded),
            }
        }

        let mut url = self.backend.clone();
        url.path_segments_mut()
            .map_err(|_| bad())?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);

        if url.origin() != self.backend.origin() || !url.path().starts_with(self.backend.path()) {
            return Err(bad());
        }
        Ok(url)
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/backend/{*path}", any(forward))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug)]
enum ProxyError {
    BodyRead(String),
    BadTarget(String),
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::BodyRead(msg) => (StatusCode::BAD_REQUEST, msg),
            ProxyError::BadTarget(msg) => (StatusCode::BAD_REQUEST, msg),
            ProxyError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        tracing::warn!("Proxy error: {} - {}", status, message);

        (status, Json(serde_json::json!({ "detail": message }))).into_response()
    }
}

async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let headers = req.headers().clone();

    // Raw path, so percent-escapes in ids and stream names survive the hop.
    let path = uri
        .path()
        .strip_prefix(PROXY_PREFIX)
        .unwrap_or_default()
        .to_string();
    let target = state.target(&path, uri.query())?;

    tracing::debug!("Proxying {} {} -> {}", method, uri, target);

    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::BodyRead(e.to_string()))?;

    let mut forward_req = state.client.request(method, target).body(body);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(&name) {
            forward_req = forward_req.header(name, value.clone());
        }
    }

    let response = forward_req
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(format!("backend unreachable: {e}")))?;

    let status = response.status();
    let response_headers = response.headers().clone();
    let response_body = response
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let mut relayed = Response::new(Body::from(response_body));
    *relayed.status_mut() = status;
    for name in RELAYED_RESPONSE_HEADERS {
        if let Some(value) = response_headers.get(&name) {
            relayed.headers_mut().insert(name, value.clone());
        }
    }
    Ok(relayed)
}
