//! reqwest-backed [`Transport`].
//!
//! Every request carries `_input_charset=utf-8`, the session's
//! `X-CSRF-TOKEN` header and, when present, its cookie. Responses are
//! unwrapped by status:
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 200 | decoded [`Envelope`] (a `success: false` envelope is left to the caller) |
//! | 403 | [`HttpError::Forbidden`] |
//! | other | [`HttpError::ApiError`] with the body's `exception` |

use acq_hal::{Envelope, HalResult, Params, Payload, Transport};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::{ConnectorConfig, DEFAULT_BASE_URL};
use crate::error::{HttpError, HttpResult};
use crate::session::Session;

/// Query parameter sent with every request.
pub const CHARSET_PARAM: (&str, &str) = ("_input_charset", "utf-8");

/// Header carrying the session's CSRF token.
pub const TOKEN_HEADER: &str = "X-CSRF-TOKEN";

/// HTTP transport bound to one session.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    session: Session,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport against the production endpoint.
    pub fn new(session: Session) -> HttpResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, session)
    }

    /// Create a transport targeting a custom base URL with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>, session: Session) -> HttpResult<Self> {
        let config = ConnectorConfig {
            base_url: base_url.into(),
            ..ConnectorConfig::default()
        };
        Self::build(&config, session)
    }

    /// Create a transport from loaded configuration.
    pub fn from_config(config: &ConnectorConfig) -> HttpResult<Self> {
        Self::build(config, config.session()?)
    }

    fn build(config: &ConnectorConfig, session: Session) -> HttpResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(HttpError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach charset, query parameters and session headers.
    fn prepare(&self, builder: RequestBuilder, params: &Params) -> RequestBuilder {
        let mut query = vec![CHARSET_PARAM];
        query.extend(params.iter());

        let builder = builder
            .query(&query)
            .header(TOKEN_HEADER, self.session.csrf_token());
        match self.session.cookie() {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> HttpResult<Envelope> {
        let status = response.status();
        let body = response.text().await?;
        unwrap_envelope(status, &body)
    }

    async fn send_post(&self, path: &str, payload: Payload) -> HttpResult<Envelope> {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut builder = self.prepare(self.client.post(&url), &payload.params);
        builder = match payload.body {
            Some(body) => builder.json(&body),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };

        let resp = builder.send().await?;
        self.handle_response(resp).await
    }

    async fn send_get(&self, path: &str, params: Params) -> HttpResult<Envelope> {
        let url = self.url(path);
        debug!("GET {}", url);

        let resp = self.prepare(self.client.get(&url), &params).send().await?;
        self.handle_response(resp).await
    }
}

/// Turn a status and raw body into an envelope or an error.
pub fn unwrap_envelope(status: StatusCode, body: &str) -> HttpResult<Envelope> {
    match status {
        StatusCode::OK => Ok(serde_json::from_str(body)?),
        StatusCode::FORBIDDEN => Err(HttpError::Forbidden),
        _ => {
            let message = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.get("exception").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| body.trim().to_string());
            Err(HttpError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, payload))]
    async fn post(&self, path: &str, payload: Payload) -> HalResult<Envelope> {
        Ok(self.send_post(path, payload).await?)
    }

    #[instrument(skip(self, params))]
    async fn get(&self, path: &str, params: Params) -> HalResult<Envelope> {
        Ok(self.send_get(path, params).await?)
    }
}
