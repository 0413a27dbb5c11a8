//! The reqwest implementation of [`RequestBuilder`].

use std::future::Future;
use std::time::Instant;

use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::auth::SessionCookie;
use crate::error::{ClientError, Result};
use crate::request::{HttpMethod, RequestBuilder};
use crate::response::RawResponse;

#[derive(Debug)]
enum Body {
    Json(Value),
    Form(Vec<(String, String)>),
}

/// A pending request against an [`super::HrmClient`].
///
/// The first builder error is kept and returned by `dispatch`.
#[derive(Debug)]
pub struct ApiRequest {
    http: reqwest::Client,
    url: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Body>,
    error: Option<ClientError>,
}

impl ApiRequest {
    pub(crate) fn new(http: reqwest::Client, url: String) -> Self {
        Self {
            http,
            url,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            error: None,
        }
    }

    fn fail(mut self, err: ClientError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }
}

impl RequestBuilder for ApiRequest {
    fn cookie(mut self, session: &SessionCookie) -> Self {
        match HeaderValue::from_str(&session.header_value()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.headers.insert(COOKIE, value);
                self
            }
            Err(_) => self.fail(ClientError::InvalidHeader(format!(
                "cookie '{}' has a value that cannot be sent",
                session.name()
            ))),
        }
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => return self.fail(ClientError::InvalidHeader(format!("{}: {}", name, e))),
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
                self
            }
            Err(e) => self.fail(ClientError::InvalidHeader(format!("{}: {}", name, e))),
        }
    }

    fn json_body(mut self, body: &Value) -> Self {
        self.body = Some(Body::Json(body.clone()));
        self
    }

    fn form_body(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = Some(Body::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        self
    }

    fn query(mut self, params: &[(&str, &str)]) -> Self {
        self.query
            .extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    fn dispatch(self, method: HttpMethod) -> impl Future<Output = Result<RawResponse>> + Send {
        async move {
            if let Some(err) = self.error {
                return Err(err);
            }

            let mut builder = self
                .http
                .request(method.into(), &self.url)
                .headers(self.headers);
            if !self.query.is_empty() {
                builder = builder.query(&self.query);
            }
            builder = match self.body {
                Some(Body::Json(value)) => builder.json(&value),
                Some(Body::Form(fields)) => builder.form(&fields),
                None => builder,
            };

            let started = Instant::now();
            let response = builder.send().await?;
            let raw = RawResponse::read(response).await?;

            debug!(
                method = %method,
                url = %self.url,
                status = raw.status_code(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "HRM request completed"
            );
            Ok(raw)
        }
    }
}
