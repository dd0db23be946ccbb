// src/response/mod.rs
pub mod report;

use crate::health::AggregateResult;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub use report::{ReportTemplate, TemplateError};

/// How much detail an endpoint puts in its response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Status code only.
    #[default]
    NoBody,
    /// The status code's reason phrase, e.g. `Service Unavailable`.
    StatusText,
    /// An HTML table with one row per check.
    DetailedReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    Html,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::PlainText => "text/plain; charset=utf-8",
            ContentType::Html => "text/html; charset=utf-8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status: StatusCode,
    pub body: String,
    pub content_type: ContentType,
}

impl RenderedResponse {
    pub fn plain(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: ContentType::PlainText,
        }
    }
}

impl From<RenderedResponse> for Response<Body> {
    fn from(rendered: RenderedResponse) -> Self {
        let mut response = Response::new(Body::from(rendered.body));
        *response.status_mut() = rendered.status;
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static(rendered.content_type.as_str()),
        );
        response
    }
}

/// Maps the outcomes of one evaluation to a response.
///
/// The status is `200 OK` when every check passed and `503 Service
/// Unavailable` otherwise, whatever the mode. The only failure is a
/// malformed report template, raised by the first `DetailedReport` render.
pub fn render(mode: ResponseMode, result: &AggregateResult) -> Result<RenderedResponse, TemplateError> {
    let status = if result.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let rendered = match mode {
        ResponseMode::NoBody => RenderedResponse::plain(status, String::new()),
        ResponseMode::StatusText => {
            RenderedResponse::plain(status, status.canonical_reason().unwrap_or_default())
        }
        ResponseMode::DetailedReport => RenderedResponse {
            status,
            body: report::template()?.render(result),
            content_type: ContentType::Html,
        },
    };
    Ok(rendered)
}
