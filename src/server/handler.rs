// src/server/handler.rs
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Body, Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use tower::Service;
use tracing::Instrument;

use super::router::Router;
use crate::response::RenderedResponse;

#[derive(Clone)]
pub struct RequestHandler {
    router: Arc<Router>,
}

impl RequestHandler {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    pub async fn handle(&self, req: Request<Body>) -> Response<Body> {
        let Some(endpoint) = self.router.resolve(req.uri().path()) else {
            return plain(StatusCode::NOT_FOUND);
        };

        let method = req.method();
        if method != Method::GET && method != Method::HEAD {
            let mut response = plain(StatusCode::METHOD_NOT_ALLOWED);
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
            return response;
        }

        match endpoint.evaluate().await {
            Ok(mut rendered) => {
                if method == Method::HEAD {
                    rendered.body.clear();
                }
                rendered.into()
            }
            Err(e) => {
                tracing::error!(endpoint = endpoint.name(), %e, "failed to render health response");
                plain(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

fn plain(status: StatusCode) -> Response<Body> {
    RenderedResponse::plain(status, status.canonical_reason().unwrap_or_default()).into()
}

impl Service<Request<Body>> for RequestHandler {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = futures::future::BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let handler = self.clone();
        let span = tracing::info_span!(
            "health_request",
            request_id = %uuid::Uuid::new_v4(),
            method = %req.method(),
            path = %req.uri().path(),
        );
        Box::pin(
            async move {
                let response = handler.handle(req).await;
                tracing::debug!(status = %response.status(), "health request served");
                Ok(response)
            }
            .instrument(span),
        )
    }
}
