//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, MakeSpan, TraceLayer};
use tracing::{Span, info, info_span, warn};

type OnResponseFn = fn(&Response<Body>, Duration, &Span);
type OnFailureFn = fn(ServerErrorsFailureClass, Duration, &Span);

/// Tracing layer type installed on every service router.
pub type ServiceTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    ServiceSpan,
    DefaultOnRequest,
    OnResponseFn,
    DefaultOnBodyChunk,
    DefaultOnEos,
    OnFailureFn,
>;

/// Opens an `INFO` span tagged with the owning service, method and path.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSpan {
    service: &'static str,
}

impl<B> MakeSpan<B> for ServiceSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        info_span!(
            "request",
            service = self.service,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Creates the tracing middleware for one service.
///
/// Responses are logged at `INFO` with status and latency in milliseconds.
/// Server errors are additionally logged at `WARN`.
///
/// ```text
/// INFO request{service="url-shortener" method=GET path=/aB3xY9}: 302 in 2ms
/// WARN request{service="analytics-service" method=POST path=/track}: Request failed: Status code: 500 after 4ms
/// ```
pub fn layer(service: &'static str) -> ServiceTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(ServiceSpan { service })
        .on_response(log_response as OnResponseFn)
        .on_failure(log_failure as OnFailureFn)
}

fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    info!("{} in {}ms", response.status().as_u16(), latency.as_millis());
}

fn log_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    warn!("Request failed: {} after {}ms", class, latency.as_millis());
}
