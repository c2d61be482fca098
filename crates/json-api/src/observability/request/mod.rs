//! Request logging middleware.

mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Depot, FlowCtrl, Request, Response, handler,
    http::{StatusCode, header::HeaderName},
};
use tracing::{Instrument as _, Span, error, field::Empty, info, info_span, warn};

use super::{metrics, settings};

use request_ids::REQUEST_ID_HEADER;

/// Depot key holding the request id for downstream handlers.
const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// What gets logged once a request completes.
#[derive(Debug)]
struct RequestLog {
    request_id: String,
    method: String,
    path: String,
    route: String,
}

impl RequestLog {
    fn span(&self, remote_addr: &str) -> Span {
        info_span!(
            parent: None,
            "http.request",
            otel.name = %spans::span_name(&self.method, &self.route),
            otel.kind = "server",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote_addr,
            status = Empty,
            duration_ms = Empty
        )
    }

    fn finish(&self, span: &Span, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();
        let threshold_ms = u128::from(settings::slow_request_threshold_ms());

        metrics::observe_request(
            &self.method,
            &self.route,
            status.as_u16(),
            elapsed.as_secs_f64(),
        );

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        let _entered = span.enter();

        if status.is_server_error() {
            error!(status = status.as_u16(), duration_ms, "request failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request rejected");
        } else {
            info!(status = status.as_u16(), duration_ms, "request completed");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, route = %self.route, "slow request");
        }
    }
}

/// Tags each request with an id, runs it inside an `http.request` span and
/// records its outcome in the logs and metrics. `/metrics` scrapes pass
/// through untouched.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id = request_ids::resolve(
        req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    );

    let path = req.uri().path().to_owned();

    let log = RequestLog {
        method: req.method().to_string(),
        route: spans::route_template(&path),
        path,
        request_id,
    };

    depot.insert(REQUEST_ID_DEPOT_KEY, log.request_id.clone());

    if let Err(source) = res.add_header(
        HeaderName::from_static(REQUEST_ID_HEADER),
        log.request_id.as_str(),
        true,
    ) {
        warn!(request_id = %log.request_id, "failed to set request id header: {source}");
    }

    let span = log.span(&req.remote_addr().to_string());
    let _in_flight = metrics::InFlightRequestGuard::track();

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    log.finish(
        &span,
        res.status_code.unwrap_or(StatusCode::OK),
        started.elapsed(),
    );
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
        writing::Text,
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo_request_id(depot: &mut Depot, res: &mut Response) {
        let request_id = depot
            .get::<String>(REQUEST_ID_DEPOT_KEY)
            .cloned()
            .unwrap_or_default();

        res.render(Text::Plain(request_id));
    }

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("products").get(echo_request_id)),
        )
    }

    fn response_request_id(res: &Response) -> Option<String> {
        res.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() -> TestResult {
        let mut res = TestClient::get("http://example.com/products")
            .add_header(REQUEST_ID_HEADER, "req-123", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response_request_id(&res).as_deref(), Some("req-123"));
        assert_eq!(res.take_string().await?, "req-123");

        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_generated_when_absent() -> TestResult {
        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service())
            .await;

        let header = response_request_id(&res);
        let body = res.take_string().await?;

        assert!(
            header.as_deref().is_some_and(|id| !id.is_empty()),
            "expected generated request id header"
        );
        assert_eq!(header.as_deref(), Some(body.as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn metrics_scrapes_are_not_tagged() {
        let service = Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("metrics").get(echo_request_id)),
        );

        let res = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await;

        assert_eq!(response_request_id(&res), None);
    }
}
