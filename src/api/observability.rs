//! Request tracing, Prometheus metrics and response hardening for both the
//! HTML site and the trivia API.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderName, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::api::AppState;

/// Which part of the app served a request. Used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Server-rendered Fyyur pages, form posts and record deletes.
    Site,
    /// The JSON question bank.
    Trivia,
    /// Health probes and the metrics scrape.
    Ops,
}

impl Surface {
    #[must_use]
    pub fn of(path: &str) -> Self {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        match first {
            "categories" | "questions" | "quizzes" => Self::Trivia,
            "health" | "metrics" => Self::Ops,
            _ => Self::Site,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Trivia => "trivia",
            Self::Ops => "ops",
        }
    }
}

/// `GET /metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match &state.prometheus_handle {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled").into_response(),
    }
}

/// Opens a span per request and records `http_requests_total` and
/// `http_request_duration_seconds`, labelled by surface and matched route.
pub async fn track_request(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let surface = Surface::of(req.uri().path());
    let method = req.method().clone();

    // Unmatched paths fall back to the 404 page; label them as one route.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "fallback".to_string(), |mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        surface = surface.as_str(),
        method = %method,
        route = %route,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let elapsed = started.elapsed();

        let labels = [
            ("surface", surface.as_str().to_string()),
            ("method", method.to_string()),
            ("route", route),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let redirect = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok());

        if status.is_server_error() {
            warn!(status = status.as_u16(), elapsed_ms, "Request failed");
        } else if surface == Surface::Ops {
            debug!(status = status.as_u16(), elapsed_ms, "Probe answered");
        } else if let Some(location) = redirect {
            info!(status = status.as_u16(), elapsed_ms, location, "Form handled");
        } else {
            info!(status = status.as_u16(), elapsed_ms, "Request finished");
        }

        response
    }
    .instrument(span)
    .await
}

/// Images are remote links submitted with venues and artists; scripts and
/// styles come from this origin only, apart from the inline page stylesheet.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; img-src 'self' https: data:; \
style-src 'self' 'unsafe-inline'; form-action 'self'; frame-ancestors 'none'; base-uri 'self'";

const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
    (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
];

pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_of_path() {
        assert_eq!(Surface::of("/"), Surface::Site);
        assert_eq!(Surface::of("/venues/3/edit"), Surface::Site);
        assert_eq!(Surface::of("/static/delete.js"), Surface::Site);
        assert_eq!(Surface::of("/questions/search"), Surface::Trivia);
        assert_eq!(Surface::of("/categories/4/questions"), Surface::Trivia);
        assert_eq!(Surface::of("/quizzes"), Surface::Trivia);
        assert_eq!(Surface::of("/health/ready"), Surface::Ops);
        assert_eq!(Surface::of("/metrics"), Surface::Ops);
    }

    #[test]
    fn test_lookalike_paths_stay_on_site() {
        assert_eq!(Surface::of("/questionsx"), Surface::Site);
        assert_eq!(Surface::of("/artists/search"), Surface::Site);
    }
}
