//! Shipboard Observability
//!
//! Provides configurable observability features including:
//! - Tracing and distributed tracing via OpenTelemetry
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//!
//! Compiled in with the `observability` feature (default). At runtime it can be
//! switched off with `OBSERVABILITY_ENABLED=false`, in which case only console
//! logging is set up.
//!
//! # Examples
//!
//! ```no_run
//! use shipboard_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    MetricsHandle, init_metrics, metrics_app, metrics_middleware, track_clipboard_broadcast,
    track_login_failure, track_login_success, track_session_created, track_session_expired,
    track_user_registered,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle when metrics are compiled out.
    #[derive(Clone, Debug)]
    pub struct MetricsHandle;

    pub fn is_observability_enabled() -> bool {
        false
    }

    /// No-op logging middleware when feature disabled
    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        crate::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    pub fn metrics_app(_handle: MetricsHandle) -> Router {
        Router::new()
    }

    pub fn track_login_success() {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_session_created() {}
    pub fn track_session_expired(_reason: &str) {}
    pub fn track_user_registered() {}
    pub fn track_clipboard_broadcast() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
