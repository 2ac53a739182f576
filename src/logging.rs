use crate::config::Config;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{HeaderMap, Request, Response, header};
use axum::middleware::Next;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keep guards alive for the lifetime of the app.
pub struct LogGuards {
    _file_guard: WorkerGuard,
}

fn split_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let file = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("miam.log"))
        .to_string_lossy()
        .to_string();
    (dir, file)
}

pub fn init_logging(config: &Config) -> LogGuards {
    let filter = EnvFilter::new(config.log_filter());

    // Stdout layer (pretty enough, ANSI enabled)
    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .compact()
        // requires tracing-subscriber "chrono" feature
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()));

    // File layer (ANSI disabled)
    let (dir, file) = split_path(&config.log_file);
    let appender = tracing_appender::rolling::never(dir, file);
    let (nb, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_writer(nb);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    LogGuards { _file_guard: guard }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn preview(bytes: &[u8]) -> String {
    if bytes.len() > 16 * 1024 {
        format!(
            "{}… [truncated]",
            String::from_utf8_lossy(&bytes[..16 * 1024])
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

/// Logs JSON request & response bodies (dev-friendly), truncating previews.
/// Includes the request-id for correlation; non-JSON bodies pass through
/// untouched.
pub async fn log_payloads(req: Request<Body>, next: Next) -> Response<Body> {
    // Capture request-id (inserted by SetRequestIdLayer)
    let req_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let req = if is_json(req.headers()) {
        let (parts, body) = req.into_parts();
        match axum::body::to_bytes(body, 64 * 1024).await {
            Ok(bytes) => {
                tracing::info!(request_id = %req_id, request_body = %preview(&bytes), "request body");
                Request::from_parts(parts, Body::from(bytes))
            }
            Err(e) => {
                tracing::warn!(request_id = %req_id, error = %e, "failed reading request body");
                Request::from_parts(parts, Body::empty())
            }
        }
    } else {
        req
    };

    let res: Response<Body> = next.run(req).await;

    if is_json(res.headers()) {
        let (parts, body) = res.into_parts();
        match axum::body::to_bytes(body, 64 * 1024).await {
            Ok(bytes) => {
                tracing::info!(request_id = %req_id, response_body = %preview(&bytes), "response body");
                Response::from_parts(parts, Body::from(bytes))
            }
            Err(e) => {
                tracing::warn!(request_id = %req_id, error = %e, "failed reading response body");
                Response::from_parts(parts, Body::empty())
            }
        }
    } else {
        res
    }
}
