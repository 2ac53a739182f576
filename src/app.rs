use crate::{
    config::Config,
    logging::log_payloads,
    models::AppState,
    routes::{generate, recipes},
    web,
};

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderValue, Request, Response};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{Json, Router};

use serde_json::json;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{Span, info_span};

async fn healthz() -> Json<&'static str> {
    Json("ok")
}

async fn version() -> Json<serde_json::Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if let Some(origin) = config.cors_origin.as_deref() {
        if let Ok(value) = origin.parse::<HeaderValue>() {
            return cors.allow_origin(value);
        }
        tracing::warn!(origin, "invalid CORS origin, allowing all");
    }
    cors.allow_origin(Any)
}

pub fn build_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let method = req.method().to_string();
            let uri = req.uri().to_string();
            let client_ip = req
                .extensions()
                .get::<ConnectInfo<std::net::SocketAddr>>()
                .map(|ci| ci.0.to_string())
                .unwrap_or_else(|| "-".into());
            let rid = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");

            info_span!("http", method=%method, uri=%uri, client_ip=%client_ip, request_id=%rid)
        })
        .on_request(|_req: &Request<Body>, _span: &Span| {
            tracing::info!("request started");
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
            tracing::info!(status=%res.status(), latency_ms=%latency.as_millis(), "response completed");
        })
        .on_failure(
            |_class: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(latency_ms=%latency.as_millis(), "request failed");
            },
        );

    let request_id_layer = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id());

    let cors = cors_layer(&state.config);

    // Request-ID layer is added last, i.e. runs first, so the trace span
    // and payload logs see the x-request-id header.
    Router::new()
        .route("/healthz", get(healthz))
        .route("/version", get(version))
        .route("/generateRecipe", post(generate::recipe))
        .route("/generateImage", post(generate::image))
        .route("/recipes", get(recipes::search))
        .route("/recipes/{id}", get(recipes::get))
        .fallback(web::serve)
        .with_state(state)
        .layer(from_fn(log_payloads))
        .layer(cors)
        .layer(trace)
        .layer(request_id_layer)
}
