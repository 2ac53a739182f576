use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, Uri, header},
    response::IntoResponse,
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/"]
struct WebAssets;

/// Router fallback: serves the embedded client pages.
pub async fn serve(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = WebAssets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    // Extensionless paths get the landing page; missing assets stay 404
    if !path.contains('.')
        && let Some(content) = WebAssets::get("index.html")
    {
        return serve_asset("index.html", content.data.into_owned());
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn serve_asset(path: &str, content: Vec<u8>) -> Response<Body> {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&mime)
                .unwrap_or(HeaderValue::from_static("application/octet-stream")),
        )
        .body(Body::from(content))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
