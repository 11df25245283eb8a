// src/routes/mod.rs
pub mod health;
pub mod translate;

use crate::state::SharedState;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use health::health_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use translate::translate_handler;

pub const PUBLIC_DIR: &str = "public";

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/translate", post(translate_handler))
        .route("/health", get(health_handler));

    Router::new()
        .route("/", get(index_handler))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<h1>PollyGlot Translator Backend</h1>
<p>Backend server is running.</p>
<p>API endpoints: <code>POST /api/translate</code>, <code>GET /api/health</code></p>
<hr>
<h3>API Test:</h3>
<p>POST to /api/translate with JSON:</p>
<pre>{"text": "Hello world", "targetLanguage": "French"}</pre>"#,
    )
}
