use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: folio_contact::Command,
}

pub fn router(app_state: AppState) -> Router {
    let server = app_state.config.server.clone();

    let mut router = Router::new()
        // Health check endpoint (liveness probe)
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .with_state(app_state);

    if let Some(dir) = server.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    if !server.allowed_origins.is_empty() {
        router = router.layer(cors_layer(&server.allowed_origins));
    }

    router
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    // AllowOrigin::list panics on "*"
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
