use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::db::Repository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn Repository>) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/Peliculas",
            get(crate::api::list_peliculas).post(crate::api::add_pelicula),
        )
        .route(
            "/Peliculas/:peliculaID",
            get(crate::api::get_pelicula).put(crate::api::update_pelicula),
        )
        .route(
            "/Peliculas/:peliculaID/Actores",
            get(crate::api::get_actores),
        )
        .route("/api/carrusel", get(crate::api::carrusel))
        .route("/Criticas/:peliculaID", get(crate::api::get_criticas))
        .route("/Criticas", post(crate::api::add_critica))
        .route("/criticas/:criticaID", delete(crate::api::delete_critica))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight for unmatched paths still answers 200; the CorsLayer
    // fills in the headers.
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
