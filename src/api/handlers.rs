use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use super::types::*;
use super::validate;
use crate::db::{ActorAppearance, Movie, Review};
use crate::server::AppState;

/// The carousel shows the first rows of the movie view, in view order.
const CARRUSEL_LIMIT: u32 = 5;

pub async fn list_peliculas(State(state): State<AppState>) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.db.list_movies().await?;
    Ok(Json(movies))
}

pub async fn get_pelicula(
    State(state): State<AppState>,
    Path(pelicula_id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let id = parse_id(&pelicula_id, "ID de película inválido")?;
    let movie = state.db.get_movie(id).await?;
    Ok(Json(movie))
}

pub async fn get_actores(
    State(state): State<AppState>,
    Path(pelicula_id): Path<String>,
) -> ApiResult<Json<Vec<ActorAppearance>>> {
    let id = parse_id(&pelicula_id, "ID de película inválido")?;
    let actors = state.db.actors_for_movie(id).await?;
    Ok(Json(actors))
}

pub async fn carrusel(State(state): State<AppState>) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.db.carousel_movies(CARRUSEL_LIMIT).await?;
    Ok(Json(movies))
}

pub async fn add_pelicula(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MutationResponse>> {
    let body = movie_body(body)?;
    // No field validation on insert: absent fields become NULL arguments.
    let fields = validate::movie_fields(&body);
    let rows = state.db.add_movie(&fields).await?;
    Ok(Json(MutationResponse::new(
        "Película agregada exitosamente",
        rows,
    )))
}

pub async fn update_pelicula(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MutationResponse>> {
    let id = parse_id(&id, "ID de película inválido")?;
    let body = movie_body(body)?;
    let fields = validate::validate_movie_update(&body).ok_or_else(|| {
        ApiError::BadRequest("Todos los campos son obligatorios y deben ser válidos.".to_string())
    })?;
    let rows = state.db.update_movie(id, &fields).await?;
    Ok(Json(MutationResponse::new(
        "Película actualizada exitosamente",
        rows,
    )))
}

pub async fn get_criticas(
    State(state): State<AppState>,
    Path(pelicula_id): Path<String>,
) -> ApiResult<Json<Vec<Review>>> {
    let id = parse_id(&pelicula_id, "ID de película inválido")?;
    let reviews = state.db.reviews_for_movie(id).await?;
    Ok(Json(reviews))
}

pub async fn add_critica(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let body: ReviewBody = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Cuerpo de la petición inválido".to_string()))?;
    let review = validate::validate_review(&body).map_err(ApiError::Validation)?;
    state.db.add_review(&review).await?;
    Ok(Json(MessageResponse::new("Crítica agregada exitosamente")))
}

pub async fn delete_critica(
    State(state): State<AppState>,
    Path(critica_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&critica_id, "ID de crítica inválido")?;
    let rows = state.db.delete_review(id).await?;
    if rows == 0 {
        return Err(ApiError::NotFound("Crítica no encontrada".to_string()));
    }
    Ok(Json(MessageResponse::new("Crítica eliminada exitosamente")))
}

/// Path ids must be integers; reject before touching the database.
fn parse_id(raw: &str, message: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}

fn movie_body(value: Value) -> ApiResult<MovieBody> {
    serde_json::from_value(value)
        .map_err(|_| ApiError::BadRequest("Cuerpo de la petición inválido".to_string()))
}
