use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use super::model::*;
use super::repo::*;
use crate::config::DatabaseConfig;

const MOVIE_COLUMNS: &str = "PeliculaID, Titulo, FechaEstreno, Presupuesto, \
     Recaudacion, Director, Categoria, Duracion, Sinopsis, Poster";

pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub async fn new(config: &DatabaseConfig) -> DbResult<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            "Connected to database {} at {}:{}",
            config.database, config.host, config.port
        );

        Ok(Self { pool })
    }
}

#[async_trait]
impl MovieRepo for MySqlRepository {
    async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM mostrarpeliculas",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn carousel_movies(&self, limit: u32) -> DbResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM mostrarpeliculas LIMIT ?",
            MOVIE_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn get_movie(&self, id: i64) -> DbResult<Movie> {
        sqlx::query_as::<_, Movie>(&format!(
            "SELECT {} FROM mostrarpeliculas WHERE PeliculaID = ?",
            MOVIE_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DbError::NotFound(format!("Movie not found: {}", id)),
            _ => DbError::Sqlx(e),
        })
    }

    async fn actors_for_movie(&self, movie_id: i64) -> DbResult<Vec<ActorAppearance>> {
        let actors = sqlx::query_as::<_, ActorAppearance>(
            "SELECT PeliculaID, ActorID, Nombre, Personaje \
             FROM mostraractoresporpelicula WHERE PeliculaID = ?",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(actors)
    }

    async fn add_movie(&self, fields: &MovieFields) -> DbResult<u64> {
        let result = sqlx::query("CALL AgregarPelicula(?, ?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(&fields.titulo)
            .bind(&fields.fecha_estreno)
            .bind(fields.presupuesto)
            .bind(fields.recaudacion)
            .bind(fields.director)
            .bind(fields.categoria)
            .bind(fields.duracion)
            .bind(&fields.sinopsis)
            .bind(&fields.poster)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_movie(&self, id: i64, fields: &MovieFields) -> DbResult<u64> {
        let result = sqlx::query("CALL ActualizarPelicula(?, ?, ?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(id)
            .bind(&fields.titulo)
            .bind(&fields.fecha_estreno)
            .bind(fields.presupuesto)
            .bind(fields.recaudacion)
            .bind(fields.director)
            .bind(fields.categoria)
            .bind(fields.duracion)
            .bind(&fields.sinopsis)
            .bind(&fields.poster)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ReviewRepo for MySqlRepository {
    async fn reviews_for_movie(&self, movie_id: i64) -> DbResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT CriticaID, PeliculaID, Autor, Puntuacion, Comentario, Fecha \
             FROM criticas WHERE PeliculaID = ?",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    async fn add_review(&self, review: &NewReview) -> DbResult<u64> {
        let result = sqlx::query("CALL AgregarCritica(?, ?, ?, ?, ?)")
            .bind(review.pelicula_id)
            .bind(&review.autor)
            .bind(review.puntuacion)
            .bind(&review.comentario)
            .bind(review.fecha)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_review(&self, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM criticas WHERE CriticaID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl Repository for MySqlRepository {}
