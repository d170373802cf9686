use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    async fn list_movies(&self) -> DbResult<Vec<Movie>>;
    async fn carousel_movies(&self, limit: u32) -> DbResult<Vec<Movie>>;
    async fn get_movie(&self, id: i64) -> DbResult<Movie>;
    async fn actors_for_movie(&self, movie_id: i64) -> DbResult<Vec<ActorAppearance>>;
    async fn add_movie(&self, fields: &MovieFields) -> DbResult<u64>;
    async fn update_movie(&self, id: i64, fields: &MovieFields) -> DbResult<u64>;
}

#[async_trait]
pub trait ReviewRepo: Send + Sync {
    async fn reviews_for_movie(&self, movie_id: i64) -> DbResult<Vec<Review>>;
    async fn add_review(&self, review: &NewReview) -> DbResult<u64>;
    async fn delete_review(&self, id: i64) -> DbResult<u64>;
}

pub trait Repository: MovieRepo + ReviewRepo + Send + Sync {}
