//! Entity routes. Collection paths answer with and without the trailing slash.

use crate::handlers::catalog::{list_directors, list_genres, read_director, read_genre};
use crate::handlers::movie;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route("/movies/", get(movie::list).post(movie::create))
        .route(
            "/movies/:id",
            get(movie::read)
                .put(movie::replace)
                .patch(movie::patch)
                .delete(movie::delete),
        )
        .route("/directors", get(list_directors))
        .route("/directors/", get(list_directors))
        .route("/directors/:id", get(read_director))
        .route("/genres", get(list_genres))
        .route("/genres/", get(list_genres))
        .route("/genres/:id", get(read_genre))
        .with_state(state)
}
