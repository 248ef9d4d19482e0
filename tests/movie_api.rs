//! HTTP-level tests for the movie endpoints.
//!
//! Requests go straight to the router through `tower::ServiceExt`, each test on
//! its own in-memory database.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, create_movie, delete, get, insert_director, insert_genre,
    patch_json, post_json, put_json, test_pool,
};
use serde_json::json;

fn heat() -> serde_json::Value {
    json!({
        "title": "Heat",
        "description": "A group of professional bank robbers...",
        "trailer": "https://www.youtube.com/watch?v=0xbBLJ1WGwQ",
        "year": 1995,
        "rating": 8.3,
        "genre_id": 1,
        "director_id": 2
    })
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_empty_body_and_location() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool), "/movies/", heat()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/movies/1");
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn created_movie_reads_back_unchanged() {
    let pool = test_pool().await;
    insert_genre(&pool, 1, "Crime").await;
    insert_director(&pool, 2, "Michael Mann").await;
    let id = create_movie(&pool, heat()).await;

    let response = get(build_test_app(pool), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    for key in ["title", "description", "trailer", "year", "rating", "genre_id", "director_id"] {
        assert_eq!(json[key], heat()[key], "field {key}");
    }
    assert_eq!(json["genre"], json!({"id": 1, "name": "Crime"}));
    assert_eq!(json["director"], json!({"id": 2, "name": "Michael Mann"}));
}

#[tokio::test]
async fn dangling_references_are_stored_and_not_embedded() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;

    let json = body_json(get(build_test_app(pool), &format!("/movies/{id}")).await).await;
    assert_eq!(json["genre_id"], 1);
    assert_eq!(json["director_id"], 2);
    assert!(json.get("genre").is_none());
    assert!(json.get("director").is_none());
}

#[tokio::test]
async fn create_without_trailing_slash() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool), "/movies", json!({"title": "Ronin"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn get_missing_movie_is_404() {
    let pool = test_pool().await;
    let response = get(build_test_app(pool), "/movies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "movie 999 not found");
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let pool = test_pool().await;
    let response = get(build_test_app(pool), "/movies/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "bad_request");
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_field_type_is_400() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool.clone()), "/movies/", json!({"year": "nineteen"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get(build_test_app(pool), "/movies/").await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn unknown_field_is_400() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool), "/movies/", json!({"title": "X", "director": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_object_body_is_400() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool), "/movies/", json!(["Heat"])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["message"], "bad request: body must be a JSON object");
}

#[tokio::test]
async fn overlong_title_is_422() {
    let pool = test_pool().await;
    let response = post_json(build_test_app(pool), "/movies/", json!({"title": "x".repeat(256)})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"]["code"], "validation_error");
}

// ---------------------------------------------------------------------------
// List and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_list_is_200_with_empty_array() {
    let pool = test_pool().await;
    let response = get(build_test_app(pool), "/movies/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn combined_filter_requires_both_conditions() {
    let pool = test_pool().await;
    let a = create_movie(&pool, json!({"title": "A", "genre_id": 1, "director_id": 2})).await;
    create_movie(&pool, json!({"title": "B", "genre_id": 1, "director_id": 3})).await;
    create_movie(&pool, json!({"title": "C", "genre_id": 4, "director_id": 2})).await;

    let response = get(build_test_app(pool), "/movies/?genre_id=1&director_id=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], a);
    assert_eq!(arr[0]["title"], "A");
}

#[tokio::test]
async fn single_filters_and_ordering() {
    let pool = test_pool().await;
    create_movie(&pool, json!({"title": "A", "genre_id": 1, "director_id": 2})).await;
    create_movie(&pool, json!({"title": "B", "genre_id": 1, "director_id": 3})).await;
    create_movie(&pool, json!({"title": "C", "genre_id": 4, "director_id": 2})).await;

    let by_genre = body_json(get(build_test_app(pool.clone()), "/movies/?genre_id=1").await).await;
    let titles: Vec<_> = by_genre.as_array().unwrap().iter().map(|m| m["title"].clone()).collect();
    assert_eq!(titles, vec![json!("A"), json!("B")]);

    let by_director = body_json(get(build_test_app(pool.clone()), "/movies?director_id=2").await).await;
    let titles: Vec<_> = by_director.as_array().unwrap().iter().map(|m| m["title"].clone()).collect();
    assert_eq!(titles, vec![json!("A"), json!("C")]);

    let all = body_json(get(build_test_app(pool), "/movies/").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn filter_without_matches_is_empty_array() {
    let pool = test_pool().await;
    create_movie(&pool, json!({"title": "A", "genre_id": 1})).await;
    let response = get(build_test_app(pool), "/movies/?genre_id=9").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn non_integer_filter_is_400() {
    let pool = test_pool().await;
    let response = get(build_test_app(pool), "/movies/?genre_id=drama").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Replace / patch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_overwrites_and_nulls_omitted_fields() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/movies/{id}"),
        json!({"title": "Heat (1995)", "year": 1995}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let json = body_json(get(build_test_app(pool), &format!("/movies/{id}")).await).await;
    assert_eq!(json["title"], "Heat (1995)");
    assert_eq!(json["year"], 1995);
    for key in ["description", "trailer", "rating", "genre_id", "director_id"] {
        assert!(json[key].is_null(), "field {key} should be null");
    }
}

#[tokio::test]
async fn put_missing_movie_is_404() {
    let pool = test_pool().await;
    let response = put_json(build_test_app(pool), "/movies/5", heat()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_changes_only_supplied_fields() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/movies/{id}"),
        json!({"rating": 9.0, "director_id": 7}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(build_test_app(pool), &format!("/movies/{id}")).await).await;
    assert_eq!(json["rating"], 9.0);
    assert_eq!(json["director_id"], 7);
    assert_eq!(json["genre_id"], 1);
    assert_eq!(json["title"], "Heat");
    assert_eq!(json["year"], 1995);
    assert_eq!(json["trailer"], heat()["trailer"]);
}

#[tokio::test]
async fn patch_with_null_clears_field() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;

    let response = patch_json(build_test_app(pool.clone()), &format!("/movies/{id}"), json!({"genre_id": null})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(build_test_app(pool), &format!("/movies/{id}")).await).await;
    assert!(json["genre_id"].is_null());
    assert_eq!(json["director_id"], 2);
}

#[tokio::test]
async fn empty_patch_on_existing_movie_is_204() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;
    let response = patch_json(build_test_app(pool), &format!("/movies/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn patch_missing_movie_is_404() {
    let pool = test_pool().await;
    let response = patch_json(build_test_app(pool.clone()), "/movies/3", json!({"title": "Nope"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json(build_test_app(pool), "/movies/3", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_wrong_type_changes_nothing() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;
    let response = patch_json(build_test_app(pool.clone()), &format!("/movies/{id}"), json!({"year": 2000.5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(build_test_app(pool), &format!("/movies/{id}")).await).await;
    assert_eq!(json["year"], 1995);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_204_then_404() {
    let pool = test_pool().await;
    let id = create_movie(&pool, heat()).await;

    let response = delete(build_test_app(pool.clone()), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let pool = test_pool().await;
    let first = create_movie(&pool, json!({"title": "One"})).await;
    delete(build_test_app(pool.clone()), &format!("/movies/{first}")).await;
    let second = create_movie(&pool, json!({"title": "Two"})).await;
    assert!(second > first);
}
