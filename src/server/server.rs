use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{log_requests, state::*, ApiError, RequestsLoggingLevel, ServerConfig};
use crate::catalog_store::{CatalogStore, NewFavorite, NewItem};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct FavoriteListParams {
    pub user_id: Option<i64>,
}

fn internal_error(err: anyhow::Error) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
    };
    Json(stats)
}

async fn get_item_list(State(store): State<GuardedCatalogStore>) -> Response {
    match store.get_item_list() {
        Ok(items) => Json(items).into_response(),
        Err(err) => internal_error(err),
    }
}

// A miss is a 200 with a null body, not a 404. Callers check for
// absence.
async fn get_item_by_id(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
) -> Response {
    match store.get_item_by_id(id) {
        Ok(item) => Json(item).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn add_item(
    State(store): State<GuardedCatalogStore>,
    Json(body): Json<NewItem>,
) -> Response {
    match store.add_new_item(body) {
        Ok(item) => Json(item).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_character_list(State(store): State<GuardedCatalogStore>) -> Response {
    match store.get_character_list() {
        Ok(characters) => Json(characters).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_character_by_id(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
) -> Response {
    match store.get_character_by_id(id) {
        Ok(character) => Json(character).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_planet_list(State(store): State<GuardedCatalogStore>) -> Response {
    match store.get_planet_list() {
        Ok(planets) => Json(planets).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_planet_by_id(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
) -> Response {
    match store.get_planet_by_id(id) {
        Ok(planet) => Json(planet).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_starship_list(State(store): State<GuardedCatalogStore>) -> Response {
    match store.get_starship_list() {
        Ok(starships) => Json(starships).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_starship_by_id(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
) -> Response {
    match store.get_starship_by_id(id) {
        Ok(starship) => Json(starship).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_user_list(State(store): State<GuardedCatalogStore>) -> Response {
    match store.get_user_list() {
        Ok(users) => Json(users).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_user_by_id(
    State(store): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
) -> Response {
    match store.get_user_by_id(id) {
        Ok(user) => Json(user).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn get_user_favorites(
    State(store): State<GuardedCatalogStore>,
    Query(params): Query<FavoriteListParams>,
) -> Response {
    let Some(user_id) = params.user_id else {
        return ApiError::bad_request("User ID not provided").into_response();
    };
    match store.get_user_favorites(user_id) {
        Ok(favorites) => Json(favorites).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn add_user_favorite(
    State(store): State<GuardedCatalogStore>,
    Json(body): Json<NewFavorite>,
) -> Response {
    match store.add_user_favorite(body) {
        Ok(favorite) => Json(json!({
            "message": "Favorite added",
            "updated_favorites": favorite,
        }))
        .into_response(),
        Err(err) => internal_error(err),
    }
}

impl ServerState {
    fn new(config: ServerConfig, catalog_store: Arc<dyn CatalogStore>) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog_store,
        }
    }
}

pub fn make_app(config: ServerConfig, catalog_store: Arc<dyn CatalogStore>) -> Router {
    let state = ServerState::new(config, catalog_store);

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/item", get(get_item_list))
        .route("/item", post(add_item))
        .route("/item/{id}", get(get_item_by_id))
        .route("/character", get(get_character_list))
        .route("/character/{id}", get(get_character_by_id))
        .route("/planet", get(get_planet_list))
        .route("/planet/{id}", get(get_planet_by_id))
        .route("/starship", get(get_starship_list))
        .route("/starship/{id}", get(get_starship_by_id))
        .route("/user", get(get_user_list))
        .route("/user/{id}", get(get_user_by_id))
        .route("/user/favorite", get(get_user_favorites))
        .route("/user/favorite", post(add_user_favorite))
        .with_state(state.clone());

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    catalog_store: Arc<dyn CatalogStore>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, catalog_store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
