use std::path::Path;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, State, rejection::JsonRejection},
    routing::{get, post},
};
use common::games::letter_catch::{GameConfig, MoveResult, Session};
use common::{GameError, PlayerId, SessionId, log, log_error};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::api_error::ApiError;
use crate::server_config::ServerConfig;
use crate::session_service::SessionService;
use crate::session_store::SessionStore;
use crate::stats::{DebugSnapshot, PlayerStats};

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub player_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub letter_clicked: Option<String>,
    pub letter_color: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, GameError> {
    value.ok_or_else(|| GameError::InvalidInput(format!("{} is required", field)))
}

pub fn build_router<S: SessionStore>(service: SessionService<S>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut api = Router::new()
        .route("/api/game/session", post(create_session::<S>))
        .route("/api/game/session/{session_id}", get(get_session::<S>))
        .route("/api/game/session/{session_id}/config", get(get_session_config::<S>))
        .route("/api/game/session/{session_id}/move", post(make_move::<S>))
        .route("/api/game/config", get(default_config::<S>))
        .route("/api/game/stats/{player_id}", get(player_stats::<S>));

    if config.enable_debug_endpoint {
        api = api.route("/api/game/debug", get(debug_snapshot::<S>));
    }

    let mut app = api.with_state(service);
    if let Some(path) = &config.static_files_path {
        app = app.nest_service("/ui", ServeDir::new(path));
    }
    app.layer(cors)
}

pub async fn run_web_server(
    app: Router,
    bind_address: &str,
    static_files_path: Option<&Path>,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Web server listening on {}", listener.local_addr()?);
    if let Some(path) = static_files_path {
        log!("Serving static files from {} at /ui", path.display());
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received"),
        Err(e) => {
            log_error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn create_session<S: SessionStore>(
    State(service): State<SessionService<S>>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<Json<Session>, ApiError> {
    let Json(request) = body?;
    let player_id = required(request.player_id, "player_id")?;
    Ok(Json(service.create_session(PlayerId::new(player_id))?))
}

async fn get_session<S: SessionStore>(
    State(service): State<SessionService<S>>,
    UrlPath(session_id): UrlPath<String>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(service.get_session(&SessionId::new(session_id))?))
}

async fn get_session_config<S: SessionStore>(
    State(service): State<SessionService<S>>,
    UrlPath(session_id): UrlPath<String>,
) -> Result<Json<GameConfig>, ApiError> {
    Ok(Json(service.get_session_config(&SessionId::new(session_id))?))
}

async fn make_move<S: SessionStore>(
    State(service): State<SessionService<S>>,
    UrlPath(session_id): UrlPath<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResult>, ApiError> {
    let Json(request) = body?;
    let letter = required(request.letter_clicked, "letter_clicked")?;
    let color = required(request.letter_color, "letter_color")?;
    let result = service.apply_move(&SessionId::new(session_id), &letter, &color)?;
    Ok(Json(result))
}

async fn default_config<S: SessionStore>(
    State(service): State<SessionService<S>>,
) -> Json<GameConfig> {
    Json(service.default_config())
}

async fn player_stats<S: SessionStore>(
    State(service): State<SessionService<S>>,
    UrlPath(player_id): UrlPath<String>,
) -> Json<PlayerStats> {
    Json(service.player_stats(PlayerId::new(player_id)))
}

async fn debug_snapshot<S: SessionStore>(
    State(service): State<SessionService<S>>,
) -> Json<DebugSnapshot> {
    Json(service.debug_snapshot())
}
