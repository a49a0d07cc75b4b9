//! Reference backend for the message board API.
//!
//! Serves the health check and an in-memory message list. Messages live for
//! the lifetime of the process; ids are assigned as one past the largest id
//! currently stored.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub const SERVICE_NAME: &str = "board-server";
pub const SEED_TEXT: &str = "Hello from the server 👋";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub text: String,
}

/// Body of `POST /api/messages`. Anything that doesn't decode is treated as
/// an empty payload.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessage {
    #[serde(default)]
    pub text: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Message>>>;

/// Settings read from the environment at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Origin allowed by CORS. `None` allows any origin.
    pub frontend_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid FRONTEND_ORIGIN: {0}")]
    InvalidOrigin(String),
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Seeded store holding the welcome message.
pub fn seeded_db() -> Db {
    Arc::new(RwLock::new(vec![Message {
        id: 1,
        text: SEED_TEXT.to_string(),
    }]))
}

pub fn app() -> Router {
    router(seeded_db())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/messages",
            get(list_messages).post(create_message).options(preflight),
        )
        .with_state(db)
}

/// `app()` with CORS for the configured origin and request tracing.
pub fn app_with_config(config: &ServerConfig) -> Result<Router, ServerError> {
    let origin = match &config.frontend_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(app().layer(cors).layer(TraceLayer::new_for_http()))
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), ServerError> {
    let app = app_with_config(&config)?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

async fn list_messages(State(db): State<Db>) -> Json<Vec<Message>> {
    Json(db.read().await.clone())
}

async fn create_message(State(db): State<Db>, body: Bytes) -> Response {
    let input: CreateMessage = serde_json::from_slice(&body).unwrap_or_default();
    let text = input.text.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "text is required" })),
        )
            .into_response();
    }

    let mut messages = db.write().await;
    let message = Message {
        id: next_id(&messages),
        text: text.to_string(),
    };
    messages.push(message.clone());
    tracing::info!(id = message.id, "message created");

    (StatusCode::CREATED, Json(message)).into_response()
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn next_id(messages: &[Message]) -> i64 {
    messages.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64) -> Message {
        Message {
            id,
            text: format!("m{id}"),
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_follows_largest_not_last() {
        assert_eq!(next_id(&[message(5), message(2)]), 6);
    }

    #[test]
    fn create_message_tolerates_missing_text() {
        let input: CreateMessage = serde_json::from_str("{}").unwrap();
        assert!(input.text.is_none());
    }

    #[test]
    fn create_message_rejects_non_string_text() {
        let result: Result<CreateMessage, _> = serde_json::from_str(r#"{"text":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn message_serializes_to_backend_shape() {
        let json = serde_json::to_value(message(3)).unwrap();
        assert_eq!(json, json!({"id": 3, "text": "m3"}));
    }

    #[test]
    fn configured_origin_must_be_a_header_value() {
        let config = ServerConfig {
            frontend_origin: Some("https://board.example.com".to_string()),
        };
        assert!(app_with_config(&config).is_ok());

        let bad = ServerConfig {
            frontend_origin: Some("bad\norigin".to_string()),
        };
        assert!(matches!(
            app_with_config(&bad),
            Err(ServerError::InvalidOrigin(_))
        ));
    }
}
