//! # tb-api
//!
//! HTTP surface of the Taskboard task service.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `GET` | `/tasks` | list (filters: `status`, `priority`, `category`, `assignee`, `creator`, `search`, `limit`) |
//! | `POST` | `/tasks` | create |
//! | `GET` | `/tasks/:id` | get |
//! | `PATCH` | `/tasks/:id/accept` | accept as the caller |
//! | `PATCH` | `/tasks/:id/complete` | complete as the caller |
//! | `PUT` | `/tasks/:id` | status override |
//! | `DELETE` | `/tasks/:id` | delete |
//! | `GET` | `/tasks/stats` | counts per status |
//! | `GET` | `/transactions` | transaction history |
//! | `GET` | `/health` | liveness |
//!
//! The caller's wallet address travels in the `X-User-Address` header.

pub mod caller;
pub mod error;
pub mod handlers;
pub mod requests;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch};
use tb_config::{ConfigError, ServerConfig, TaskboardConfig};
use tb_db::TaskService;
use tb_db::error::DatabaseError;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TaskService>,
}

/// Failures while starting or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router.
#[must_use]
pub fn router(service: Arc<TaskService>, server: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/stats", get(handlers::task_stats))
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_status)
                .delete(handlers::delete_task),
        )
        .route("/tasks/:id/accept", patch(handlers::accept_task))
        .route("/tasks/:id/complete", patch(handlers::complete_task))
        .route("/transactions", get(handlers::transaction_history))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service });

    if server.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Serve `app` on an already-bound listener until the future is dropped.
///
/// # Errors
///
/// Returns `ServeError::Io` if the server fails.
pub async fn serve_on(listener: TcpListener, app: Router) -> Result<(), ServeError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "taskboard API listening");
    }
    axum::serve(listener, app).await?;
    Ok(())
}

/// Open the store named in `config`, bind `server.bind` and serve.
///
/// # Errors
///
/// Returns `ServeError` if the bind address is invalid, the database cannot
/// be opened, the port cannot be bound, or the server fails.
pub async fn serve(config: &TaskboardConfig) -> Result<(), ServeError> {
    let addr = config.server.socket_addr()?;
    let service = Arc::new(TaskService::open(config).await?);
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, router(service, &config.server)).await
}
