//! # Todo HTTP Service
//!
//! axum front end for [`TodoApi`]. The router, its state and the middleware live
//! here; handlers only translate between HTTP and the API facade.
//!
//! ## Serialized Mutations
//!
//! Every operation is a full read-modify-write of the backing store. The API sits
//! behind one mutex in [`AppState`], and each request runs its operation on tokio's
//! blocking pool while holding that lock, so two requests can never interleave their
//! load and save. Concurrent creates therefore always receive distinct ids.
//!
//! ## Routes
//!
//! ```text
//! GET    /            readiness message
//! GET    /todos       full collection
//! POST   /todos       create
//! PUT    /todos/{id}  partial update
//! DELETE /todos/{id}  delete
//! ```

use crate::api::TodoApi;
use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use crate::store::fs::FileStore;
use crate::store::TodoStore;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, put};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

pub mod cors;
pub mod handlers;
pub mod request_tracing;
pub mod response;

pub struct AppState<S: TodoStore> {
    api: Arc<Mutex<TodoApi<S>>>,
}

impl<S: TodoStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<S: TodoStore + Send + 'static> AppState<S> {
    pub fn new(api: TodoApi<S>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }

    /// Run `op` against the API on the blocking pool, holding the store lock for
    /// the whole call.
    pub async fn with_api<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut TodoApi<S>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || {
            let mut guard = api
                .lock()
                .map_err(|_| TodozError::Store("todo store lock poisoned".to_string()))?;
            op(&mut *guard)
        })
        .await
        .map_err(|e| TodozError::Store(format!("store task failed: {}", e)))?
    }
}

pub fn build_router<S: TodoStore + Send + 'static>(
    state: AppState<S>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            put(handlers::update_todo::<S>).delete(handlers::delete_todo::<S>),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(from_fn(cors::cors_middleware))
        .layer(from_fn(request_tracing::request_tracing_middleware))
}

/// Bind the configured address and serve until SIGINT/SIGTERM.
pub async fn serve(config: &TodozConfig) -> Result<()> {
    let store = FileStore::new(&config.data_file);
    let data_file = store.path().display().to_string();
    let state = AppState::new(TodoApi::new(store));
    let router = build_router(state, config.max_body_bytes);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(addr.as_str()).await?;
    info!(
        addr = %listener.local_addr()?,
        data_file = %data_file,
        "todo service listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("todo service stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown signal received");
}
