use super::AppState;
use crate::error::{Result, TodozError};
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::store::TodoStore;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;

pub const READY_MESSAGE: &str = "To-Do API is running";

pub async fn index() -> Json<serde_json::Value> {
    Json(json!({ "message": READY_MESSAGE }))
}

pub async fn list_todos<S: TodoStore + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>> {
    let todos = state.with_api(|api| api.list_todos()).await?;
    Ok(Json(todos))
}

pub async fn create_todo<S: TodoStore + Send + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>)> {
    let new_todo: NewTodo = parse_body(&body)?;
    let todo = state.with_api(move |api| api.create_todo(new_todo)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo<S: TodoStore + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>> {
    let patch: TodoPatch = parse_body(&body)?;
    let todo = state
        .with_api(move |api| api.update_todo(&id, patch))
        .await?;
    Ok(Json(todo))
}

pub async fn delete_todo<S: TodoStore + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.with_api(move |api| api.delete_todo(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Decode a JSON body. An empty body reads as `{}` so that a bare POST reports
/// the missing title instead of a decode failure.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| TodozError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_reads_as_default() {
        let parsed: NewTodo = parse_body(&Bytes::from_static(b"  \n")).unwrap();
        assert!(parsed.title.is_none());
    }

    #[test]
    fn malformed_body_is_invalid() {
        let err = parse_body::<TodoPatch>(&Bytes::from_static(b"{\"title\":")).unwrap_err();
        assert!(matches!(err, TodozError::InvalidBody(_)));
    }

    #[test]
    fn wrong_field_type_is_invalid() {
        let err = parse_body::<TodoPatch>(&Bytes::from_static(b"{\"completed\":\"yes\"}"))
            .unwrap_err();
        assert!(matches!(err, TodozError::InvalidBody(_)));
    }
}
