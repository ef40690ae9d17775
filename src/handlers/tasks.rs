use axum::extract::{Query, State};
use axum::response::Redirect;
use tracing::{info, warn};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{CreateTask, TaskIndex};
use crate::AppState;

pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(req): Query<CreateTask>,
) -> Result<Redirect, AppError> {
    let task = state.store.create(&user, &req.nombre)?;
    info!(%user, name = %task.name, "Created task");
    Ok(flushed(&state))
}

pub async fn toggle(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(req): Query<TaskIndex>,
) -> Result<Redirect, AppError> {
    let index = req.parse().ok_or(AppError::InvalidId)?;
    let task = state.store.toggle(&user, index)?;
    info!(%user, index, done = task.done, "Toggled task");
    Ok(flushed(&state))
}

pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(req): Query<TaskIndex>,
) -> Result<Redirect, AppError> {
    let index = req.parse().ok_or(AppError::InvalidId)?;
    let task = state.store.delete(&user, index)?;
    info!(%user, index, name = %task.name, "Deleted task");
    Ok(flushed(&state))
}

pub async fn clear_completed(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Redirect {
    let removed = state.store.clear_completed(&user);
    info!(%user, removed, "Cleared completed tasks");
    flushed(&state)
}

/// Writes the store to disk and redirects back to the task page. A failed
/// write is logged and otherwise ignored; the change stays in memory.
fn flushed(state: &AppState) -> Redirect {
    if let Err(err) = state.store.save() {
        warn!(path = %state.store.path().display(), %err, "Failed to save tasks");
    }
    Redirect::to(&state.path("/tareas"))
}
