use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::assets::STYLE_CSS;
use crate::middleware::{CurrentUser, MaybeUser};
use crate::render::{login_page, tasks_page};
use crate::AppState;

pub async fn index(MaybeUser(user): MaybeUser, State(state): State<AppState>) -> Response {
    if user.is_some() {
        return Redirect::to(&state.path("/tareas")).into_response();
    }
    Html(login_page(&state.base_path)).into_response()
}

pub async fn tasks(CurrentUser(user): CurrentUser, State(state): State<AppState>) -> Html<String> {
    let list = state.store.list(&user);
    Html(tasks_page(&user, &list, &state.base_path))
}

pub async fn stylesheet() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
        .into_response()
}
