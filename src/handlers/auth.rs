use axum::extract::{Form, State};
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::models::LoginForm;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Redirect) {
    if form.usuario.is_empty() {
        return (jar, Redirect::to(&state.home()));
    }

    info!(user = %form.usuario, "User logged in");
    let jar = state.identity.sign_in(jar, &form.usuario);
    (jar, Redirect::to(&state.path("/tareas")))
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(user) = state.identity.current_user(&jar) {
        info!(%user, "User logged out");
    }
    let jar = state.identity.sign_out(jar);
    (jar, Redirect::to(&state.home()))
}
