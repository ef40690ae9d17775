use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::AppState;

/// The logged-in user. Requests without a session are redirected to the login page.
pub struct CurrentUser(pub String);

/// The logged-in user, if any.
pub struct MaybeUser(pub Option<String>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match identify(parts, state) {
            Some(user) => Ok(CurrentUser(user)),
            None => Err(Redirect::to(&state.home())),
        }
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(identify(parts, state)))
    }
}

fn identify(parts: &Parts, state: &AppState) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    state.identity.current_user(&jar)
}
