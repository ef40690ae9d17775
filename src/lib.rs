pub mod assets;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod persist;
pub mod render;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use auth::SessionIdentity;
use store::TaskStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub identity: Arc<dyn SessionIdentity>,
    pub base_path: Arc<String>,
}

impl AppState {
    /// `path` prefixed with the configured base path, for redirects and links.
    pub fn path(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    /// The login page. A nested router serves it at the bare base path.
    pub fn home(&self) -> String {
        if self.base_path.is_empty() {
            "/".to_string()
        } else {
            self.base_path.to_string()
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let base_path = state.base_path.clone();

    let app_routes = Router::new()
        .route("/", get(handlers::web::index))
        .route("/entrar", post(handlers::auth::login))
        .route("/salir", get(handlers::auth::logout))
        .route("/tareas", get(handlers::web::tasks))
        .route("/crear", get(handlers::tasks::create))
        .route("/completar", get(handlers::tasks::toggle))
        .route("/borrar", get(handlers::tasks::delete))
        .route("/limpiar", get(handlers::tasks::clear_completed))
        .route("/static/style.css", get(handlers::web::stylesheet))
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::compression::CompressionLayer::new()),
        )
        .with_state(state);

    tracing::info!("base_path: {base_path:?}");

    if base_path.is_empty() {
        app_routes
    } else {
        Router::new().nest(&*base_path, app_routes)
    }
}
