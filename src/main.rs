use std::{net::Ipv4Addr, sync::Arc};

use tracing::info;

use tareas::{auth::PlainCookieIdentity, config::Config, create_app, store::TaskStore, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("valid configuration");

    let store = TaskStore::open(&config.data_file);
    info!(path = %config.data_file.display(), users = store.snapshot().len(), "Loaded tasks");

    let state = AppState {
        store: Arc::new(store),
        identity: Arc::new(PlainCookieIdentity),
        base_path: Arc::new(config.base_path),
    };
    let app = create_app(state);
    let addr = (Ipv4Addr::UNSPECIFIED, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind to port {}: {err}", config.port));

    info!("running on {addr:?}");

    axum::serve(listener, app).await.expect("failed serving");
}
