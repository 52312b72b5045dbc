use std::sync::Arc;

use axum::{
    extract::MatchedPath,
    http::Request,
    routing::{get, post},
    Router,
};
use secrecy::Secret;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::configuration::{Settings, INSECURE_DEFAULT_ADMIN_TOKEN};
use crate::routes::{admin_contacts, check_health, list_contacts, subscribe};
use crate::storage::{ContactStore, FileStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub admin_token: Secret<String>,
    /// Serializes every load-modify-save of the contact list so two
    /// concurrent signups cannot overwrite each other's append.
    pub store_lock: Arc<Mutex<()>>,
}

pub fn get_app_state(configuration: &Settings) -> AppState {
    let admin_token = match &configuration.admin.token {
        Some(token) => token.clone(),
        None => {
            tracing::warn!("Admin token is not configured, falling back to an insecure default");
            Secret::new(INSECURE_DEFAULT_ADMIN_TOKEN.to_string())
        }
    };

    AppState {
        store: Arc::new(FileStore::new(configuration.storage.contacts_path.clone())),
        admin_token,
        store_lock: Arc::new(Mutex::new(())),
    }
}

pub async fn run(listener: TcpListener, state: AppState) {
    let app = router(state);

    axum::serve(listener, app)
        .await
        .expect("Failed to start up the application")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(check_health))
        .route("/api/subscribe", post(subscribe))
        .route("/api/contacts", get(list_contacts))
        .route("/api/admin/contacts", get(admin_contacts))
        .with_state(state)
        .layer(
            // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::info_span!(
                    "Starting HTTP request",
                    method = ?request.method(),
                    path,
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
        // a panicking handler answers 500 instead of dropping the connection
        .layer(CatchPanicLayer::new())
}
