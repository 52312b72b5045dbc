use std::fmt::Debug;

use anyhow::Context;
use axum::extract::State;
use axum::http::{header::WWW_AUTHENTICATE, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use serde::Serialize;
use serde_json::json;

use crate::authentication::{validate_admin_token, AuthError};
use crate::domain::Contact;
use crate::startup::AppState;

#[derive(Serialize)]
pub struct ContactsResponse {
    ok: bool,
    total: usize,
    contacts: Vec<Contact>,
}

/// Unauthenticated listing kept for internal ops tooling.
#[tracing::instrument(name = "Listing contacts", skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ContactsResponse>, ContactsError> {
    fetch_contacts(&state).await
}

#[tracing::instrument(name = "Listing contacts as admin", skip(state, authorization))]
pub async fn admin_contacts(
    State(state): State<AppState>,
    authorization: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<ContactsResponse>, ContactsError> {
    let token = authorization
        .as_ref()
        .map(|TypedHeader(authorization)| authorization.token());
    validate_admin_token(token, &state.admin_token)?;

    fetch_contacts(&state).await
}

async fn fetch_contacts(state: &AppState) -> Result<Json<ContactsResponse>, ContactsError> {
    let contacts = state
        .store
        .load_all()
        .await
        .context("Failed to load the contact list")?;

    Ok(Json(ContactsResponse {
        ok: true,
        total: contacts.len(),
        contacts,
    }))
}

#[derive(thiserror::Error)]
pub enum ContactsError {
    #[error("Authentication failed")]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ContactsError::AuthError(_) => {
                let mut headers = HeaderMap::new();
                headers.append(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));

                (
                    StatusCode::UNAUTHORIZED,
                    headers,
                    Json(json!({ "ok": false, "message": self.to_string() })),
                )
            }
            ContactsError::UnexpectedError(_) => {
                tracing::error!("{:?}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    HeaderMap::new(),
                    Json(json!({ "ok": false, "message": "Failed to read contacts." })),
                )
            }
        }
        .into_response()
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
