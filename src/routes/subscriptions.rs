use std::fmt::Debug;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Contact, ContactEmail, ContactName, NewContact};
use crate::startup::AppState;

/// All fields are optional at the serde level so that missing keys reach
/// our own presence checks and come back as 400 instead of a 422 from the
/// extractor.
#[derive(Debug, Deserialize)]
pub struct SubscribePayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl TryFrom<SubscribePayload> for NewContact {
    type Error = SubscribeError;

    fn try_from(payload: SubscribePayload) -> Result<Self, Self::Error> {
        let name = ContactName::parse(payload.name.unwrap_or_default())
            .map_err(SubscribeError::ValidationError)?;
        let email = ContactEmail::parse(payload.email.unwrap_or_default())
            .map_err(SubscribeError::ValidationError)?;
        let phone = payload.phone.unwrap_or_default().trim().to_string();

        Ok(Self { name, email, phone })
    }
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    ok: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<Contact>,
}

#[tracing::instrument(
    name = "Adding a new contact",
    skip(state, payload),
    fields(
        contact_email = tracing::field::Empty,
        contact_name = tracing::field::Empty,
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> Result<Json<SubscribeResponse>, SubscribeError> {
    let new_contact: NewContact = payload.try_into()?;
    tracing::Span::current().record(
        "contact_email",
        &tracing::field::display(&new_contact.email),
    );
    tracing::Span::current().record(
        "contact_name",
        &tracing::field::display(new_contact.name.as_ref()),
    );

    // Holding the lock across load and save closes the lost-update race
    // between two concurrent signups.
    let _guard = state.store_lock.lock().await;

    let mut contacts = state
        .store
        .load_all()
        .await
        .context("Failed to load the contact list")?;

    if contacts
        .iter()
        .any(|contact| contact.email == new_contact.email.as_ref())
    {
        return Ok(Json(SubscribeResponse {
            ok: true,
            message: "Already subscribed. Welcome back!".to_string(),
            entry: None,
        }));
    }

    let entry = Contact::new(new_contact);
    contacts.push(entry.clone());

    state
        .store
        .save_all(&contacts)
        .await
        .context("Failed to persist the contact list")?;

    Ok(Json(SubscribeResponse {
        ok: true,
        message: "Subscribed successfully!".to_string(),
        entry: Some(entry),
    }))
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for SubscribeError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SubscribeError::ValidationError(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "ok": false, "message": self.to_string() })),
            ),
            SubscribeError::UnexpectedError(_) => {
                tracing::error!("{:?}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "ok": false, "message": "Server error." })),
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
