use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::new_contact::NewContact;
use crate::SERVICE_NAME;

/// One signup record, persisted exactly as it appears on the wire.
/// `id`, `created_at` and `source` are fixed at creation and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub source: String,
}

impl Contact {
    pub fn new(new_contact: NewContact) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_contact.name.as_ref().to_string(),
            phone: new_contact.phone,
            email: new_contact.email.as_ref().to_string(),
            created_at: Utc::now(),
            source: SERVICE_NAME.to_string(),
        }
    }
}
