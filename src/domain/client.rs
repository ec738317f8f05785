use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered client record as stored by the repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: String,
    /// Derived, unique key: the lower-cased local part of the email.
    pub shared_key: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Data required to persist a new client. `created_at` is assigned by the
/// repository at insert time and is therefore absent here.
#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub id: String,
    pub shared_key: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        id: String,
        shared_key: String,
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            shared_key,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
