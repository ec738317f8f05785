//! Incoming request payload for client creation and its field validation.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::ValidateEmail;

/// JSON body accepted by `POST /clients`. A client-supplied `sharedKey` is
/// ignored; the key is always derived server-side from the email.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CreateClientForm {
    /// Checks every field constraint and returns one message per offending
    /// field. An empty map means the payload is valid.
    pub fn validate(&self) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !self.email.validate_email() {
            errors.insert("email", "Invalid email format".to_string());
        }

        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
                errors.insert("phone", "Phone number must be 10 digits".to_string());
            }
        }

        errors
    }
}
