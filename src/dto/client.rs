//! External JSON representations of clients and search requests.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// Wire representation of a [`Client`]; field names follow the JSON contract
/// (`sharedKey`, `createdAt`, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: String,
    pub shared_key: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            shared_key: client.shared_key,
            name: client.name,
            email: client.email,
            phone: client.phone,
            created_at: Some(client.created_at),
        }
    }
}

/// Request-scoped search filters. Every field is optional; an absent field
/// contributes no constraint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearchCriteria {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Inclusive lower bound on the creation date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the creation date.
    pub end_date: Option<NaiveDate>,
    /// `CSV` or `EXCEL`, case-insensitive. Only consulted by the export
    /// endpoint.
    pub export_format: Option<String>,
}

/// Rendered attachment produced by the export service: the encoded bytes
/// plus the download metadata the HTTP layer needs.
#[derive(Debug)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub content_type: &'static str,
}
