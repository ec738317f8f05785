use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: String,
    pub shared_key: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`]. `created_at` is filled in by the repository
/// when the row is written.
pub struct NewClient<'a> {
    pub id: &'a str,
    pub shared_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            shared_key: client.shared_key,
            name: client.name,
            email: client.email,
            phone: client.phone,
            created_at: client.created_at,
        }
    }
}

impl<'a> NewClient<'a> {
    pub fn from_domain(client: &'a DomainNewClient, created_at: NaiveDateTime) -> Self {
        Self {
            id: &client.id,
            shared_key: &client.shared_key,
            name: &client.name,
            email: &client.email,
            phone: client.phone.as_deref(),
            created_at,
        }
    }
}
