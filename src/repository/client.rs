use chrono::Utc;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::client::{Client, NewClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientSearchQuery, ClientWriter};

/// Diesel implementation of [`ClientReader`] and [`ClientWriter`].
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselClientRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let items = clients::table
            .order(clients::created_at.asc())
            .load::<DbClient>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn search_by_shared_key(&self, fragment: &str) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        // SQLite LIKE is case-insensitive for ASCII; shared keys are stored
        // lower-cased, so lowering the fragment keeps the match complete.
        let pattern = format!("%{}%", fragment.to_lowercase());

        let items = clients::table
            .filter(clients::shared_key.like(&pattern))
            .order(clients::created_at.asc())
            .load::<DbClient>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn search_clients(&self, query: &ClientSearchQuery) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let mut stmt = clients::table.into_boxed();

        if let Some(name) = &query.name {
            stmt = stmt.filter(clients::name.like(format!("%{name}%")));
        }
        if let Some(email) = &query.email {
            stmt = stmt.filter(clients::email.like(format!("%{email}%")));
        }
        if let Some(phone) = &query.phone {
            stmt = stmt.filter(clients::phone.like(format!("%{phone}%")));
        }
        if let Some(from) = query.created_from {
            stmt = stmt.filter(clients::created_at.ge(from));
        }
        if let Some(before) = query.created_before {
            stmt = stmt.filter(clients::created_at.lt(before));
        }

        let items = stmt
            .order(clients::created_at.asc())
            .load::<DbClient>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn shared_key_exists(&self, shared_key: &str) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let count: i64 = clients::table
            .filter(clients::shared_key.eq(shared_key))
            .count()
            .get_result(&mut conn)?;

        Ok(count > 0)
    }
}

impl ClientWriter for DieselClientRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let insertable = DbNewClient::from_domain(new_client, Utc::now().naive_utc());

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }
}
