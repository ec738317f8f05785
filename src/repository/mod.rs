use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::client::{Client, NewClient};
use crate::dto::client::ClientSearchCriteria;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;

/// Conjunction of optional filters over stored clients. Each populated field
/// contributes one AND-ed clause; an empty query matches every record.
#[derive(Debug, Clone, Default)]
pub struct ClientSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Lower bound (inclusive) on `created_at`.
    pub created_from: Option<NaiveDateTime>,
    /// Upper bound (exclusive) on `created_at`; covers the whole end date.
    pub created_before: Option<NaiveDateTime>,
}

impl ClientSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn created_from(mut self, date: NaiveDate) -> Self {
        self.created_from = Some(date.and_time(chrono::NaiveTime::MIN));
        self
    }

    /// Includes the whole of `date` by bounding strictly below the next day.
    pub fn created_until(mut self, date: NaiveDate) -> Self {
        self.created_before = Some(date.succ_opt().unwrap_or(date).and_time(chrono::NaiveTime::MIN));
        self
    }
}

impl From<&ClientSearchCriteria> for ClientSearchQuery {
    fn from(criteria: &ClientSearchCriteria) -> Self {
        let mut query = ClientSearchQuery::new();
        if let Some(name) = &criteria.name {
            query = query.name(name);
        }
        if let Some(email) = &criteria.email {
            query = query.email(email);
        }
        if let Some(phone) = &criteria.phone {
            query = query.phone(phone);
        }
        if let Some(start) = criteria.start_date {
            query = query.created_from(start);
        }
        if let Some(end) = criteria.end_date {
            query = query.created_until(end);
        }
        query
    }
}

pub trait ClientReader {
    /// Returns every stored client in store order.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    /// Returns clients whose shared key contains `fragment`, case-insensitively.
    fn search_by_shared_key(&self, fragment: &str) -> RepositoryResult<Vec<Client>>;
    /// Returns clients matching every populated filter of `query`.
    fn search_clients(&self, query: &ClientSearchQuery) -> RepositoryResult<Vec<Client>>;
    fn shared_key_exists(&self, shared_key: &str) -> RepositoryResult<bool>;
}

pub trait ClientWriter {
    /// Persists a new client, assigning `created_at`. Fails with
    /// [`errors::RepositoryError::ConstraintViolation`] on a duplicate shared
    /// key or email.
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_criteria_builds_empty_query() {
        let criteria = ClientSearchCriteria::default();
        let query = ClientSearchQuery::from(&criteria);
        assert!(query.name.is_none());
        assert!(query.email.is_none());
        assert!(query.phone.is_none());
        assert!(query.created_from.is_none());
        assert!(query.created_before.is_none());
    }

    #[test]
    fn date_bounds_cover_the_end_day() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let query = ClientSearchQuery::new().created_from(start).created_until(end);

        let from = query.created_from.unwrap();
        let before = query.created_before.unwrap();
        assert_eq!(from.date(), start);
        assert_eq!(from.time(), chrono::NaiveTime::MIN);
        // End of 2024-01-31 23:59:59 must still fall inside the range.
        assert_eq!(before.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
