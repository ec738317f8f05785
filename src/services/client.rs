//! Client business logic: key derivation, duplicate detection and the
//! search/export orchestration on top of the repository traits.

use uuid::Uuid;

use crate::domain::client::NewClient;
use crate::dto::client::{ClientDto, ClientSearchCriteria, ExportFile};
use crate::export::{self, ExportFormat};
use crate::forms::client::CreateClientForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, ClientSearchQuery, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored client.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients()?;
    Ok(clients.into_iter().map(Into::into).collect())
}

/// Returns clients whose shared key contains `fragment`, case-insensitively.
/// Unlike the criteria search, zero matches here is an error.
pub fn search_clients_by_shared_key<R>(repo: &R, fragment: &str) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.search_by_shared_key(fragment)?;
    if clients.is_empty() {
        return Err(ServiceError::NotFound(format!(
            "No client found with shared key matching '{fragment}'"
        )));
    }
    Ok(clients.into_iter().map(Into::into).collect())
}

/// Derives the shared key from an email: the part before the first `@`,
/// lower-cased.
pub fn derive_shared_key(email: &str) -> ServiceResult<String> {
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => Ok(local.to_lowercase()),
        _ => Err(ServiceError::InvalidInput(format!(
            "Email '{email}' is not usable for deriving a shared key"
        ))),
    }
}

fn duplicate_key_error(shared_key: &str) -> ServiceError {
    ServiceError::DuplicateKey(format!(
        "Shared key '{shared_key}' already exists. Please use a different email."
    ))
}

/// Creates a client from an already-validated form: derives the shared key,
/// rejects duplicates, assigns a UUID when no id was supplied and persists
/// the record.
pub fn create_client<R>(repo: &R, form: CreateClientForm) -> ServiceResult<ClientDto>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let shared_key = derive_shared_key(&form.email)?;

    // Fast-path duplicate check; the unique constraint in the store remains
    // the authoritative guard under concurrent creates.
    if repo.shared_key_exists(&shared_key)? {
        return Err(duplicate_key_error(&shared_key));
    }

    let id = form
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let new_client = NewClient::new(id, shared_key.clone(), form.name, form.email, form.phone);

    let created = repo.create_client(&new_client).map_err(|err| match err {
        RepositoryError::ConstraintViolation(_) => duplicate_key_error(&shared_key),
        other => ServiceError::from(other),
    })?;

    Ok(created.into())
}

/// Returns clients matching the AND-combined criteria. An empty result is a
/// normal empty list.
pub fn search_clients<R>(repo: &R, criteria: &ClientSearchCriteria) -> ServiceResult<Vec<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = ClientSearchQuery::from(criteria);
    let clients = repo.search_clients(&query)?;
    Ok(clients.into_iter().map(Into::into).collect())
}

/// Runs the criteria search and renders the matches in the requested format.
pub fn export_clients<R>(repo: &R, criteria: &ClientSearchCriteria) -> ServiceResult<ExportFile>
where
    R: ClientReader + ?Sized,
{
    let requested = criteria.export_format.as_deref().unwrap_or_default();
    let format = ExportFormat::parse(requested).ok_or_else(|| {
        ServiceError::InvalidInput(format!("Unsupported export format: '{requested}'"))
    })?;

    let clients = search_clients(repo, criteria)?;
    let bytes = export::encode(format, &clients)?;

    Ok(ExportFile {
        bytes,
        file_name: format.file_name(),
        content_type: format.content_type(),
    })
}
