use chrono::{Duration, Utc};
use uuid::Uuid;

use alianza_clients::domain::client::NewClient;
use alianza_clients::repository::client::DieselClientRepository;
use alianza_clients::repository::errors::RepositoryError;
use alianza_clients::repository::{ClientReader, ClientSearchQuery, ClientWriter};

mod common;

fn new_client(shared_key: &str, name: &str, email: &str, phone: Option<&str>) -> NewClient {
    NewClient::new(
        Uuid::new_v4().to_string(),
        shared_key.to_string(),
        name.to_string(),
        email.to_string(),
        phone.map(Into::into),
    )
}

#[test]
fn test_create_and_list_clients() {
    let test_db = common::TestDb::new("test_create_and_list_clients.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    let alice = repo
        .create_client(&new_client(
            "alice",
            "Alice",
            "alice@example.com",
            Some("3001234567"),
        ))
        .unwrap();
    let bob = repo
        .create_client(&new_client("bob", "Bob", "bob@example.com", None))
        .unwrap();

    assert_eq!(alice.shared_key, "alice");
    assert_eq!(bob.phone, None);

    let all = repo.list_clients().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|c| c.created_at.and_utc().timestamp() > 0));
}

#[test]
fn test_duplicate_shared_key_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_shared_key.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("a", "First", "a@x.com", None))
        .unwrap();
    let err = repo
        .create_client(&new_client("a", "Second", "a@y.com", None))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_duplicate_email_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_email.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("a", "First", "a@x.com", None))
        .unwrap();
    let err = repo
        .create_client(&new_client("other", "Second", "a@x.com", None))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_shared_key_exists() {
    let test_db = common::TestDb::new("test_shared_key_exists.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("jdoe", "John", "jdoe@example.com", None))
        .unwrap();

    assert!(repo.shared_key_exists("jdoe").unwrap());
    assert!(!repo.shared_key_exists("ghost").unwrap());
}

#[test]
fn test_search_by_shared_key_substring() {
    let test_db = common::TestDb::new("test_search_by_shared_key.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("jdoe", "John", "jdoe@example.com", None))
        .unwrap();
    repo.create_client(&new_client("jsmith", "Jane", "jsmith@example.com", None))
        .unwrap();

    // Substring and case-insensitive.
    let matches = repo.search_by_shared_key("DOE").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].shared_key, "jdoe");

    let matches = repo.search_by_shared_key("j").unwrap();
    assert_eq!(matches.len(), 2);

    assert!(repo.search_by_shared_key("nobody").unwrap().is_empty());
}

#[test]
fn test_criteria_search_filters_compose() {
    let test_db = common::TestDb::new("test_criteria_search.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client(
        "alice",
        "Alice Johnson",
        "alice@example.com",
        Some("3001234567"),
    ))
    .unwrap();
    repo.create_client(&new_client(
        "bob",
        "Bob Johnson",
        "bob@other.org",
        Some("6019876543"),
    ))
    .unwrap();

    // No filters: everything matches.
    let all = repo.search_clients(&ClientSearchQuery::new()).unwrap();
    assert_eq!(all.len(), 2);

    // Name substring, case-insensitive.
    let by_name = repo
        .search_clients(&ClientSearchQuery::new().name("johnson"))
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let by_name = repo
        .search_clients(&ClientSearchQuery::new().name("ALICE"))
        .unwrap();
    assert_eq!(by_name.len(), 1);

    // Email substring.
    let by_email = repo
        .search_clients(&ClientSearchQuery::new().email("example.com"))
        .unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].shared_key, "alice");

    // Phone substring.
    let by_phone = repo
        .search_clients(&ClientSearchQuery::new().phone("601"))
        .unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].shared_key, "bob");

    // Conjunction: both filters must hold.
    let both = repo
        .search_clients(&ClientSearchQuery::new().name("johnson").phone("601"))
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].shared_key, "bob");
}

#[test]
fn test_criteria_search_date_bounds() {
    let test_db = common::TestDb::new("test_criteria_search_dates.db");
    let repo = DieselClientRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("a", "A", "a@x.com", None))
        .unwrap();

    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    // created_at falls on today, so [today, today] matches inclusively.
    let query = ClientSearchQuery::new()
        .created_from(today)
        .created_until(today);
    assert_eq!(repo.search_clients(&query).unwrap().len(), 1);

    let query = ClientSearchQuery::new().created_from(tomorrow);
    assert!(repo.search_clients(&query).unwrap().is_empty());

    let query = ClientSearchQuery::new().created_until(yesterday);
    assert!(repo.search_clients(&query).unwrap().is_empty());

    let query = ClientSearchQuery::new().created_from(yesterday);
    assert_eq!(repo.search_clients(&query).unwrap().len(), 1);
}
