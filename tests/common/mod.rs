use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use alianza_clients::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A temporary on-disk SQLite database with migrations applied; the file
/// lives in a tempdir that is removed when the helper is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: tempfile::TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create tempdir");
        let db_path = dir.path().join(name);
        let pool = establish_connection_pool(db_path.to_str().expect("Invalid db path"))
            .expect("Failed to build pool");

        let mut conn = pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
