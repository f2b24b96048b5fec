#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use travel_bookings::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory, migrated to the latest schema
/// and removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Runs `sql` with foreign key checks suspended, so rows that are still
    /// referenced can be removed. Checks are re-enabled before the pooled
    /// connection is returned.
    pub fn delete_unchecked(&self, sql: &str) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = OFF; {sql} PRAGMA foreign_keys = ON;"
        ))
        .expect("delete rows");
    }
}
