//! # Database Store
//!
//! Database connection pool, repository contracts and their implementations.
//!
//! Every repository is a trait with two implementations: one over SQLite
//! (`Sqlite*Repository`) and one over process memory (`InMemory*Repository`).
//! Which one a service receives is decided once, at startup.

// region: --- Modules
pub mod check_in_repository;
pub mod gym_repository;
pub mod in_memory;
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use check_in_repository::{CheckInRepository, SqliteCheckInRepository};
pub use gym_repository::{GymRepository, SqliteGymRepository};
pub use in_memory::{InMemoryCheckInRepository, InMemoryGymRepository, InMemoryUserRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::migrate::Migrator;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Items returned per page by every paginated query.
pub const PAGE_SIZE: u32 = 20;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../../migrations");

/// Row offset of a 1-indexed page. Page 0 is treated as page 1.
pub fn page_offset(page: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(PAGE_SIZE)
}

/// Create a new SQLite connection pool.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// SQLite creates the database file but not its parent directory.
pub fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(db_path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let db_path = db_path.trim_start_matches("//");
    if db_path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory: {:?}", parent);
        }
    }

    Ok(())
}
// endregion: --- Types and Functions
