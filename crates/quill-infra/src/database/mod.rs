//! Database connection management and the SQLite repository.

mod connections;

#[cfg(feature = "sqlite")]
pub mod entity;
#[cfg(feature = "sqlite")]
mod sqlite_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "sqlite")]
pub use connections::connect;
#[cfg(feature = "sqlite")]
pub use sqlite_repo::SqlitePostRepository;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod tests;
