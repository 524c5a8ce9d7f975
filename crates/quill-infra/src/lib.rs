//! # Quill Infrastructure
//!
//! Concrete implementations of the `PostRepository` port defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - SQLite storage via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use database::SqlitePostRepository;
