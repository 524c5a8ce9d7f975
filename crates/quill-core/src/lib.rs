//! # Quill Core
//!
//! The domain layer of the Quill posts service.
//! This crate contains the post model, its validation rules, and the store
//! service. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{DomainError, RepoError};
pub use store::PostStore;
