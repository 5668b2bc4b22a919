//! Shared storage logic for catalog entities (programs and subjects).

pub mod service;

pub use service::CatalogService;
