//! Service layer combining the remote catalog with the local override store.

pub mod catalog;

pub use catalog::CatalogService;
