//! Shipyard: a catalog of vehicles and starships sourced from SWAPI and extended with
//! spacecraft created locally in the browser.
//!
//! The crate is split into the data pipeline (this library) and the Dioxus client found
//! in the binary. Data flows in one direction:
//!
//! 1. [`catalog`] walks the paginated SWAPI collections and resolves film references
//! 2. [`store`] reads and writes locally created spacecraft through a key-value backend
//! 3. [`service`] combines both sources into a [`view::CatalogSnapshot`]
//! 4. [`view`] derives favorites and produces the sorted, filtered listing

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod view;
