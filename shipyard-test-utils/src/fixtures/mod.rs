//! Catalog fixtures.
//!
//! - `factory` - JSON records shaped like SWAPI responses
//! - `mockito` - mock catalog endpoints registered on [`crate::TestSetup`]

pub mod factory;
pub mod mockito;
