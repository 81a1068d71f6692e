pub mod catalog;
pub mod draft;
pub mod spacecraft;
