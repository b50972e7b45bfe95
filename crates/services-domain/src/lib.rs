//! Domain layer for the Services 2.0 calculator
//!
//! Pure lookup and arithmetic over the workbook reference table. Nothing in
//! this crate touches the filesystem.

pub mod catalog;
pub mod model;
pub mod service;

pub use catalog::ServiceCatalog;
pub use model::{ScenarioEntry, ServiceRow};
