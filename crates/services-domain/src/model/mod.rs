//! Domain model types

pub mod scenario;
pub mod service_row;

pub use scenario::ScenarioEntry;
pub use service_row::ServiceRow;
