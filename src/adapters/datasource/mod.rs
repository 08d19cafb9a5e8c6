//! Data source abstraction layer
//!
//! Snapshot reads go through the [`DataSource`] trait so the dashboard can be
//! built from the remote realtime database or from a local JSON export.

pub mod factory;
pub mod file;
pub mod realtime;
pub mod traits;

pub use factory::connect_data_source;
pub use file::JsonFileSource;
pub use realtime::RealtimeDbClient;
pub use traits::DataSource;
