//! fineasy-core
//!
//! Business logic for Fineasy: the transaction repository, the persistent
//! store abstraction, and the aggregation used by the dashboard.
//! Depends on fineasy-domain. No CLI, no terminal I/O, no file system access.

pub mod error;
pub mod repository;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use error::CoreError;
pub use repository::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
