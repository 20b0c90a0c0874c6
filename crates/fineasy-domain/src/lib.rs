//! fineasy-domain
//!
//! Pure domain models (Transaction, TransactionKind, categories, entry drafts).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod draft;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use draft::*;
pub use transaction::*;
