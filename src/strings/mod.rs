//! Content-addressed string records
//!
//! Records are keyed by the SHA-256 digest of their value, which makes the
//! value itself the identity: the same string can be stored at most once.

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{strings_router, StringsState};
pub use store::StringStore;
pub use types::{ApiError, StringRecord};
