//! moodly-store
//!
//! Result store adapter. The store itself is a remote service; this crate
//! holds the contract the assessment flow consumes and an HTTP client for it.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod wire;

pub use crate::error::StoreError;
pub use crate::http::HttpResultStore;
pub use crate::store::{ResultStore, StoreStatus, Submission};
