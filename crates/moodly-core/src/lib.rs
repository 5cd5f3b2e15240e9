//! moodly-core
//!
//! Pure domain types for the DASS-21 assessment and chat-access gating.
//! The shared vocabulary of the Moodly system. No network dependency.

pub mod error;
pub mod helplines;
pub mod models;
pub mod session;
