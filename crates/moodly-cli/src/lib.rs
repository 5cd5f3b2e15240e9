//! moodly-cli
//!
//! Terminal front-end for the assessment flow. The library half holds what
//! the binary needs outside of clap: configuration and the session handed
//! over by the identity provider.

pub mod config;

use moodly_core::session::Session;

pub const ENV_USER_ID: &str = "MOODLY_USER_ID";
pub const ENV_ID_TOKEN: &str = "MOODLY_ID_TOKEN";

/// Build the session from the identity provider's output. Never persisted.
pub fn session_from_env(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Session> {
    let user_id = lookup(ENV_USER_ID)
        .ok_or_else(|| eyre::eyre!("not signed in: {ENV_USER_ID} is not set"))?;
    let token = lookup(ENV_ID_TOKEN)
        .ok_or_else(|| eyre::eyre!("not signed in: {ENV_ID_TOKEN} is not set"))?;
    Ok(Session::new(user_id, token)?)
}
