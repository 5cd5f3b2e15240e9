//! The signed-in user, as supplied by the identity provider.
//!
//! Passed explicitly to every operation that needs identity. Nothing in the
//! workspace holds a process-wide session.

use std::fmt;

use crate::error::CoreError;

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
    bearer: String,
}

impl Session {
    /// The user id becomes a URL path segment, so only unreserved
    /// characters are accepted.
    pub fn new(user_id: impl Into<String>, bearer: impl Into<String>) -> Result<Self, CoreError> {
        let user_id = user_id.into();
        let url_safe = user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
        if user_id.is_empty() || !url_safe {
            return Err(CoreError::InvalidUserId(user_id));
        }
        let bearer = bearer.into();
        if bearer.is_empty() {
            return Err(CoreError::MissingField("bearer token".to_string()));
        }
        Ok(Self { user_id, bearer })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("bearer", &"<redacted>")
            .finish()
    }
}
