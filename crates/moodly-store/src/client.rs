use std::time::Duration;

use ureq::Agent;

/// Where the result store lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl StoreSettings {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }
}

/// Build an HTTP agent with a global per-request timeout.
///
/// Non-2xx statuses are returned as responses, not errors, so the adapter
/// can classify them.
pub fn build_agent(settings: &StoreSettings) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(settings.timeout))
        .http_status_as_error(false)
        .build();
    Agent::new_with_config(config)
}
