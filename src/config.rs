use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::DEFAULT_COMPANY_ID;

/// Environment variable holding the default company identifier.
pub const COMPANY_ID_VAR: &str = "COMPANY_ID";

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}

/// Settings shared by the HTTP server and the GraphQL repository.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Company used when a request does not name one.
    pub company_id: String,
    pub graphql_url: String,
    pub graphql_admin_secret: Option<String>,
    /// Deadline applied to every outbound GraphQL request.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let graphql_url = non_blank_var("GRAPHQL_URL").ok_or(ConfigError::Missing("GRAPHQL_URL"))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            address: non_blank_var("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port,
            company_id: resolve_company_id(None),
            graphql_url,
            graphql_admin_secret: non_blank_var("GRAPHQL_ADMIN_SECRET"),
            request_timeout: Duration::from_secs(request_timeout),
        })
    }
}

/// Pick the company for a request: the explicit argument, then `COMPANY_ID`,
/// then [`DEFAULT_COMPANY_ID`]. Blank values count as absent.
pub fn resolve_company_id(explicit: Option<&str>) -> String {
    explicit
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| non_blank_var(COMPANY_ID_VAR))
        .unwrap_or_else(|| DEFAULT_COMPANY_ID.to_string())
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_company_wins() {
        assert_eq!(resolve_company_id(Some(" acme ")), "acme");
    }

    #[test]
    fn blank_company_falls_back() {
        let resolved = resolve_company_id(Some("   "));

        let expected = non_blank_var(COMPANY_ID_VAR).unwrap_or_else(|| DEFAULT_COMPANY_ID.to_string());
        assert_eq!(resolved, expected);
    }
}
