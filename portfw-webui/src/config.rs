use portfw_api::{endpoint::ApiEndpoint, error::Error};
use std::str::FromStr;

const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:3001";

/// Route server address baked in at build time.
pub const API_ENDPOINT: &str = match option_env!("PORTFW_API_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_API_ENDPOINT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_endpoint: ApiEndpoint,
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, Error> {
        Self::with_endpoint(API_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            api_endpoint: ApiEndpoint::from_str(endpoint)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_endpoint_is_valid() {
        assert!(ConsoleConfig::with_endpoint(DEFAULT_API_ENDPOINT).is_ok());
    }

    #[test]
    fn test_with_endpoint() {
        let config = ConsoleConfig::with_endpoint("http://10.0.0.2:3001/").unwrap();
        assert_eq!(config.api_endpoint.to_string(), "http://10.0.0.2:3001");
        assert_eq!(
            ConsoleConfig::with_endpoint("10.0.0.2:3001"),
            Err(Error::InvalidEndpoint {
                url: "10.0.0.2:3001".to_owned()
            })
        );
    }
}
