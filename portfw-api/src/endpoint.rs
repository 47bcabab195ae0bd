use crate::error::Error;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::{fmt, str::FromStr};
use url::Url;

/// Characters left untouched when a route key is placed in a path segment.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base URL of a route server, stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: String,
}

impl ApiEndpoint {
    pub fn routes(&self) -> String {
        format!("{}/proxy", self.base)
    }

    pub fn route(&self, local: &str) -> String {
        format!("{}/{}", self.routes(), utf8_percent_encode(local, COMPONENT))
    }
}

impl FromStr for ApiEndpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|_| Error::InvalidEndpoint { url: s.to_string() })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::InvalidEndpoint { url: s.to_string() });
        }
        let base = url.as_str().trim_end_matches('/').to_string();
        Ok(Self { base })
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_endpoint() {
        let endpoint = ApiEndpoint::from_str("http://127.0.0.1:3001").unwrap();
        assert_eq!(endpoint.routes(), "http://127.0.0.1:3001/proxy");
        assert_eq!(endpoint.route("9090"), "http://127.0.0.1:3001/proxy/9090");

        let endpoint = ApiEndpoint::from_str("https://example.com/api/").unwrap();
        assert_eq!(endpoint.routes(), "https://example.com/api/proxy");
    }

    #[test]
    fn test_endpoint_encodes_key() {
        let endpoint = ApiEndpoint::from_str("http://localhost:3001/").unwrap();
        assert_eq!(
            endpoint.route("a/b c"),
            "http://localhost:3001/proxy/a%2Fb%20c"
        );
        assert_eq!(
            endpoint.route("[::1]:80"),
            "http://localhost:3001/proxy/%5B%3A%3A1%5D%3A80"
        );
        assert_eq!(endpoint.route("x-y_z.~"), "http://localhost:3001/proxy/x-y_z.~");
    }

    #[test]
    fn test_invalid_endpoint() {
        assert_eq!(
            ApiEndpoint::from_str("localhost:3001"),
            Err(Error::UnsupportedScheme {
                scheme: "localhost".to_owned()
            })
        );
        assert_eq!(
            ApiEndpoint::from_str("not a url"),
            Err(Error::InvalidEndpoint {
                url: "not a url".to_owned()
            })
        );
        assert_eq!(
            ApiEndpoint::from_str("ftp://example.com"),
            Err(Error::UnsupportedScheme {
                scheme: "ftp".to_owned()
            })
        );
    }
}
