//! Remote number service configuration.

use std::time::Duration;

/// Runtime settings for the number service client.
/// Built from `SERVER` and then overridden by command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ServerConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full request URL for a path segment, tolerating a trailing slash on the base.
    pub fn url_for(&self, segment: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), segment)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: SERVER.base_url.to_string(),
            timeout_ms: SERVER.timeout_ms,
        }
    }
}

/// Compile-time defaults for the number service
pub struct ServerDefaults {
    /// Base URL of the test server. Category segments are appended to this.
    pub base_url: &'static str,
    /// Hard deadline for a single fetch (milliseconds)
    pub timeout_ms: u64,
    /// Informational endpoint shown in the results panel. Never called.
    pub display_endpoint_base: &'static str,
}

pub const SERVER: ServerDefaults = ServerDefaults {
    base_url: "http://20.244.56.144/test",
    timeout_ms: 500,
    display_endpoint_base: "http://localhost:9876/numbers",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_segment_once() {
        let config = ServerConfig {
            base_url: "http://127.0.0.1:9000/test/".to_string(),
            timeout_ms: 500,
        };
        assert_eq!(config.url_for("primes"), "http://127.0.0.1:9000/test/primes");
    }

    #[test]
    fn default_deadline_is_half_a_second() {
        assert_eq!(ServerConfig::default().deadline(), Duration::from_millis(500));
    }
}
