use std::net::{IpAddr, SocketAddr};

use crate::auth::jwt::JwtConfig;

/// Runtime configuration for the HTTP server, read once at startup.
///
/// Every value has a local-development default; deployments override
/// through the environment. Invalid values panic during load so a
/// misconfigured process never starts serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default `0.0.0.0`).
    pub host: IpAddr,
    /// Port to bind (default `3000`).
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-request deadline enforced by the timeout layer, in seconds.
    pub request_timeout_secs: u64,
    /// Access-token signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read the server configuration from the environment.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    ///
    /// `CORS_ORIGINS` is a comma-separated list; blank entries are
    /// dropped. See [`JwtConfig::from_env`] for the token variables.
    pub fn from_env() -> Self {
        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .expect("HOST must be a valid IP address");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_csv(&env_or("CORS_ORIGINS", "http://localhost:5173"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }

    /// The socket address the server binds.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read an environment variable, falling back to a default when unset.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated value into trimmed, non-empty entries.
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_blanks() {
        let origins = split_csv("http://localhost:5173, https://app.example.com ,,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn split_csv_of_empty_string_is_empty() {
        assert!(split_csv("").is_empty());
    }
}
