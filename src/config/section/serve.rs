//! `[serve]` section configuration.
//!
//! Preview server settings. The default port matches the e2e base URL.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # 0.0.0.0 to expose on the LAN
//! port = 3001
//! ```

use std::net::{IpAddr, Ipv4Addr};

use macros::Config;
use serde::{Deserialize, Serialize};

/// Preview server settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve")]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    #[config(inline_doc = "HTTP port number.")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 8080");

        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_serve_config_ipv6() {
        let config = test_parse_config("[serve]\ninterface = \"::1\"");
        assert_eq!(config.serve.interface, IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(config.serve.port, 3001);
    }
}
