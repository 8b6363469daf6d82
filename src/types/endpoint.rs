use std::fmt;
use std::str::FromStr;

use super::ValueError;

/// A `host:port` pair naming a shared-memory cache daemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Parse a TCP port, rejecting zero and anything outside the u16 range.
pub(crate) fn parse_port(value: i64) -> Result<u16, ValueError> {
    match u16::try_from(value) {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ValueError::PortRange),
    }
}

impl FromStr for Endpoint {
    type Err = ValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        // rsplit so bracketed IPv6 hosts keep their inner colons
        let Some((host, port)) = trimmed.rsplit_once(':') else {
            return Err(ValueError::MissingPort(trimmed.to_string()));
        };
        if host.is_empty() {
            return Err(ValueError::EmptyHost(trimmed.to_string()));
        }
        let port = port
            .parse::<i64>()
            .map_err(|_| ValueError::PortRange)
            .and_then(parse_port)?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_and_port() {
        let endpoint: Endpoint = "127.0.0.1:11211".parse().unwrap();
        assert_eq!(endpoint.host(), "127.0.0.1");
        assert_eq!(endpoint.port(), 11211);
        assert_eq!(endpoint.to_string(), "127.0.0.1:11211");
    }

    #[test]
    fn keeps_bracketed_ipv6_hosts() {
        let endpoint: Endpoint = "[::1]:11211".parse().unwrap();
        assert_eq!(endpoint.host(), "[::1]");
    }

    #[test]
    fn rejects_malformed_endpoints() {
        assert!(matches!(
            "localhost".parse::<Endpoint>(),
            Err(ValueError::MissingPort(_))
        ));
        assert!(matches!(
            ":11211".parse::<Endpoint>(),
            Err(ValueError::EmptyHost(_))
        ));
        assert_eq!("cache:0".parse::<Endpoint>(), Err(ValueError::PortRange));
        assert_eq!("cache:70000".parse::<Endpoint>(), Err(ValueError::PortRange));
        assert_eq!("cache:abc".parse::<Endpoint>(), Err(ValueError::PortRange));
    }

    #[test]
    fn port_range_is_enforced() {
        assert_eq!(parse_port(587), Ok(587));
        assert_eq!(parse_port(-25), Err(ValueError::PortRange));
        assert_eq!(parse_port(0), Err(ValueError::PortRange));
        assert_eq!(parse_port(65_536), Err(ValueError::PortRange));
    }
}
