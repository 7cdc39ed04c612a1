use crate::constants::DEFAULT_PORT;
use aliyun_log_core::{Error, Result};
use std::fmt;

/// Endpoint is the parsed address of a Log Service region.
///
/// Accepted forms include `cn-hangzhou.log.aliyuncs.com`,
/// `https://cn-hangzhou.log.aliyuncs.com/` and `10.0.0.1:8080`.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: u16,
    is_ip_literal: bool,
}

impl Endpoint {
    /// Parse an endpoint string.
    ///
    /// - A leading `scheme://` is stripped; `https` is kept, anything else but `http` is rejected.
    /// - Anything after the first `/` is ignored.
    /// - The port defaults to 80.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let endpoint = endpoint.trim();

        let (scheme, rest) = match endpoint.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), endpoint),
        };
        if scheme != "http" && scheme != "https" {
            return Err(Error::parameter_invalid(format!(
                "unsupported endpoint scheme: {scheme}"
            )));
        }

        let authority = rest.split('/').next().unwrap_or_default();
        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|e| {
                    Error::parameter_invalid(format!("invalid endpoint port: {port}"))
                        .with_source(e)
                })?;
                (host, port)
            }
            None => (authority, DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(Error::parameter_invalid(format!(
                "endpoint has no host: {endpoint}"
            )));
        }

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            is_ip_literal: is_ip_literal(host),
        })
    }

    /// The scheme used to build urls, `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The bare host, without project or port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, 80 unless the endpoint named one.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the host is a literal IPv4 address.
    pub fn is_ip_literal(&self) -> bool {
        self.is_ip_literal
    }

    /// Value of the `Host` header: `<project>.<host>` when a project is given.
    pub fn host_header(&self, project: Option<&str>) -> String {
        match project {
            Some(project) => format!("{project}.{}", self.host),
            None => self.host.clone(),
        }
    }

    /// The url prefix requests are sent to, e.g. `http://demo.cn-hangzhou.log.aliyuncs.com:80`.
    ///
    /// IP literal hosts never get the project subdomain.
    pub fn base_url(&self, project: Option<&str>) -> String {
        match project {
            Some(project) if !self.is_ip_literal => {
                format!("{}://{project}.{}:{}", self.scheme, self.host, self.port)
            }
            _ => format!("{}://{}:{}", self.scheme, self.host, self.port),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("is_ip_literal", &self.is_ip_literal)
            .finish()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Check whether `host` is a dotted quad like `10.0.0.1`.
pub fn is_ip_literal(host: &str) -> bool {
    let mut octets = 0;
    for part in host.split('.') {
        octets += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match part.parse::<u16>() {
            Ok(v) if v <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("10.0.0.1", true; "private ip")]
    #[test_case("255.255.255.255", true; "broadcast")]
    #[test_case("256.0.0.1", false; "octet out of range")]
    #[test_case("10.0.0", false; "three octets")]
    #[test_case("10.0.0.1.5", false; "five octets")]
    #[test_case("1234.0.0.1", false; "four digits")]
    #[test_case("cn-hangzhou.log.aliyuncs.com", false; "domain")]
    #[test_case("10.0.0.a", false; "letter")]
    fn test_is_ip_literal(host: &str, expected: bool) {
        assert_eq!(is_ip_literal(host), expected);
    }

    #[test]
    fn test_parse_ip_with_port() -> anyhow::Result<()> {
        let ep = Endpoint::parse("10.0.0.1:8080")?;
        assert!(ep.is_ip_literal());
        assert_eq!(ep.host(), "10.0.0.1");
        assert_eq!(ep.port(), 8080);
        assert_eq!(ep.scheme(), "http");
        Ok(())
    }

    #[test]
    fn test_parse_domain() -> anyhow::Result<()> {
        let ep = Endpoint::parse("cn-hangzhou.log.aliyuncs.com")?;
        assert!(!ep.is_ip_literal());
        assert_eq!(ep.port(), 80);
        assert_eq!(ep.to_string(), "cn-hangzhou.log.aliyuncs.com:80");
        Ok(())
    }

    #[test]
    fn test_parse_strips_scheme_and_path() -> anyhow::Result<()> {
        let ep = Endpoint::parse("https://cn-beijing.log.aliyuncs.com:443/some/path")?;
        assert_eq!(ep.scheme(), "https");
        assert_eq!(ep.host(), "cn-beijing.log.aliyuncs.com");
        assert_eq!(ep.port(), 443);
        Ok(())
    }

    #[test_case("ftp://cn-hangzhou.log.aliyuncs.com"; "bad scheme")]
    #[test_case("cn-hangzhou.log.aliyuncs.com:http"; "bad port")]
    #[test_case(""; "empty")]
    #[test_case("http://:80"; "no host")]
    fn test_parse_invalid(input: &str) {
        let err = Endpoint::parse(input).expect_err("must be rejected");
        assert_eq!(err.kind(), aliyun_log_core::ErrorKind::ParameterInvalid);
    }

    #[test]
    fn test_project_prefixing() -> anyhow::Result<()> {
        let domain = Endpoint::parse("cn-hangzhou.log.aliyuncs.com")?;
        assert_eq!(
            domain.base_url(Some("demo")),
            "http://demo.cn-hangzhou.log.aliyuncs.com:80"
        );
        assert_eq!(domain.base_url(None), "http://cn-hangzhou.log.aliyuncs.com:80");
        assert_eq!(
            domain.host_header(Some("demo")),
            "demo.cn-hangzhou.log.aliyuncs.com"
        );

        let ip = Endpoint::parse("10.0.0.1:8080")?;
        assert_eq!(ip.base_url(Some("demo")), "http://10.0.0.1:8080");
        // Host header keeps the project prefix.
        assert_eq!(ip.host_header(Some("demo")), "demo.10.0.0.1");
        Ok(())
    }
}
