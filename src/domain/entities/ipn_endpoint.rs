use crate::{
    config::IpnConfig,
    constants::{HTTPS_SCHEME, HTTP_SCHEME, PRODUCTION_HOST, SANDBOX_HOST, VERIFICATION_PATH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpnEnvironment {
    Production,
    Sandbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpnScheme {
    Http,
    Https,
}

/// The PayPal endpoint that notifications are echoed back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpnEndpoint {
    pub environment: IpnEnvironment,
    pub scheme: IpnScheme,
}

impl IpnEndpoint {
    pub fn from_flags(sandbox: bool, ssl: bool) -> Self {
        Self {
            environment: if sandbox {
                IpnEnvironment::Sandbox
            } else {
                IpnEnvironment::Production
            },
            scheme: if ssl { IpnScheme::Https } else { IpnScheme::Http },
        }
    }

    pub fn host(&self) -> &'static str {
        match self.environment {
            IpnEnvironment::Production => PRODUCTION_HOST,
            IpnEnvironment::Sandbox => SANDBOX_HOST,
        }
    }

    /// `http://` or `https://`.
    pub fn scheme_prefix(&self) -> &'static str {
        match self.scheme {
            IpnScheme::Http => HTTP_SCHEME,
            IpnScheme::Https => HTTPS_SCHEME,
        }
    }

    /// Full verification URI: scheme, host, then `/cgi-bin/webscr`.
    pub fn url(&self) -> String {
        format!("{}{}{}", self.scheme_prefix(), self.host(), VERIFICATION_PATH)
    }
}

impl From<&IpnConfig> for IpnEndpoint {
    fn from(config: &IpnConfig) -> Self {
        Self::from_flags(config.sandbox, config.ssl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flag_combinations() {
        let cases = [
            (false, false, "http://www.paypal.com/cgi-bin/webscr"),
            (false, true, "https://www.paypal.com/cgi-bin/webscr"),
            (true, false, "http://www.sandbox.paypal.com/cgi-bin/webscr"),
            (true, true, "https://www.sandbox.paypal.com/cgi-bin/webscr"),
        ];
        for (sandbox, ssl, expected) in cases {
            assert_eq!(
                IpnEndpoint::from_flags(sandbox, ssl).url(),
                expected,
                "sandbox={sandbox}, ssl={ssl}"
            );
        }
    }

    #[test]
    fn test_from_config() {
        let endpoint = IpnEndpoint::from(&IpnConfig::default().with_sandbox(true));
        assert_eq!(endpoint.environment, IpnEnvironment::Sandbox);
        assert_eq!(endpoint.scheme, IpnScheme::Https);
        assert_eq!(endpoint.host(), "www.sandbox.paypal.com");
        assert_eq!(endpoint.scheme_prefix(), "https://");
    }
}
