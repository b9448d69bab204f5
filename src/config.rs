use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::{constants::ENV_PREFIX, errors::IpnError};

/// How to treat a validation response that is neither `VERIFIED` nor
/// `INVALID`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnexpectedResponsePolicy {
    /// Return the raw body as [`IpnVerdict::Unknown`]. Matches the historical
    /// behavior, where only an explicit `INVALID` was rejected.
    ///
    /// [`IpnVerdict::Unknown`]: crate::domain::entities::ipn_verdict::IpnVerdict::Unknown
    #[default]
    Accept,
    /// Fail with [`IpnError::UnexpectedResponse`].
    Reject,
}

/// Immutable verifier configuration.
///
/// Can be built in code:
///
/// ```
/// use paypal_ipn::config::IpnConfig;
///
/// let config = IpnConfig::default().with_sandbox(true).with_ssl(true);
/// assert!(config.sandbox);
/// ```
///
/// or loaded from `PAYPAL_IPN_*` environment variables with
/// [`IpnConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IpnConfig {
    pub sandbox: bool,
    pub ssl: bool,
    pub unexpected_response: UnexpectedResponsePolicy,
    #[serde(rename = "timeout_secs", deserialize_with = "deserialize_timeout_secs")]
    pub timeout: Option<Duration>,
}

impl Default for IpnConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            ssl: true,
            unexpected_response: UnexpectedResponsePolicy::default(),
            timeout: None,
        }
    }
}

impl IpnConfig {
    pub fn new(sandbox: bool, ssl: bool) -> Self {
        Self {
            sandbox,
            ssl,
            ..Self::default()
        }
    }

    /// Reads `PAYPAL_IPN_SANDBOX`, `PAYPAL_IPN_SSL`,
    /// `PAYPAL_IPN_UNEXPECTED_RESPONSE` (`accept` or `reject`) and
    /// `PAYPAL_IPN_TIMEOUT_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, IpnError> {
        Self::from_prefixed_env(ENV_PREFIX)
    }

    pub(crate) fn from_prefixed_env(prefix: &str) -> Result<Self, IpnError> {
        envy::prefixed(prefix)
            .from_env::<Self>()
            .map_err(|e| IpnError::config(&e))
    }

    pub fn with_sandbox(self, sandbox: bool) -> Self {
        Self { sandbox, ..self }
    }

    pub fn with_ssl(self, ssl: bool) -> Self {
        Self { ssl, ..self }
    }

    pub fn with_unexpected_response(self, unexpected_response: UnexpectedResponsePolicy) -> Self {
        Self {
            unexpected_response,
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}
