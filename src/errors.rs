use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpnError {
    /// The verification endpoint could not be reached, the TLS handshake
    /// failed, the deadline expired, or the response body could not be read.
    #[error("Error calling out to PayPal IPN verification endpoint ({url}): {details}")]
    Transport { url: String, details: String },

    /// PayPal explicitly answered `INVALID`.
    #[error("PayPal rejected the notification: {response:?}")]
    InvalidResponse { response: String },

    /// PayPal answered with neither `VERIFIED` nor `INVALID`, and the verifier
    /// was configured to reject such responses.
    #[error("Unexpected response from PayPal IPN verification endpoint (status {status}): {response:?}")]
    UnexpectedResponse { status: u16, response: String },

    #[error("Invalid verification URL {url:?}: {details}")]
    InvalidVerificationUrl { url: String, details: String },

    #[error("Invalid IPN configuration: {0}")]
    Config(String),
}

impl IpnError {
    pub(crate) fn transport(url: &str, debug: &impl Debug) -> Self {
        Self::Transport {
            url: url.to_owned(),
            details: format!("{:?}", debug),
        }
    }

    pub(crate) fn invalid_verification_url(url: &str, debug: &impl Debug) -> Self {
        Self::InvalidVerificationUrl {
            url: url.to_owned(),
            details: format!("{:?}", debug),
        }
    }

    pub(crate) fn config(debug: &impl Debug) -> Self {
        Self::Config(format!("{:?}", debug))
    }
}
