use crate::constants::{INVALID_RESPONSE, VERIFIED_RESPONSE};

/// PayPal's answer to a `cmd=_notify-validate` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpnVerdict {
    /// The body was exactly `VERIFIED`.
    Verified,
    /// The body was exactly `INVALID`.
    Invalid,
    /// Anything else, including an empty body. Holds the raw body.
    Unknown(String),
}

impl IpnVerdict {
    /// Classifies a response body by exact comparison; no trimming or case
    /// folding is applied.
    pub fn from_response_body(body: &str) -> Self {
        match body {
            VERIFIED_RESPONSE => IpnVerdict::Verified,
            INVALID_RESPONSE => IpnVerdict::Invalid,
            other => IpnVerdict::Unknown(other.to_owned()),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, IpnVerdict::Verified)
    }

    /// Variant name without the raw body, for logs.
    pub fn label(&self) -> &'static str {
        match self {
            IpnVerdict::Verified => "verified",
            IpnVerdict::Invalid => "invalid",
            IpnVerdict::Unknown(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_exact() {
        assert_eq!(IpnVerdict::from_response_body("VERIFIED"), IpnVerdict::Verified);
        assert_eq!(IpnVerdict::from_response_body("INVALID"), IpnVerdict::Invalid);
        assert_eq!(
            IpnVerdict::from_response_body("INVALID\n"),
            IpnVerdict::Unknown("INVALID\n".to_owned())
        );
        assert_eq!(
            IpnVerdict::from_response_body("verified"),
            IpnVerdict::Unknown("verified".to_owned())
        );
        assert_eq!(
            IpnVerdict::from_response_body(""),
            IpnVerdict::Unknown(String::new())
        );
    }

    #[test]
    fn test_is_verified() {
        assert!(IpnVerdict::Verified.is_verified());
        assert!(!IpnVerdict::Unknown("VERIFIED ".to_owned()).is_verified());
    }

    #[test]
    fn test_label_omits_raw_body() {
        assert_eq!(IpnVerdict::Verified.label(), "verified");
        assert_eq!(IpnVerdict::Invalid.label(), "invalid");
        assert_eq!(
            IpnVerdict::Unknown("payer=someone@example.com".to_owned()).label(),
            "unknown"
        );
    }
}
