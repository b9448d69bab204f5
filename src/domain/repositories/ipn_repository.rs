use async_trait::async_trait;

use crate::{
    config::IpnConfig,
    domain::entities::{ipn_notification::IpnNotification, ipn_verdict::IpnVerdict},
    errors::IpnError,
};

#[async_trait]
pub trait IpnRepository: Send + Sync {
    /// Decodes `body`, echoes it back to PayPal and interprets the answer
    /// according to `config`.
    ///
    /// Never returns [`IpnVerdict::Invalid`] as `Ok`; an explicit `INVALID`
    /// is always [`IpnError::InvalidResponse`].
    async fn verify(
        &self,
        body: &[u8],
        config: &IpnConfig,
    ) -> Result<(IpnNotification, IpnVerdict), IpnError>;
}
