use std::time::Duration;

use crate::{
    config::IpnConfig,
    data::{
        datasources::paypal_ipn_datasource::PaypalIpnDatasourceImpl,
        repositories::ipn_repository_impl::IpnRepositoryImpl,
    },
    domain::{
        entities::{ipn_notification::IpnNotification, ipn_verdict::IpnVerdict},
        repositories::ipn_repository::IpnRepository,
    },
    errors::IpnError,
};

/// [`IpnUtil`] wired to PayPal over reqwest.
pub type PaypalIpnUtil = IpnUtil<IpnRepositoryImpl<PaypalIpnDatasourceImpl>>;

/// Verifies PayPal Instant Payment Notifications.
///
/// Hand [`IpnUtil::verify`] the raw POST body your IPN listener received.
/// Each call performs exactly one outbound request and retries nothing.
/// Dropping the returned future aborts the request.
///
/// ```no_run
/// # async fn handler(body: &[u8]) -> Result<(), paypal_ipn::errors::IpnError> {
/// use paypal_ipn::{config::IpnConfig, util::PaypalIpnUtil};
///
/// let verifier = PaypalIpnUtil::new(IpnConfig::default().with_sandbox(true));
/// verifier.verify(body).await?;
/// # Ok(())
/// # }
/// ```
pub struct IpnUtil<R: IpnRepository> {
    ipn_repository: R,
    config: IpnConfig,
}

impl<R: IpnRepository> IpnUtil<R> {
    pub fn with_repository(ipn_repository: R, config: IpnConfig) -> Self {
        Self {
            ipn_repository,
            config,
        }
    }

    pub fn config(&self) -> &IpnConfig {
        &self.config
    }

    /// Returns [`IpnVerdict::Verified`], or [`IpnVerdict::Unknown`] when
    /// unexpected responses are accepted.
    pub async fn verify(&self, body: &[u8]) -> Result<IpnVerdict, IpnError> {
        self.verify_with_config(body, &self.config).await
    }

    /// Like [`IpnUtil::verify`], also returning the decoded fields.
    pub async fn verify_notification(
        &self,
        body: &[u8],
    ) -> Result<(IpnNotification, IpnVerdict), IpnError> {
        self.ipn_repository.verify(body, &self.config).await
    }

    /// Verifies against `config` instead of the verifier's own configuration.
    pub async fn verify_with_config(
        &self,
        body: &[u8],
        config: &IpnConfig,
    ) -> Result<IpnVerdict, IpnError> {
        let (_, verdict) = self.ipn_repository.verify(body, config).await?;
        Ok(verdict)
    }

    /// Aborts with [`IpnError::Transport`] if the exchange is not complete
    /// within `deadline`.
    pub async fn verify_with_deadline(
        &self,
        body: &[u8],
        deadline: Duration,
    ) -> Result<IpnVerdict, IpnError> {
        let config = self.config.clone().with_timeout(deadline);
        self.verify_with_config(body, &config).await
    }
}

impl PaypalIpnUtil {
    pub fn new(config: IpnConfig) -> Self {
        Self::with_repository(IpnRepositoryImpl::new(), config)
    }

    pub fn from_env() -> Result<Self, IpnError> {
        Ok(Self::new(IpnConfig::from_env()?))
    }

    /// Sends validation requests to `url` instead of the PayPal host selected
    /// by `config`. Useful for local stubs and outbound proxies.
    pub fn with_verification_url(config: IpnConfig, url: &str) -> Result<Self, IpnError> {
        Ok(Self::with_repository(
            IpnRepositoryImpl::with_verification_url(url)?,
            config,
        ))
    }
}
