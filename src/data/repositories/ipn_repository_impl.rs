use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, trace};

use crate::{
    config::{IpnConfig, UnexpectedResponsePolicy},
    data::{
        datasources::paypal_ipn_datasource::{PaypalIpnDatasource, PaypalIpnDatasourceImpl},
        models::notify_validate_request_model::NotifyValidateRequestModel,
    },
    domain::{
        entities::{
            ipn_endpoint::IpnEndpoint, ipn_notification::IpnNotification, ipn_verdict::IpnVerdict,
        },
        repositories::ipn_repository::IpnRepository,
    },
    errors::IpnError,
};

pub struct IpnRepositoryImpl<D: PaypalIpnDatasource> {
    paypal_ipn_datasource: D,
    /// Replaces the PayPal host selected by the configuration.
    verification_url: Option<Url>,
}

#[async_trait]
impl<D: PaypalIpnDatasource> IpnRepository for IpnRepositoryImpl<D> {
    async fn verify(
        &self,
        body: &[u8],
        config: &IpnConfig,
    ) -> Result<(IpnNotification, IpnVerdict), IpnError> {
        let notification = IpnNotification::from_form_bytes(body);
        let request = NotifyValidateRequestModel::from_notification(&notification);
        let url = self.resolve_url(config)?;

        debug!(
            url = %url,
            fields = notification.len(),
            request_len = request.body().len(),
            "Posting IPN validation request."
        );
        let response = self
            .paypal_ipn_datasource
            .validate(&url, &request, config.timeout)
            .await?;
        let verdict = IpnVerdict::from_response_body(&response.body);
        debug!(
            status = response.status,
            verdict = verdict.label(),
            response_len = response.body.len(),
            "Received IPN validation response."
        );

        match verdict {
            IpnVerdict::Invalid => Err(IpnError::InvalidResponse {
                response: response.body,
            }),
            IpnVerdict::Unknown(_)
                if config.unexpected_response == UnexpectedResponsePolicy::Reject =>
            {
                Err(IpnError::UnexpectedResponse {
                    status: response.status,
                    response: response.body,
                })
            }
            verdict => Ok((notification, verdict)),
        }
    }
}

impl<D: PaypalIpnDatasource> IpnRepositoryImpl<D> {
    /// Routes validation requests through `datasource` to the PayPal host
    /// selected by each call's configuration.
    pub fn with_datasource(paypal_ipn_datasource: D) -> Self {
        Self {
            paypal_ipn_datasource,
            verification_url: None,
        }
    }

    fn resolve_url(&self, config: &IpnConfig) -> Result<Url, IpnError> {
        if let Some(url) = &self.verification_url {
            trace!(url = %url, "Using verification URL override.");
            return Ok(url.clone());
        }
        let url = IpnEndpoint::from(config).url();
        Url::parse(&url).map_err(|e| IpnError::invalid_verification_url(&url, &e))
    }
}

impl IpnRepositoryImpl<PaypalIpnDatasourceImpl> {
    pub fn new() -> Self {
        Self::with_datasource(PaypalIpnDatasourceImpl::new())
    }

    /// Sends every validation request to `url`, whatever host the
    /// configuration selects.
    pub fn with_verification_url(url: &str) -> Result<Self, IpnError> {
        Ok(Self {
            paypal_ipn_datasource: PaypalIpnDatasourceImpl::new(),
            verification_url: Some(
                Url::parse(url).map_err(|e| IpnError::invalid_verification_url(url, &e))?,
            ),
        })
    }
}

impl Default for IpnRepositoryImpl<PaypalIpnDatasourceImpl> {
    fn default() -> Self {
        Self::new()
    }
}
