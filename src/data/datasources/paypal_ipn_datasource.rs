use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{CONNECTION, CONTENT_TYPE},
    Url,
};

use crate::{
    data::models::{
        notify_validate_request_model::NotifyValidateRequestModel,
        validation_response_model::ValidationResponseModel,
    },
    errors::IpnError,
};

#[async_trait]
pub trait PaypalIpnDatasource: Send + Sync {
    /// IPN listener verification round-trip:
    /// https://developer.paypal.com/api/nvp-soap/ipn/IPNImplementation/
    ///
    /// url:
    ///   Full verification URI, e.g. https://www.paypal.com/cgi-bin/webscr.
    /// request:
    ///   The notification echoed back with the `cmd=_notify-validate` prefix.
    /// timeout:
    ///   Deadline for the whole exchange, from connect until the body is read.
    async fn validate(
        &self,
        url: &Url,
        request: &NotifyValidateRequestModel,
        timeout: Option<Duration>,
    ) -> Result<ValidationResponseModel, IpnError>;
}

pub struct PaypalIpnDatasourceImpl;

#[async_trait]
impl PaypalIpnDatasource for PaypalIpnDatasourceImpl {
    async fn validate(
        &self,
        url: &Url,
        request: &NotifyValidateRequestModel,
        timeout: Option<Duration>,
    ) -> Result<ValidationResponseModel, IpnError> {
        // One-shot connection: HTTP/1.1, nothing kept in the pool. Certificate
        // and hostname verification stay at the rustls defaults.
        let client = reqwest::Client::builder()
            .http1_only()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| IpnError::transport(url.as_str(), &e))?;

        let mut builder = client
            .post(url.clone())
            .header(CONNECTION, "close")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.body().to_owned());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| IpnError::transport(url.as_str(), &e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| IpnError::transport(url.as_str(), &e))?;

        Ok(ValidationResponseModel { status, body })
    }
}

impl PaypalIpnDatasourceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PaypalIpnDatasourceImpl {
    fn default() -> Self {
        Self::new()
    }
}
