use crate::{constants::NOTIFY_VALIDATE_PREFIX, domain::entities::ipn_notification::IpnNotification};

/// Body echoed back to PayPal:
///
/// `cmd=_notify-validate&<field>=<value>&...`
///
/// https://developer.paypal.com/api/nvp-soap/ipn/IPNImplementation/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyValidateRequestModel {
    body: String,
}

impl NotifyValidateRequestModel {
    pub fn from_notification(notification: &IpnNotification) -> Self {
        let mut body = String::from(NOTIFY_VALIDATE_PREFIX);
        for (key, value) in notification.iter() {
            body.push('&');
            body.extend(form_urlencoded::byte_serialize(key));
            body.push('=');
            body.extend(form_urlencoded::byte_serialize(value));
        }
        Self { body }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
