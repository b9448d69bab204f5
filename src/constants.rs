pub(crate) const PRODUCTION_HOST: &str = "www.paypal.com";
pub(crate) const SANDBOX_HOST: &str = "www.sandbox.paypal.com";
pub(crate) const VERIFICATION_PATH: &str = "/cgi-bin/webscr";

pub(crate) const HTTP_SCHEME: &str = "http://";
pub(crate) const HTTPS_SCHEME: &str = "https://";

/// Prepended to every echoed notification.
pub(crate) const NOTIFY_VALIDATE_PREFIX: &str = "cmd=_notify-validate";

pub(crate) const VERIFIED_RESPONSE: &str = "VERIFIED";
pub(crate) const INVALID_RESPONSE: &str = "INVALID";

pub(crate) const ENV_PREFIX: &str = "PAYPAL_IPN_";
