//! Default values for the add-on's configuration options.

use serde::Serialize;

/// An option key and the value it gets when the key has never been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigDefault {
    pub key: &'static str,
    pub value: &'static str,
}

impl ConfigDefault {
    const fn empty(key: &'static str) -> Self {
        Self { key, value: "" }
    }
}

pub static CONFIG_DEFAULTS: [ConfigDefault; 8] = [
    ConfigDefault::empty("lms_auth_social_login_google"),
    ConfigDefault::empty("lms_auth_social_login_facebook"),
    ConfigDefault::empty("lms_auth_social_login_apple"),
    ConfigDefault::empty("lms_auth_openai_api_key"),
    ConfigDefault::empty("lms_auth_stripe_public_key"),
    ConfigDefault::empty("lms_auth_stripe_secret_key"),
    ConfigDefault::empty("lms_auth_paypal_client_id"),
    ConfigDefault::empty("lms_auth_paypal_client_secret"),
];
