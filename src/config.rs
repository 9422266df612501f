use log::Level;

/// Scroll offset past which the nav pill is drawn compact.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;
/// Below this offset an unmatched scroll position falls back to `home`.
pub const HOME_FALLBACK_PX: f64 = 100.0;
/// Look-ahead added to the scroll offset before matching sections, roughly the
/// fixed nav height.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How long the "Message Sent!" card stays up before the form comes back.
pub const SUCCESS_RESET_MS: u32 = 5_000;

const DEFAULT_RELAY_URL: &str = "https://formsubmit.co/ajax/jitesh.borse007@gmail.com";

pub const RELAY_SUBJECT: &str = "New Portfolio Contact Submission";
pub const RELAY_TEMPLATE: &str = "table";
pub const RELAY_CAPTCHA: &str = "false";

pub const RESUME_URL: &str = "https://pdflink.to/653a8366/";

pub fn relay_endpoint() -> &'static str {
    option_env!("PORTFOLIO_RELAY_URL").unwrap_or(DEFAULT_RELAY_URL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where the contact form goes and the hidden control fields the relay expects.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub subject: String,
    pub template: String,
    pub captcha: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: relay_endpoint().to_string(),
            subject: RELAY_SUBJECT.to_string(),
            template: RELAY_TEMPLATE.to_string(),
            captcha: RELAY_CAPTCHA.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_relay_config_uses_static_hidden_fields() {
        let config = RelayConfig::default();
        assert_eq!(config.subject, "New Portfolio Contact Submission");
        assert_eq!(config.template, "table");
        assert_eq!(config.captcha, "false");
        assert!(!config.endpoint.is_empty());
    }
}
