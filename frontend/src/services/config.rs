use anyhow::{Context, Result};
use log::LevelFilter;
use shared::AccountFormConfig;
use web_sys::Element;

/// Element the app mounts into and reads its configuration from
pub const ROOT_ELEMENT_ID: &str = "root";

const ACCOUNT_EMAIL_ATTRIBUTE: &str = "data-account-email";
const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

/// Configuration provided by the host page
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub form: AccountFormConfig,
    pub log_level: LevelFilter,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            form: AccountFormConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl HostConfig {
    /// Read the host page configuration, falling back to defaults
    pub fn load() -> Self {
        match mount_element() {
            Ok(element) => Self::from_attributes(|name| element.get_attribute(name)),
            Err(e) => {
                gloo::console::warn!(format!("Using default configuration: {:#}", e));
                Self::default()
            }
        }
    }

    /// Build the configuration from `data-*` attributes looked up through `attribute`
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(email) = attribute(ACCOUNT_EMAIL_ATTRIBUTE) {
            let email = email.trim();
            if !email.is_empty() {
                config.form.account_email = email.to_string();
            }
        }

        if let Some(level) = attribute(LOG_LEVEL_ATTRIBUTE) {
            match parse_log_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => gloo::console::warn!(format!("{:#}", e)),
            }
        }

        config
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid {} value {:?}", LOG_LEVEL_ATTRIBUTE, value))
}

/// `#root` if present, otherwise `<body>`
pub fn mount_element() -> Result<Element> {
    let document = web_sys::window()
        .context("No window available")?
        .document()
        .context("Window has no document")?;

    document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .or_else(|| document.body().map(Element::from))
        .context("Neither #root nor <body> found")
}
