use std::rc::Rc;

use url::Url;

use crate::backend::{Backend, InertBackend, LiveBackend};

/// Value that ships in the default host page until the operator fills in
/// the real backend URL.
pub const URL_PLACEHOLDER: &str = "YOUR_BACKEND_URL";

/// Startup configuration read from the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
        }
    }

    /// The backend URL, if it is present, not the placeholder and a
    /// well-formed HTTP(S) URL.
    pub fn valid_url(&self) -> Option<Url> {
        let raw = self.url.as_deref()?.trim();
        if raw.is_empty() || raw == URL_PLACEHOLDER {
            return None;
        }
        let url = Url::parse(raw).ok()?;
        match url.scheme() {
            "http" | "https" => Some(url),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.valid_url().is_some() && self.anon_key().is_some()
    }

    fn anon_key(&self) -> Option<&str> {
        self.anon_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Selects the backend once at startup.
///
/// An unusable configuration yields the inert stand-in; the caller is
/// expected to warn the user once in that case.
pub fn connect(config: &BackendConfig) -> Rc<dyn Backend> {
    match (config.valid_url(), config.anon_key()) {
        (Some(url), Some(anon_key)) => Rc::new(LiveBackend::new(&url, anon_key.to_owned())),
        _ => {
            log::error!("The backend is not configured, falling back to the inert stub");
            Rc::new(InertBackend)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    use crate::Error;

    #[test]
    fn reject_unusable_urls() {
        for url in [
            URL_PLACEHOLDER,
            "",
            "   ",
            "not a url",
            "ftp://db.example.com",
            "db.example.com",
        ] {
            let config = BackendConfig::new(url, "anon");
            assert_eq!(None, config.valid_url(), "accepted: {url:?}");
            assert!(!config.is_configured());
        }
        assert!(!BackendConfig::default().is_configured());
    }

    #[test]
    fn accept_well_formed_http_urls() {
        assert!(BackendConfig::new("https://db.example.com", "anon").is_configured());
        assert!(BackendConfig::new("http://localhost:54321", "anon").is_configured());
    }

    #[test]
    fn missing_anon_key_is_unconfigured() {
        let config = BackendConfig {
            url: Some("https://db.example.com".into()),
            anon_key: None,
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn unconfigured_connection_is_inert() {
        let backend = connect(&BackendConfig::new(URL_PLACEHOLDER, "anon"));
        assert_eq!(Ok(Vec::new()), block_on(backend.select_pins()));
        assert_eq!(Err(Error::NotConfigured), block_on(backend.delete_pin("p1")));
    }
}
