use crate::error::{Error, Result};

/// Mailgun credentials. Only the `send` path needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailCredentials<'a> {
    pub api_key: &'a str,
    pub domain: &'a str,
}

impl MailConfig {
    pub fn new(api_key: Option<String>, domain: Option<String>) -> Self {
        MailConfig { api_key, domain }
    }

    pub fn credentials(&self) -> Result<MailCredentials<'_>> {
        match (present(&self.api_key), present(&self.domain)) {
            (Some(api_key), Some(domain)) => Ok(MailCredentials { api_key, domain }),
            _ => Err(Error::Configuration),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_values_required() {
        let only_key = MailConfig::new(Some("key".into()), None);
        assert!(matches!(only_key.credentials(), Err(Error::Configuration)));
        let empty_domain = MailConfig::new(Some("key".into()), Some("  ".into()));
        assert!(matches!(empty_domain.credentials(), Err(Error::Configuration)));
        let empty_key = MailConfig::new(Some(String::new()), Some("mg.example.com".into()));
        assert!(matches!(empty_key.credentials(), Err(Error::Configuration)));
    }

    #[test]
    fn credentials_when_set() {
        let config = MailConfig::new(Some("key".into()), Some("mg.example.com".into()));
        assert_eq!(
            config.credentials().unwrap(),
            MailCredentials {
                api_key: "key",
                domain: "mg.example.com"
            }
        );
    }
}
