use std::sync::Arc;

use crate::bag::TranslatorBag;
use crate::dsn::Dsn;

/// Errors that can occur when talking to a translation provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {status}): {body}")]
    Remote {
        message: String,
        status: u16,
        body: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("key \"{key}\" of domain \"{domain}\" and locale \"{locale}\" does not exist remotely")]
    KeyNotFound {
        domain: String,
        locale: String,
        key: String,
    },

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("incomplete DSN: {0}")]
    IncompleteDsn(String),

    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    #[error("dump error: {0}")]
    Dump(String),
}

impl ProviderError {
    /// HTTP status carried by a remote error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A remote translation-management service.
///
/// Providers push, pull, and delete translations. Every call is independent;
/// implementations hold no state between calls beyond their configuration.
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Human-readable label identifying this provider, e.g. `tolgee://host`.
    fn label(&self) -> &str;

    /// Push every non-empty domain of every catalogue in `bag`.
    async fn write(&self, bag: &TranslatorBag) -> Result<(), ProviderError>;

    /// Pull translations. `domains` and `locales` describe what the caller
    /// wants; a provider may return more and leave filtering to the caller.
    async fn read(&self, domains: &[String], locales: &[String])
    -> Result<TranslatorBag, ProviderError>;

    /// Delete every key present in `bag` from the remote service.
    async fn delete(&self, bag: &TranslatorBag) -> Result<(), ProviderError>;
}

#[async_trait::async_trait]
impl<T: TranslationProvider + ?Sized> TranslationProvider for Arc<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn write(&self, bag: &TranslatorBag) -> Result<(), ProviderError> {
        (**self).write(bag).await
    }

    async fn read(
        &self,
        domains: &[String],
        locales: &[String],
    ) -> Result<TranslatorBag, ProviderError> {
        (**self).read(domains, locales).await
    }

    async fn delete(&self, bag: &TranslatorBag) -> Result<(), ProviderError> {
        (**self).delete(bag).await
    }
}

/// Builds providers from connection descriptors.
pub trait ProviderFactory {
    type Provider: TranslationProvider;

    /// DSN schemes this factory understands.
    fn supported_schemes(&self) -> &[&str];

    fn supports(&self, dsn: &Dsn) -> bool {
        self.supported_schemes().contains(&dsn.scheme())
    }

    /// Construct a provider. Must not perform network I/O.
    fn create(&self, dsn: &Dsn) -> Result<Self::Provider, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_exposes_status() {
        let err = ProviderError::Remote {
            message: "Unable to delete".into(),
            status: 503,
            body: "down".into(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Unable to delete (HTTP 503): down");
    }

    #[test]
    fn key_not_found_message_names_the_key() {
        let err = ProviderError::KeyNotFound {
            domain: "messages".into(),
            locale: "en".into(),
            key: "greeting".into(),
        };
        assert!(err.to_string().contains("\"greeting\""));
        assert_eq!(err.status(), None);
    }
}
