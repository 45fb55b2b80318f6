use std::collections::BTreeMap;
use std::fmt;

/// The domain used when none is given.
pub const DEFAULT_DOMAIN: &str = "messages";

/// Flat key → text mapping of one domain.
pub type Messages = BTreeMap<String, String>;

/// Locale identifier such as `en` or `pt_BR`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// All translations of a single locale, grouped by domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalogue {
    locale: Locale,
    domains: BTreeMap<String, Messages>,
}

impl MessageCatalogue {
    pub fn new(locale: impl Into<Locale>) -> Self {
        Self {
            locale: locale.into(),
            domains: BTreeMap::new(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Domain names, including domains that currently hold no messages.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Messages of one domain. Unknown domains yield an empty map.
    pub fn all(&self, domain: &str) -> Messages {
        self.domains.get(domain).cloned().unwrap_or_default()
    }

    pub fn all_domains(&self) -> &BTreeMap<String, Messages> {
        &self.domains
    }

    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>, domain: &str) {
        self.domains
            .entry(domain.to_owned())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Add messages to a domain, overwriting existing keys.
    /// The domain is registered even when `messages` is empty.
    pub fn add(&mut self, messages: Messages, domain: &str) {
        self.domains
            .entry(domain.to_owned())
            .or_default()
            .extend(messages);
    }

    pub fn has(&self, key: &str, domain: &str) -> bool {
        self.get(key, domain).is_some()
    }

    pub fn get(&self, key: &str, domain: &str) -> Option<&str> {
        self.domains
            .get(domain)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// Merge another catalogue's messages into this one. Later wins on conflict.
    pub fn merge(&mut self, other: MessageCatalogue) {
        for (domain, messages) in other.domains {
            self.add(messages, &domain);
        }
    }

    /// True when no domain holds any message.
    pub fn is_empty(&self) -> bool {
        self.domains.values().all(BTreeMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_by_domain() {
        let mut catalogue = MessageCatalogue::new("en");
        catalogue.set("greeting", "Hello", "messages");

        assert_eq!(catalogue.get("greeting", "messages"), Some("Hello"));
        assert!(!catalogue.has("greeting", "validators"));
        assert_eq!(catalogue.locale().as_str(), "en");
    }

    #[test]
    fn empty_domain_is_listed_but_empty() {
        let mut catalogue = MessageCatalogue::new("en");
        catalogue.add(Messages::new(), "validators");

        assert_eq!(catalogue.domains().collect::<Vec<_>>(), vec!["validators"]);
        assert!(catalogue.all("validators").is_empty());
        assert!(catalogue.is_empty());
    }

    #[test]
    fn all_returns_empty_for_unknown_domain() {
        let catalogue = MessageCatalogue::new("en");
        assert!(catalogue.all("missing").is_empty());
    }

    #[test]
    fn merge_overwrites_conflicting_keys() {
        let mut first = MessageCatalogue::new("en");
        first.set("a", "one", "messages");
        first.set("b", "two", "messages");

        let mut second = MessageCatalogue::new("en");
        second.set("b", "deux", "messages");
        second.set("c", "three", "admin");

        first.merge(second);

        assert_eq!(first.get("a", "messages"), Some("one"));
        assert_eq!(first.get("b", "messages"), Some("deux"));
        assert_eq!(first.get("c", "admin"), Some("three"));
    }
}
