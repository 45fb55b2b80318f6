use std::collections::BTreeMap;

use crate::catalogue::{Locale, MessageCatalogue};

/// A collection of catalogues, at most one per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorBag {
    catalogues: BTreeMap<Locale, MessageCatalogue>,
}

impl TranslatorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalogue, merging it into an existing one of the same locale.
    pub fn add_catalogue(&mut self, catalogue: MessageCatalogue) {
        match self.catalogues.get_mut(catalogue.locale()) {
            Some(existing) => existing.merge(catalogue),
            None => {
                self.catalogues.insert(catalogue.locale().clone(), catalogue);
            }
        }
    }

    pub fn catalogues(&self) -> impl Iterator<Item = &MessageCatalogue> {
        self.catalogues.values()
    }

    pub fn catalogue(&self, locale: &str) -> Option<&MessageCatalogue> {
        self.catalogues.get(&Locale::new(locale))
    }

    pub fn len(&self) -> usize {
        self.catalogues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogues.is_empty()
    }
}

impl FromIterator<MessageCatalogue> for TranslatorBag {
    fn from_iter<I: IntoIterator<Item = MessageCatalogue>>(iter: I) -> Self {
        let mut bag = Self::new();
        for catalogue in iter {
            bag.add_catalogue(catalogue);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_of_same_locale_are_merged() {
        let mut en_messages = MessageCatalogue::new("en");
        en_messages.set("greeting", "Hello", "messages");

        let mut en_admin = MessageCatalogue::new("en");
        en_admin.set("title", "Dashboard", "admin");

        let mut fr = MessageCatalogue::new("fr");
        fr.set("greeting", "Bonjour", "messages");

        let bag: TranslatorBag = [en_messages, en_admin, fr].into_iter().collect();

        assert_eq!(bag.len(), 2);
        let en = bag.catalogue("en").unwrap();
        assert_eq!(en.get("greeting", "messages"), Some("Hello"));
        assert_eq!(en.get("title", "admin"), Some("Dashboard"));
        assert_eq!(
            bag.catalogue("fr").unwrap().get("greeting", "messages"),
            Some("Bonjour")
        );
    }

    #[test]
    fn new_bag_is_empty() {
        let bag = TranslatorBag::new();
        assert!(bag.is_empty());
        assert!(bag.catalogue("en").is_none());
    }
}
