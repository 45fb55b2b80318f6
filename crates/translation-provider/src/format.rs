//! Collaborators that turn catalogues into file content and back.

use crate::catalogue::{Locale, MessageCatalogue, Messages};
use crate::provider::ProviderError;

/// Options passed to a dumper.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Locale of the source language; formats that care about it may use it.
    pub default_locale: Option<String>,
}

/// Serializes one domain of a catalogue to file content.
pub trait CatalogueDumper: Send + Sync {
    fn format_catalogue(
        &self,
        catalogue: &MessageCatalogue,
        domain: &str,
        options: &DumpOptions,
    ) -> Result<String, ProviderError>;

    /// File extension of the produced content, without the dot.
    fn extension(&self) -> &str;

    fn content_type(&self) -> &str;
}

/// Builds a catalogue from a flat key → text map.
pub trait CatalogueLoader: Send + Sync {
    fn load(&self, resource: Messages, locale: &Locale, domain: &str) -> MessageCatalogue;
}

/// Dumps a domain as a flat, pretty-printed JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileDumper;

impl CatalogueDumper for JsonFileDumper {
    fn format_catalogue(
        &self,
        catalogue: &MessageCatalogue,
        domain: &str,
        _options: &DumpOptions,
    ) -> Result<String, ProviderError> {
        serde_json::to_string_pretty(&catalogue.all(domain))
            .map_err(|e| ProviderError::Dump(format!("failed to encode {domain}: {e}")))
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}

/// Loads an in-memory map as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayLoader;

impl CatalogueLoader for ArrayLoader {
    fn load(&self, resource: Messages, locale: &Locale, domain: &str) -> MessageCatalogue {
        let mut catalogue = MessageCatalogue::new(locale.clone());
        catalogue.add(resource, domain);
        catalogue
    }
}
