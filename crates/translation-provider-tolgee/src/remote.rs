use std::collections::BTreeMap;

use crate::api::KeyWithTranslations;

/// Domain of keys that have no namespace in Tolgee.
pub const NO_NAMESPACE: &str = "";

/// A translation as Tolgee stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTranslation {
    pub id: i64,
    pub text: Option<String>,
}

type Keys = BTreeMap<String, RemoteTranslation>;
type Locales = BTreeMap<String, Keys>;

/// Snapshot of every remote translation: namespace → locale → key → record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteTranslations {
    namespaces: BTreeMap<String, Locales>,
}

impl RemoteTranslations {
    /// Insert one record, replacing any record already at the same leaf.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        locale: impl Into<String>,
        key: impl Into<String>,
        translation: RemoteTranslation,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .entry(locale.into())
            .or_default()
            .insert(key.into(), translation);
    }

    /// Merge one page of keys. Keys without a namespace land in [`NO_NAMESPACE`].
    pub fn merge_keys(&mut self, keys: Vec<KeyWithTranslations>) {
        for key in keys {
            let namespace = key
                .key_namespace
                .unwrap_or_else(|| NO_NAMESPACE.to_owned());

            for (locale, view) in key.translations {
                self.insert(
                    namespace.clone(),
                    locale,
                    key.key_name.clone(),
                    RemoteTranslation {
                        id: view.id,
                        text: view.text,
                    },
                );
            }
        }
    }

    pub fn lookup(&self, namespace: &str, locale: &str, key: &str) -> Option<&RemoteTranslation> {
        self.namespaces.get(namespace)?.get(locale)?.get(key)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &Locales)> {
        self.namespaces.iter().map(|(ns, locales)| (ns.as_str(), locales))
    }

    /// Number of (namespace, locale, key) records.
    pub fn len(&self) -> usize {
        self.namespaces
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
