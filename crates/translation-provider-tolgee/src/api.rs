use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One page of `GET /translations?size=..&cursor=..`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsPage {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedKeys>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedKeys {
    #[serde(default)]
    pub keys: Vec<KeyWithTranslations>,
}

/// A key and its translations, indexed by locale.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyWithTranslations {
    pub key_namespace: Option<String>,
    pub key_name: String,
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationView {
    pub id: i64,
    pub text: Option<String>,
}

/// Response of `POST /import`.
#[derive(Debug, Deserialize)]
pub struct ImportAddFilesResult {
    pub result: Option<ImportLanguagePage>,
}

impl ImportAddFilesResult {
    pub fn languages(&self) -> &[ImportLanguage] {
        self.result
            .as_ref()
            .and_then(|r| r.embedded.as_ref())
            .map(|e| e.languages.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportLanguagePage {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedLanguages>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedLanguages {
    #[serde(default)]
    pub languages: Vec<ImportLanguage>,
}

/// A file Tolgee accepted into the pending import.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLanguage {
    pub namespace: Option<String>,
    pub import_file_id: i64,
}

/// Body of `PUT /import/result/files/{id}/select-namespace`.
#[derive(Debug, Serialize)]
pub struct SelectNamespaceRequest<'a> {
    pub namespace: &'a str,
}
