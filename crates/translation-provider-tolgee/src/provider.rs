use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use translation_provider::{
    CatalogueDumper, CatalogueLoader, DumpOptions, Locale, Messages, ProviderError,
    TranslationProvider, TranslatorBag,
};

use crate::api::{ImportAddFilesResult, SelectNamespaceRequest, TranslationsPage};
use crate::client::{ResponseRecord, ScopedClient, check_responses};
use crate::config::TolgeeConfig;
use crate::remote::RemoteTranslations;

/// Serialized files to upload, grouped namespace → locale → content.
type ImportBatch = BTreeMap<String, BTreeMap<Locale, String>>;

/// Pushes, pulls, and deletes translations of one Tolgee project.
pub struct TolgeeTranslationProvider {
    client: ScopedClient,
    loader: Arc<dyn CatalogueLoader>,
    dumper: Arc<dyn CatalogueDumper>,
    default_locale: String,
    label: String,
    page_size: u32,
}

impl TolgeeTranslationProvider {
    pub fn new(
        config: TolgeeConfig,
        client: reqwest::Client,
        loader: Arc<dyn CatalogueLoader>,
        dumper: Arc<dyn CatalogueDumper>,
    ) -> Self {
        Self {
            client: ScopedClient::new(client, config.project_url(), config.api_key.clone()),
            loader,
            dumper,
            label: config.label(),
            default_locale: config.default_locale,
            page_size: config.page_size,
        }
    }

    /// Project URL every request is resolved against.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn collect_imports(&self, bag: &TranslatorBag) -> Result<ImportBatch, ProviderError> {
        let options = DumpOptions {
            default_locale: Some(self.default_locale.clone()),
        };

        let mut imports = ImportBatch::new();

        for catalogue in bag.catalogues() {
            for (domain, messages) in catalogue.all_domains() {
                if messages.is_empty() {
                    continue;
                }

                let content = self.dumper.format_catalogue(catalogue, domain, &options)?;

                imports
                    .entry(domain.clone())
                    .or_default()
                    .insert(catalogue.locale().clone(), content);
            }
        }

        Ok(imports)
    }

    /// Drop whatever import is still pending. A missing import is fine.
    async fn delete_previous_import(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .send(self.client.request(Method::DELETE, "import"))
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Err(ProviderError::Remote {
            message: "Unable to clear the pending Tolgee import".into(),
            status: status.as_u16(),
            body: response.text().await.unwrap_or_else(|_| "unknown".into()),
        })
    }

    /// Upload one multipart request per namespace and assign a namespace to
    /// every file Tolgee left without one.
    ///
    /// Returns every response in the order it was received.
    async fn import_translations(
        &self,
        imports: &ImportBatch,
    ) -> Result<Vec<ResponseRecord>, ProviderError> {
        let mut responses = Vec::new();

        for (namespace, files) in imports {
            let mut form = Form::new();
            for (locale, content) in files {
                let part = Part::text(content.clone())
                    .file_name(format!("{locale}.{}", self.dumper.extension()))
                    .mime_str(self.dumper.content_type())
                    .map_err(|e| ProviderError::Dump(format!("invalid content type: {e}")))?;
                form = form.part("files", part);
            }

            tracing::debug!(namespace = %namespace, files = files.len(), "uploading import");

            let response = self
                .client
                .send(self.client.request(Method::POST, "import").multipart(form))
                .await?;
            let record = ResponseRecord::read(Method::POST, "import", response).await?;
            let status = record.status;

            if status != StatusCode::OK {
                responses.push(record);
                continue;
            }

            let result: ImportAddFilesResult = serde_json::from_str(&record.body)
                .map_err(|e| ProviderError::Parse(format!("invalid import response: {e}")))?;
            responses.push(record);

            for language in result.languages() {
                if language.namespace.is_some() {
                    continue;
                }

                let path = format!(
                    "import/result/files/{}/select-namespace",
                    language.import_file_id
                );

                tracing::debug!(namespace = %namespace, file = language.import_file_id, "selecting namespace");

                let response = self
                    .client
                    .send(
                        self.client
                            .request(Method::PUT, &path)
                            .json(&SelectNamespaceRequest { namespace }),
                    )
                    .await?;
                responses.push(ResponseRecord::read(Method::PUT, path, response).await?);
            }
        }

        Ok(responses)
    }

    /// Fetch every remote translation, following cursors until exhausted.
    async fn fetch_translations(&self) -> Result<RemoteTranslations, ProviderError> {
        let mut translations = RemoteTranslations::default();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .client
                .request(Method::GET, "translations")
                .query(&[("size", self.page_size)]);

            if let Some(cursor) = &cursor {
                request = request.query(&[("cursor", cursor)]);
            }

            let response = self.client.send(request).await?;

            if !response.status().is_success() {
                return Err(ProviderError::Remote {
                    message: "Unable to fetch translations from Tolgee".into(),
                    status: response.status().as_u16(),
                    body: response.text().await.unwrap_or_else(|_| "unknown".into()),
                });
            }

            let page: TranslationsPage = response
                .json()
                .await
                .map_err(|e| ProviderError::Parse(format!("invalid translations page: {e}")))?;

            let Some(embedded) = page.embedded else {
                break;
            };

            tracing::debug!(keys = embedded.keys.len(), "fetched translations page");
            translations.merge_keys(embedded.keys);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(translations)
    }
}

#[async_trait::async_trait]
impl TranslationProvider for TolgeeTranslationProvider {
    fn label(&self) -> &str {
        &self.label
    }

    async fn write(&self, bag: &TranslatorBag) -> Result<(), ProviderError> {
        let imports = self.collect_imports(bag)?;

        self.delete_previous_import().await?;
        let responses = self.import_translations(&imports).await?;

        check_responses(&responses, "Unable to import translations to Tolgee")
    }

    async fn read(
        &self,
        _domains: &[String],
        _locales: &[String],
    ) -> Result<TranslatorBag, ProviderError> {
        let translations = self.fetch_translations().await?;

        let mut bag = TranslatorBag::new();

        for (namespace, locales) in translations.namespaces() {
            for (locale, records) in locales {
                let messages: Messages = records
                    .iter()
                    .filter_map(|(key, record)| Some((key.clone(), record.text.clone()?)))
                    .collect();

                bag.add_catalogue(self.loader.load(messages, &Locale::new(locale), namespace));
            }
        }

        Ok(bag)
    }

    async fn delete(&self, bag: &TranslatorBag) -> Result<(), ProviderError> {
        let translations = self.fetch_translations().await?;

        let mut ids = Vec::new();

        for catalogue in bag.catalogues() {
            let locale = catalogue.locale().as_str();

            for (domain, messages) in catalogue.all_domains() {
                for key in messages.keys() {
                    let record = translations.lookup(domain, locale, key).ok_or_else(|| {
                        ProviderError::KeyNotFound {
                            domain: domain.clone(),
                            locale: locale.to_owned(),
                            key: key.clone(),
                        }
                    })?;
                    ids.push(record.id);
                }
            }
        }

        tracing::debug!(count = ids.len(), "deleting keys");

        let response = self
            .client
            .send(self.client.request(Method::DELETE, "keys").json(&ids))
            .await?;
        let record = ResponseRecord::read(Method::DELETE, "keys", response).await?;

        check_responses(&[record], "Unable to delete translation keys from Tolgee")
    }
}
