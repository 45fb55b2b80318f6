/// Largest page Tolgee serves from `GET /translations`.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Connection settings for one Tolgee project.
#[derive(Debug, Clone)]
pub struct TolgeeConfig {
    /// `host[:port]` of the Tolgee server.
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    /// Source locale passed to the dumper.
    pub default_locale: String,
    /// Replaces `https://{endpoint}` when set.
    pub api_base_url: Option<String>,
    pub page_size: u32,
}

impl TolgeeConfig {
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            default_locale: "en".into(),
            api_base_url: None,
            page_size: MAX_PAGE_SIZE,
        }
    }

    fn api_base(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}", self.endpoint))
    }

    /// `{api_base}/v2/projects/{project_id}`
    pub fn project_url(&self) -> String {
        format!(
            "{}/v2/projects/{}",
            self.api_base().trim_end_matches('/'),
            self.project_id
        )
    }

    /// `tolgee://{endpoint}`
    pub fn label(&self) -> String {
        format!("tolgee://{}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_url_uses_https_endpoint() {
        let config = TolgeeConfig::new("app.tolgee.io", "42", "key");
        assert_eq!(config.project_url(), "https://app.tolgee.io/v2/projects/42");
        assert_eq!(config.label(), "tolgee://app.tolgee.io");
        assert_eq!(config.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn api_base_url_overrides_endpoint() {
        let mut config = TolgeeConfig::new("app.tolgee.io", "42", "key");
        config.api_base_url = Some("http://127.0.0.1:9000/".into());
        assert_eq!(config.project_url(), "http://127.0.0.1:9000/v2/projects/42");
        assert_eq!(config.label(), "tolgee://app.tolgee.io");
    }
}
