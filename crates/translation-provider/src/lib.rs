pub mod bag;
pub mod catalogue;
pub mod config;
pub mod dsn;
pub mod format;
pub mod provider;

pub use bag::TranslatorBag;
pub use catalogue::{DEFAULT_DOMAIN, Locale, MessageCatalogue, Messages};
pub use config::{ConfigError, ProviderEntry, ProvidersConfig, config_path, load_config};
pub use dsn::Dsn;
pub use format::{ArrayLoader, CatalogueDumper, CatalogueLoader, DumpOptions, JsonFileDumper};
pub use provider::{ProviderError, ProviderFactory, TranslationProvider};
