pub mod api;
pub mod client;
pub mod config;
pub mod factory;
pub mod provider;
pub mod remote;

pub use client::ScopedClient;
pub use config::{MAX_PAGE_SIZE, TolgeeConfig};
pub use factory::TolgeeProviderFactory;
pub use provider::TolgeeTranslationProvider;
pub use remote::{NO_NAMESPACE, RemoteTranslation, RemoteTranslations};
