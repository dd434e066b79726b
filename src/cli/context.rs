use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use ventureflow_config::{Config, ConfigManager};
use ventureflow_core::WizardStore;
use ventureflow_domain::Catalog;
use ventureflow_storage_json::JsonStatePersistence;

use crate::api::{ApiClient, CatalogApi, RequestScope};
use crate::cli::{output, prompts};
use crate::errors::{AppError, CliError};
use crate::utils;

/// Everything a command needs: configuration, the hydrated wizard store and
/// the backend client when one is configured.
pub struct AppContext {
    pub(crate) base_dir: PathBuf,
    pub(crate) config: Config,
    pub(crate) store: WizardStore,
    pub(crate) state_path: PathBuf,
    pub(crate) api: Option<ApiClient>,
    runtime: tokio::runtime::Runtime,
}

impl AppContext {
    /// Builds the context from `VENTUREFLOW_HOME` (or the platform default).
    pub fn load() -> Result<Self, AppError> {
        Self::with_base_dir(utils::resolve_base_dir())
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, AppError> {
        let mut config = ConfigManager::with_base_dir(&base_dir)?.load()?;
        if let Some(url) = utils::api_url_override() {
            config.api_base_url = Some(url);
            config.validate()?;
        }

        let state_path = config.resolve_state_file(&base_dir);
        let persistence = JsonStatePersistence::with_path(state_path.clone())?;
        let store = WizardStore::hydrate(Box::new(persistence));

        let api = config
            .api_base_url
            .as_deref()
            .map(|url| ApiClient::new(url, Duration::from_secs(config.request_timeout_secs)))
            .transpose()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        debug!(base = %base_dir.display(), online = api.is_some(), "application context ready");
        Ok(Self {
            base_dir,
            config,
            store,
            state_path,
            api,
            runtime,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &WizardStore {
        &self.store
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Backend catalog when configured, otherwise the built-in one. A failed
    /// fetch offers a retry and falls back to the built-in catalog when declined.
    pub fn load_catalog(&self) -> Result<Catalog, CliError> {
        let Some(client) = self.api.as_ref() else {
            debug!("no backend configured; using built-in catalog");
            return Ok(Catalog::builtin());
        };

        loop {
            let scope = RequestScope::new();
            match self.block_on(CatalogApi::new(client).fetch_categories(&scope)) {
                Ok(catalog) => return Ok(catalog),
                Err(err) => {
                    output::error(format!("Could not load categories: {err}"));
                    if !prompts::confirm("Retry loading categories?", true)? {
                        output::warning("Using the built-in catalog.");
                        return Ok(Catalog::builtin());
                    }
                }
            }
        }
    }
}
