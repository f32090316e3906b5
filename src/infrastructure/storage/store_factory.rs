use std::path::PathBuf;
use std::sync::Arc;

use object_store::ObjectStore;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use tracing::info;

use crate::presentation::config::{StorageProviderSetting, StorageSettings};

/// Builds the object store that backs conversation records.
pub struct ObjectStoreFactory;

impl ObjectStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ObjectStore>, StoreFactoryError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                std::fs::create_dir_all(&path).map_err(|e| StoreFactoryError::Io {
                    path: settings.local_path.clone(),
                    source: e,
                })?;
                let store = LocalFileSystem::new_with_prefix(&path)
                    .map_err(|e| StoreFactoryError::Build(e.to_string()))?;
                info!(path = %path.display(), "using local conversation storage");
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Azure => {
                let account = required(&settings.azure_account, "azure_account")?;
                let key = required(&settings.azure_access_key, "azure_access_key")?;
                let container = required(&settings.azure_container, "azure_container")?;
                let store = MicrosoftAzureBuilder::new()
                    .with_account(account)
                    .with_access_key(key)
                    .with_container_name(container)
                    .build()
                    .map_err(|e| StoreFactoryError::Build(e.to_string()))?;
                info!(account, container, "using azure conversation storage");
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => {
                info!("using in-memory conversation storage, records are lost on exit");
                Ok(Arc::new(InMemory::new()))
            }
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, StoreFactoryError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(StoreFactoryError::MissingSetting(name))
}

#[derive(Debug, thiserror::Error)]
pub enum StoreFactoryError {
    #[error("storage.{0} is required for this provider")]
    MissingSetting(&'static str),
    #[error("cannot prepare storage directory {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("object store construction failed: {0}")]
    Build(String),
}
