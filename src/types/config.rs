use crate::error::{RepscoreError, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct RepscoreConfig {
    pub project: Option<ProjectConfig>,
    pub ingest: Option<IngestConfig>,
    pub store: Option<StoreConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub directory: Option<String>,
    pub base_url: Option<String>,
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

/// Resolved storage settings with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub directory: PathBuf,
    pub base_url: String,
    pub application_id: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(".repscore/store"),
            base_url: "https://store.repscore.dev/".to_string(),
            application_id: "REPSCORE-CREDENTIAL-SCORING".to_string(),
        }
    }
}

impl RepscoreConfig {
    pub fn strict_ingest(&self) -> bool {
        self.ingest.as_ref().map(|ingest| ingest.strict).unwrap_or(false)
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|logging| logging.filter.as_deref())
    }

    pub fn store_settings(&self) -> StoreSettings {
        let defaults = StoreSettings::default();
        match &self.store {
            Some(store) => StoreSettings {
                directory: store
                    .directory
                    .as_ref()
                    .map(PathBuf::from)
                    .unwrap_or(defaults.directory),
                base_url: store.base_url.clone().unwrap_or(defaults.base_url),
                application_id: store
                    .application_id
                    .clone()
                    .unwrap_or(defaults.application_id),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(project) = &self.project {
            if project.name.trim().is_empty() {
                return Err(RepscoreError::ConfigParse(
                    "project.name must not be empty".to_string(),
                ));
            }
        }

        if let Some(store) = &self.store {
            if let Some(directory) = &store.directory {
                if directory.trim().is_empty() {
                    return Err(RepscoreError::ConfigParse(
                        "store.directory must not be empty".to_string(),
                    ));
                }
            }
            if let Some(base_url) = &store.base_url {
                if base_url.trim().is_empty() || !base_url.ends_with('/') {
                    return Err(RepscoreError::ConfigParse(format!(
                        "store.base_url must be non-empty and end with '/': {base_url}"
                    )));
                }
            }
            if let Some(application_id) = &store.application_id {
                if application_id.trim().is_empty() {
                    return Err(RepscoreError::ConfigParse(
                        "store.application_id must not be empty".to_string(),
                    ));
                }
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(filter) = &logging.filter {
                if filter.trim().is_empty() {
                    return Err(RepscoreError::ConfigParse(
                        "logging.filter must not be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
