//! Dataset Sources
//!
//! The dataset is a single JSON document read once per session, either from
//! a local file or over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::model::{Dataset, DatasetError, DatasetResult};

/// Something the dataset can be loaded from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, for logs and diagnostics
    fn describe(&self) -> String;

    /// Fetch, parse and validate the dataset
    async fn load(&self) -> DatasetResult<Dataset>;
}

/// Dataset stored on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> DatasetResult<Dataset> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DatasetError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = ?self.path, bytes = bytes.len(), "Read dataset file");

        let dataset = Dataset::from_slice(&bytes)?;
        info!(
            source = %self.describe(),
            workers = dataset.workers.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

/// Dataset served over HTTP(S)
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> DatasetResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatasetError::Http(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> DatasetResult<Dataset> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                DatasetError::Timeout(self.url.clone())
            } else {
                DatasetError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Http(format!("{} returned {}", self.url, status)));
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                DatasetError::Timeout(self.url.clone())
            } else {
                DatasetError::Http(e.to_string())
            }
        })?;
        debug!(url = %self.url, bytes = bytes.len(), "Fetched dataset");

        let dataset = Dataset::from_slice(&bytes)?;
        info!(
            source = %self.url,
            workers = dataset.workers.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

/// Pick a source for a configured location
pub fn source_from_config(config: &DatasetConfig) -> DatasetResult<Box<dyn DatasetSource>> {
    let location = config.source.trim();
    if location.is_empty() {
        return Err(DatasetError::InvalidSource(
            "no dataset source configured".to_string(),
        ));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Load the dataset from a configured location
pub async fn load(config: &DatasetConfig) -> DatasetResult<Dataset> {
    source_from_config(config)?.load().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::fixtures;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(source: &str) -> DatasetConfig {
        DatasetConfig {
            source: source.to_string(),
            ..DatasetConfig::default()
        }
    }

    #[tokio::test]
    async fn test_file_source_loads_dataset() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(fixtures::SAMPLE_JSON.as_bytes()).unwrap();

        let dataset = FileSource::new(file.path()).load().await.unwrap();
        assert_eq!(dataset.workers.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileSource::new("/nonexistent/dataset.json").load().await.unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"workers\": ").unwrap();

        let err = FileSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_source_selection() {
        let file = source_from_config(&config_for("data/sample-dataset.json")).unwrap();
        assert_eq!(file.describe(), "data/sample-dataset.json");

        let http = source_from_config(&config_for("https://example.com/data.json")).unwrap();
        assert_eq!(http.describe(), "https://example.com/data.json");

        assert!(matches!(
            source_from_config(&config_for("  ")),
            Err(DatasetError::InvalidSource(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_http_source_fails() {
        let source = HttpSource::new("http://127.0.0.1:9/dataset.json", Duration::from_secs(2))
            .unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, DatasetError::Http(_) | DatasetError::Timeout(_)));
    }
}
