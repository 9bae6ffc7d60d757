use crate::api::layout::SceneLayout;
use crate::util::error::SceneError;
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where a [`SceneLayout`] comes from.
///
/// Every failure is reported as [`SceneError::FetchFailure`] so callers can
/// offer a retry.
pub trait LayoutSource {
    fn fetch(&self) -> impl Future<Output = Result<SceneLayout, SceneError>>;
}

/// Fetches the layout JSON from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpLayoutSource {
    client: reqwest::Client,
    url: String,
}

impl HttpLayoutSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LayoutSource for HttpLayoutSource {
    async fn fetch(&self) -> Result<SceneLayout, SceneError> {
        debug!(url = %self.url, "fetching scene layout");
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SceneError::FetchFailure(e.to_string()))?
            .error_for_status()
            .map_err(|e| SceneError::FetchFailure(e.to_string()))?;

        let layout = resp
            .json::<SceneLayout>()
            .await
            .map_err(|e| SceneError::FetchFailure(e.to_string()))?;
        info!(region = %layout.region, landmarks = layout.landmarks.len(), "layout fetched");
        Ok(layout)
    }
}

/// Reads the layout JSON from a local file.
#[derive(Debug, Clone)]
pub struct FileLayoutSource {
    path: PathBuf,
}

impl FileLayoutSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LayoutSource for FileLayoutSource {
    async fn fetch(&self) -> Result<SceneLayout, SceneError> {
        debug!(path = ?self.path, "reading scene layout");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SceneError::FetchFailure(format!("{}: {}", self.path.display(), e)))?;
        SceneLayout::from_slice(&bytes)
    }
}

/// A layout already in memory.
#[derive(Debug, Clone)]
pub struct StaticLayoutSource(pub SceneLayout);

impl LayoutSource for StaticLayoutSource {
    async fn fetch(&self) -> Result<SceneLayout, SceneError> {
        Ok(self.0.clone())
    }
}

/// Either an HTTP or a file source, picked from a location string.
#[derive(Debug, Clone)]
pub enum AnyLayoutSource {
    Http(HttpLayoutSource),
    File(FileLayoutSource),
}

impl AnyLayoutSource {
    /// `http://` and `https://` locations are fetched over HTTP, anything else is a path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            AnyLayoutSource::Http(HttpLayoutSource::new(location))
        } else {
            AnyLayoutSource::File(FileLayoutSource::new(location))
        }
    }
}

impl LayoutSource for AnyLayoutSource {
    async fn fetch(&self) -> Result<SceneLayout, SceneError> {
        match self {
            AnyLayoutSource::Http(s) => s.fetch().await,
            AnyLayoutSource::File(s) => s.fetch().await,
        }
    }
}
