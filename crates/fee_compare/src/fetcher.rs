use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tracing::info;

/// Downloads fee schedule PDFs to local files
pub struct PdfFetcher {
    client: Client,
}

impl PdfFetcher {
    /// Client with no request deadline
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and writes the body verbatim to `dest`, replacing any
    /// existing file. Returns the number of bytes written.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<usize> {
        info!("Downloading PDF from: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Failed to download {}", url))?;

        info!("Response status: {}", response.status());
        let pdf_bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        tokio::fs::write(dest, &pdf_bytes)
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        info!("Saved {} bytes to {}", pdf_bytes.len(), dest.display());
        Ok(pdf_bytes.len())
    }
}
