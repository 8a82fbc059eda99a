//! PDF rendering collaborator.
//!
//! PDF export delegates to a headless-browser print call; it is a
//! collaborator boundary, not part of the core. The default implementation
//! shells out to a local Chromium/Chrome binary.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors from the rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No browser binary is available.
    #[error("no chromium/chrome binary found on PATH")]
    BrowserNotFound,

    /// Filesystem or process I/O failed.
    #[error("render I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The browser ran but did not produce a PDF.
    #[error("browser print failed ({status}): {stderr}")]
    BrowserFailed {
        /// Process exit status.
        status: String,
        /// Captured stderr.
        stderr: String,
    },
}

/// Renders an HTML document to PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Renders the given standalone HTML page to PDF.
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError>;
}

/// Browser binaries probed by [`ChromiumRenderer::discover`], in order.
const BROWSER_CANDIDATES: [&str; 5] = [
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

/// Headless-Chromium print-to-PDF renderer.
pub struct ChromiumRenderer {
    binary: PathBuf,
}

impl ChromiumRenderer {
    /// Creates a renderer using the given browser binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locates a Chromium/Chrome binary on the PATH.
    pub fn discover() -> Result<Self, RenderError> {
        for candidate in BROWSER_CANDIDATES {
            if let Ok(path) = which::which(candidate) {
                debug!(binary = %path.display(), "Found browser for PDF rendering");
                return Ok(Self::new(path));
            }
        }
        Err(RenderError::BrowserNotFound)
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let dir = tempfile::tempdir()?;
        let page = dir.path().join("page.html");
        let out = dir.path().join("out.pdf");
        tokio::fs::write(&page, html).await?;

        let output = tokio::process::Command::new(&self.binary)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg(format!("--print-to-pdf={}", out.display()))
            .arg(&page)
            .output()
            .await?;

        if !output.status.success() {
            return Err(RenderError::BrowserFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(tokio::fs::read(&out).await?)
    }
}

/// Renderer used when no browser is available at startup; every render
/// request fails, the rest of the service stays up.
pub struct UnavailableRenderer;

#[async_trait]
impl PdfRenderer for UnavailableRenderer {
    async fn render_pdf(&self, _html: &str) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::BrowserNotFound)
    }
}
