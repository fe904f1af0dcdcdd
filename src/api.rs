use anyhow::{Context, Result};
use reqwest::{multipart, Client};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One stored PDF as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PdfResource {
    pub name: String,
    /// Relative to `{base}/resources`, see [`ResourceClient::resolve_url`]
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct PdfListResponse {
    #[serde(default)]
    pdfs: Option<Vec<PdfResource>>,
}

/// A fully populated filter tuple. Every resource lives under exactly one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceScope {
    pub branch: String,
    pub semester: String,
    pub category: String,
    pub subject: String,
}

impl ResourceScope {
    pub fn new(
        branch: impl Into<String>,
        semester: impl Into<String>,
        category: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            semester: semester.into(),
            category: category.into(),
            subject: subject.into(),
        }
    }

    /// Percent-encoded `branch=..&semester=..&category=..&subject=..`
    fn query_string(&self) -> String {
        format!(
            "branch={}&semester={}&category={}&subject={}",
            urlencoding::encode(&self.branch),
            urlencoding::encode(&self.semester),
            urlencoding::encode(&self.category),
            urlencoding::encode(&self.subject),
        )
    }
}

impl std::fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.branch, self.semester, self.category, self.subject
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenameRequest<'a> {
    old_name: &'a str,
    new_name: &'a str,
    branch: &'a str,
    semester: &'a str,
    category: &'a str,
    subject: &'a str,
}

/// Errors the resource service reports explicitly
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Turn a non-2xx response into [`ApiError::Status`]
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        body: body.trim().to_string(),
    }
    .into())
}

#[derive(Clone)]
pub struct ResourceClient {
    base_url: String,
    client: Client,
}

impl ResourceClient {
    /// `base_url` is the API root, e.g. `https://host/api`; endpoints live under `/resources`
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/resources/{}", self.base_url, path)
    }

    /// Resolve a listing URL for download. Absolute URLs pass through unchanged.
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }

        if url.starts_with('/') {
            format!("{}/resources{}", self.base_url, url)
        } else {
            format!("{}/resources/{}", self.base_url, url)
        }
    }

    pub async fn list_pdfs(&self, scope: &ResourceScope) -> Result<Vec<PdfResource>> {
        let url = format!("{}?{}", self.endpoint("pdfs"), scope.query_string());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch PDF list")?;

        let response = ensure_success(response).await?;
        let data: PdfListResponse = response
            .json()
            .await
            .context("Failed to parse PDF list")?;

        Ok(data.pdfs.unwrap_or_default())
    }

    /// Upload `contents` as `pdf_name` under `scope`.
    ///
    /// `pdf_name` is sent as given; normalisation happens before the request is built.
    pub async fn upload_pdf(
        &self,
        scope: &ResourceScope,
        pdf_name: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<()> {
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .context("Invalid upload content type")?;

        let form = multipart::Form::new()
            .text("branch", scope.branch.clone())
            .text("semester", scope.semester.clone())
            .text("category", scope.category.clone())
            .text("subject", scope.subject.clone())
            .text("pdfName", pdf_name.to_string())
            .part("pdf", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .context("Failed to upload PDF")?;

        let response = ensure_success(response).await?;
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(pdf_name, scope = %scope, body = %body, "upload accepted");

        Ok(())
    }

    /// Read `path` from disk and upload it
    pub async fn upload_pdf_file(
        &self,
        scope: &ResourceScope,
        pdf_name: &str,
        path: &Path,
    ) -> Result<()> {
        let contents = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| pdf_name.to_string());

        self.upload_pdf(scope, pdf_name, &file_name, contents).await
    }

    pub async fn delete_pdf(&self, scope: &ResourceScope, pdf_name: &str) -> Result<()> {
        let url = format!(
            "{}?pdfName={}&{}",
            self.endpoint("delete"),
            urlencoding::encode(pdf_name),
            scope.query_string()
        );

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to delete PDF")?;

        ensure_success(response).await?;
        Ok(())
    }

    pub async fn rename_pdf(
        &self,
        scope: &ResourceScope,
        old_name: &str,
        new_name: &str,
    ) -> Result<()> {
        let body = RenameRequest {
            old_name,
            new_name,
            branch: &scope.branch,
            semester: &scope.semester,
            category: &scope.category,
            subject: &scope.subject,
        };

        let response = self
            .client
            .put(self.endpoint("rename"))
            .json(&body)
            .send()
            .await
            .context("Failed to rename PDF")?;

        ensure_success(response).await?;
        Ok(())
    }

    /// Download a document for preview. `url` must already be resolved.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to download PDF")?;

        let response = ensure_success(response).await?;
        let bytes = response
            .bytes()
            .await
            .context("Failed to read PDF body")?;

        Ok(bytes.to_vec())
    }
}
