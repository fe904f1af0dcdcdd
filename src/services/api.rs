use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{PdfResource, ResourceClient, ResourceScope};
use crate::logic::pdf::{inspect_pdf, PdfSummary};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions and list fetches
    Medium, // Preview downloads
}

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// List PDFs under a scope. `request_id` orders competing fetches.
    ListPdfs {
        request_id: u64,
        scope: ResourceScope,
    },

    /// Upload a file from disk; `pdf_name` is already normalised
    UploadPdf {
        scope: ResourceScope,
        pdf_name: String,
        file_path: PathBuf,
    },

    DeletePdf {
        scope: ResourceScope,
        pdf_name: String,
    },

    RenamePdf {
        scope: ResourceScope,
        old_name: String,
        new_name: String,
    },

    /// Download and inspect a document for the preview modal. `url` is resolved.
    FetchPreview {
        request_id: u64,
        name: String,
        url: String,
    },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchPreview { .. } => Priority::Medium,
            _ => Priority::High,
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ApiRequest::ListPdfs { .. } => "list",
            ApiRequest::UploadPdf { .. } => "upload",
            ApiRequest::DeletePdf { .. } => "delete",
            ApiRequest::RenamePdf { .. } => "rename",
            ApiRequest::FetchPreview { .. } => "preview",
        }
    }
}

/// A downloaded document ready for the preview modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub summary: PdfSummary,
    /// Local copy for handing to an external viewer
    pub local_path: PathBuf,
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ListResult {
        request_id: u64,
        scope: ResourceScope,
        pdfs: Result<Vec<PdfResource>, anyhow::Error>,
    },

    UploadResult {
        scope: ResourceScope,
        pdf_name: String,
        result: Result<(), anyhow::Error>,
    },

    DeleteResult {
        scope: ResourceScope,
        pdf_name: String,
        result: Result<(), anyhow::Error>,
    },

    RenameResult {
        scope: ResourceScope,
        old_name: String,
        new_name: String,
        result: Result<(), anyhow::Error>,
    },

    PreviewResult {
        request_id: u64,
        url: String,
        document: Result<PreviewDocument, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(u64),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: ResourceClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<u64>,
    next_ticket: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: ResourceClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            next_ticket: 0,
            response_tx,
            completion_tx,
            max_concurrent: 10,
        }
    }

    /// Add a request to the queue, behind everything of equal or higher priority
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return;
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight.insert(ticket);

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries: failures are reported back to the UI as-is
        tokio::spawn(async move {
            let kind = request.kind();
            tracing::debug!(ticket, kind, "api request start");

            let response = Self::execute_request(&client, request).await;

            tracing::debug!(ticket, kind, "api request done");
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(ticket));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &ResourceClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::ListPdfs { request_id, scope } => {
                let pdfs = client.list_pdfs(&scope).await;
                ApiResponse::ListResult {
                    request_id,
                    scope,
                    pdfs,
                }
            }

            ApiRequest::UploadPdf {
                scope,
                pdf_name,
                file_path,
            } => {
                let result = client.upload_pdf_file(&scope, &pdf_name, &file_path).await;
                ApiResponse::UploadResult {
                    scope,
                    pdf_name,
                    result,
                }
            }

            ApiRequest::DeletePdf { scope, pdf_name } => {
                let result = client.delete_pdf(&scope, &pdf_name).await;
                ApiResponse::DeleteResult {
                    scope,
                    pdf_name,
                    result,
                }
            }

            ApiRequest::RenamePdf {
                scope,
                old_name,
                new_name,
            } => {
                let result = client.rename_pdf(&scope, &old_name, &new_name).await;
                ApiResponse::RenameResult {
                    scope,
                    old_name,
                    new_name,
                    result,
                }
            }

            ApiRequest::FetchPreview {
                request_id,
                name,
                url,
            } => {
                let document = Self::fetch_preview(client, &name, &url).await;
                ApiResponse::PreviewResult {
                    request_id,
                    url,
                    document,
                }
            }
        }
    }

    async fn fetch_preview(
        client: &ResourceClient,
        name: &str,
        url: &str,
    ) -> anyhow::Result<PreviewDocument> {
        let bytes = client.download(url).await?;
        let summary = inspect_pdf(&bytes)?;

        let local_path = crate::utils::get_preview_path(name);
        if let Some(parent) = local_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&local_path, &bytes).await?;

        Ok(PreviewDocument {
            summary,
            local_path,
        })
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: ResourceClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // UI dropped its sender: shut down
                        None => break,
                    }
                }

                Some(InternalMessage::Completed(ticket)) = completion_rx.recv() => {
                    service.in_flight.remove(&ticket);
                }

                _ = tick.tick() => {
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
