//! Shared types for the Model

use crate::services::PreviewDocument;

/// Lifecycle of the preview modal's download
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewStatus {
    Loading,
    Ready(PreviewDocument),
    Failed(String),
}

/// Preview modal state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewState {
    pub name: String,
    /// Resolved document URL
    pub url: String,
    pub request_id: u64,
    pub status: PreviewStatus,
    /// Index of the first page row shown
    pub scroll_offset: usize,
}

impl PreviewState {
    pub fn document(&self) -> Option<&PreviewDocument> {
        match &self.status {
            PreviewStatus::Ready(document) => Some(document),
            _ => None,
        }
    }

    fn page_count(&self) -> usize {
        self.document().map_or(0, |document| document.summary.page_count)
    }

    /// Scroll the page list down, stopping at the last page
    pub fn scroll_down(&mut self, rows: usize) {
        let max_offset = self.page_count().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(rows).min(max_offset);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }
}
