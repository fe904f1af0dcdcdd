//! Resources Model
//!
//! The PDF list for the current filter tuple and the bookkeeping that keeps
//! it consistent with the newest fetch.

use chrono::{DateTime, Local};

use crate::api::{PdfResource, ResourceScope};
use crate::logic::navigation;
use crate::logic::sequencing::RequestSequencer;

#[derive(Clone, Debug)]
pub struct ResourcesModel {
    /// Result of the last applied list fetch
    pub pdfs: Vec<PdfResource>,

    pub selected_index: Option<usize>,

    /// Orders list fetches; only the newest response is applied
    pub list_requests: RequestSequencer,

    /// Scope the current `pdfs` were fetched for
    pub loaded_scope: Option<ResourceScope>,

    pub last_refreshed: Option<DateTime<Local>>,

    /// Message of the last failed fetch, cleared by the next success
    pub last_error: Option<String>,
}

impl ResourcesModel {
    pub fn new() -> Self {
        Self {
            pdfs: Vec::new(),
            selected_index: None,
            list_requests: RequestSequencer::new(),
            loaded_scope: None,
            last_refreshed: None,
            last_error: None,
        }
    }

    pub fn selected_pdf(&self) -> Option<&PdfResource> {
        self.selected_index.and_then(|idx| self.pdfs.get(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pdfs.iter().any(|pdf| pdf.name == name)
    }

    pub fn is_loading(&self) -> bool {
        self.list_requests.is_loading()
    }

    /// Replace the list wholesale (no merging) and keep the selection in range
    pub fn replace(&mut self, scope: ResourceScope, pdfs: Vec<PdfResource>) {
        self.pdfs = pdfs;
        self.selected_index = navigation::clamp_selection(self.selected_index, self.pdfs.len());
        self.loaded_scope = Some(scope);
        self.last_refreshed = Some(Local::now());
        self.last_error = None;
    }

    pub fn select_next(&mut self) {
        self.selected_index = navigation::next_selection(self.selected_index, self.pdfs.len());
    }

    pub fn select_prev(&mut self) {
        self.selected_index = navigation::prev_selection(self.selected_index, self.pdfs.len());
    }
}

impl Default for ResourcesModel {
    fn default() -> Self {
        Self::new()
    }
}
