//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **FilterModel**: branch / semester / category / subject and the catalog
//! - **ResourcesModel**: the fetched PDF list and its selection
//! - **DraftsModel**: the upload form and the inline rename editor
//! - **UiModel**: focus, dialogs, preview modal, toast
//!
//! Update methods never perform I/O. Operations that need the server return
//! the [`ApiRequest`] to queue; the runtime sends it and feeds the matching
//! [`crate::services::ApiResponse`] back through an `apply_*` method.

pub mod drafts;
pub mod filters;
pub mod resources;
pub mod types;
pub mod ui;

pub use drafts::{DraftsModel, RenameDraft, UploadDraft};
pub use filters::FilterModel;
pub use resources::ResourcesModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::{PdfResource, ResourceScope};
use crate::logic::catalog::Catalog;
use crate::logic::errors::format_error_message;
use crate::logic::navigation::cycle_value;
use crate::logic::upload::{validate_rename, validate_upload, ValidationError};
use crate::services::{ApiRequest, PreviewDocument};
use crate::{FilterField, Focus};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub filters: FilterModel,
    pub resources: ResourcesModel,
    pub drafts: DraftsModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(catalog: Catalog, vim_mode: bool) -> Self {
        Self {
            filters: FilterModel::new(catalog),
            resources: ResourcesModel::new(),
            drafts: DraftsModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    pub fn selected_pdf(&self) -> Option<&PdfResource> {
        self.resources.selected_pdf()
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    // ============================================
    // FILTERS
    // ============================================

    /// Set one filter. A changed value with all four filters selected
    /// issues exactly one list fetch.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Option<ApiRequest> {
        if !self.filters.set(field, value) {
            return None;
        }

        tracing::debug!("Filter {} set to {:?}", field.as_str(), value);
        if field == FilterField::Branch || field == FilterField::Semester {
            if self.filters.subject_is_stale() {
                tracing::debug!("Subject {:?} not offered for new branch/semester", self.filters.subject);
            }
        }

        let request = self.request_list();
        if request.is_none() {
            // An incomplete tuple supersedes whatever fetch is still in flight
            self.resources.list_requests.cancel();
        }
        request
    }

    /// Step a dropdown to its next or previous option (wrapping through "unselected")
    pub fn cycle_filter(&mut self, field: FilterField, forward: bool) -> Option<ApiRequest> {
        let values: Vec<String> = self
            .filters
            .options(field)
            .into_iter()
            .map(|option| option.value)
            .collect();
        let next = cycle_value(self.filters.get(field), &values, forward);
        self.set_filter(field, &next)
    }

    /// Open the dropdown list for a filter with the current value highlighted
    pub fn open_dropdown(&mut self, field: FilterField) {
        let current = self.filters.get(field);
        self.ui.dropdown_index = self
            .filters
            .options(field)
            .iter()
            .position(|option| option.value == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.ui.open_dropdown = Some(field);
    }

    /// Move the dropdown highlight; row 0 is "unselected"
    pub fn move_dropdown(&mut self, forward: bool) {
        let Some(field) = self.ui.open_dropdown else {
            return;
        };
        let rows = self.filters.options(field).len() + 1;
        self.ui.dropdown_index = if forward {
            (self.ui.dropdown_index + 1) % rows
        } else {
            (self.ui.dropdown_index + rows - 1) % rows
        };
    }

    /// Apply the highlighted dropdown row and close the list
    pub fn choose_dropdown(&mut self) -> Option<ApiRequest> {
        let field = self.ui.open_dropdown.take()?;
        let value = match self.ui.dropdown_index {
            0 => String::new(),
            i => self
                .filters
                .options(field)
                .get(i - 1)
                .map(|option| option.value.clone())
                .unwrap_or_default(),
        };
        self.set_filter(field, &value)
    }

    // ============================================
    // LIST
    // ============================================

    /// Issue a list fetch for the current tuple, if complete
    pub fn request_list(&mut self) -> Option<ApiRequest> {
        let scope = self.filters.scope().ok()?;
        let request_id = self.resources.list_requests.issue();
        Some(ApiRequest::ListPdfs { request_id, scope })
    }

    /// User-initiated refetch
    pub fn refresh(&mut self) -> Option<ApiRequest> {
        match self.filters.scope() {
            Ok(_) => self.request_list(),
            Err(missing) => {
                self.show_toast(ValidationError::MissingFilters(missing).to_string());
                None
            }
        }
    }

    /// Apply a list response. Returns false when a newer fetch superseded it.
    ///
    /// On failure the previous list stays on screen.
    pub fn apply_list_result(
        &mut self,
        request_id: u64,
        scope: ResourceScope,
        pdfs: Result<Vec<PdfResource>, anyhow::Error>,
    ) -> bool {
        if !self.resources.list_requests.settle(request_id) {
            tracing::debug!("Discarding stale list response #{} for {}", request_id, scope);
            return false;
        }

        match pdfs {
            Ok(pdfs) => {
                tracing::debug!("Loaded {} PDFs for {}", pdfs.len(), scope);
                self.resources.replace(scope, pdfs);
                // The list was replaced; a preview of the old one is meaningless
                self.ui.close_preview();
                let rename_target_gone = self
                    .drafts
                    .rename
                    .as_ref()
                    .map(|draft| !self.resources.contains(&draft.target))
                    .unwrap_or(false);
                if rename_target_gone {
                    self.drafts.rename = None;
                }
            }
            Err(e) => {
                let message = format_error_message(&e);
                tracing::warn!("Failed to load PDFs for {}: {:#}", scope, e);
                self.resources.last_error = Some(message.clone());
                self.show_toast(format!("Error: Failed to load PDFs: {}", message));
            }
        }
        true
    }

    /// Scope for acting on a name taken from the list. The list must have
    /// been fetched for the current filters, otherwise the name may not exist
    /// under them. Alerts and returns None when it was not.
    fn listed_scope(&mut self) -> Option<ResourceScope> {
        let scope = match self.filters.scope() {
            Ok(scope) => scope,
            Err(missing) => {
                self.ui
                    .show_alert(ValidationError::MissingFilters(missing).to_string());
                return None;
            }
        };

        if self.resources.loaded_scope.as_ref() != Some(&scope) {
            tracing::debug!(
                "Refusing mutation: list loaded for {:?}, filters at {}",
                self.resources.loaded_scope,
                scope
            );
            self.ui.show_alert(ValidationError::ListOutOfDate.to_string());
            return None;
        }

        Some(scope)
    }

    // ============================================
    // UPLOAD
    // ============================================

    /// Validate the upload form. Any failure shows an alert and issues nothing.
    pub fn submit_upload(&mut self) -> Option<ApiRequest> {
        if self.drafts.upload.in_flight {
            self.show_toast("Upload already in progress".to_string());
            return None;
        }

        let plan = match validate_upload(
            self.filters.scope(),
            &self.drafts.upload.pdf_name,
            &self.drafts.upload.file_path,
        ) {
            Ok(plan) => plan,
            Err(e) => {
                self.ui.show_alert(e.to_string());
                return None;
            }
        };

        tracing::info!("Uploading {} as {} to {}", plan.file_path.display(), plan.pdf_name, plan.scope);
        self.drafts.upload.in_flight = true;
        Some(ApiRequest::UploadPdf {
            scope: plan.scope,
            pdf_name: plan.pdf_name,
            file_path: plan.file_path,
        })
    }

    /// Success clears the form and refetches the list; failure keeps the form.
    pub fn apply_upload_result(
        &mut self,
        pdf_name: &str,
        result: Result<(), anyhow::Error>,
    ) -> Option<ApiRequest> {
        self.drafts.upload.in_flight = false;

        match result {
            Ok(()) => {
                tracing::info!("Uploaded {}", pdf_name);
                self.drafts.upload.clear();
                self.show_toast(format!("Uploaded {}", pdf_name));
                self.request_list()
            }
            Err(e) => {
                tracing::warn!("Upload of {} failed: {:#}", pdf_name, e);
                self.ui
                    .show_alert(format!("Error uploading file: {}", format_error_message(&e)));
                None
            }
        }
    }

    // ============================================
    // RENAME
    // ============================================

    /// Put a resource into edit mode, replacing any other rename in progress
    pub fn begin_rename(&mut self, name: &str) {
        self.drafts.rename = Some(RenameDraft {
            target: name.to_string(),
            new_name: name.to_string(),
        });
    }

    pub fn begin_rename_selected(&mut self) {
        if let Some(name) = self.selected_pdf().map(|pdf| pdf.name.clone()) {
            self.begin_rename(&name);
        }
    }

    /// Leave edit mode without a request
    pub fn cancel_rename(&mut self) {
        self.drafts.rename = None;
    }

    /// Commit the rename draft and leave edit mode
    pub fn save_rename(&mut self) -> Option<ApiRequest> {
        let draft = self.drafts.rename.as_ref()?;

        let new_name = match validate_rename(&draft.new_name) {
            Ok(name) => name,
            Err(e) => {
                self.ui.show_alert(e.to_string());
                return None;
            }
        };

        let scope = self.listed_scope()?;

        let draft = self.drafts.rename.take()?;
        tracing::info!("Renaming {} to {} in {}", draft.target, new_name, scope);
        Some(ApiRequest::RenamePdf {
            scope,
            old_name: draft.target,
            new_name,
        })
    }

    /// Success refetches the list. Failure alerts and reopens the editor
    /// with the attempted name, unless another rename has started meanwhile.
    pub fn apply_rename_result(
        &mut self,
        old_name: &str,
        new_name: &str,
        result: Result<(), anyhow::Error>,
    ) -> Option<ApiRequest> {
        match result {
            Ok(()) => {
                tracing::info!("Renamed {} to {}", old_name, new_name);
                self.show_toast(format!("Renamed {} to {}", old_name, new_name));
                self.request_list()
            }
            Err(e) => {
                tracing::warn!("Rename of {} failed: {:#}", old_name, e);
                self.ui.show_alert(format!(
                    "Error renaming {}: {}",
                    old_name,
                    format_error_message(&e)
                ));
                if self.drafts.rename.is_none() && self.resources.contains(old_name) {
                    self.drafts.rename = Some(RenameDraft {
                        target: old_name.to_string(),
                        new_name: new_name.to_string(),
                    });
                }
                None
            }
        }
    }

    // ============================================
    // DELETE
    // ============================================

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, name: &str) {
        self.ui.confirm_delete = Some(name.to_string());
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(name) = self.selected_pdf().map(|pdf| pdf.name.clone()) {
            self.request_delete(&name);
        }
    }

    /// Declined: nothing is sent
    pub fn cancel_delete(&mut self) {
        self.ui.confirm_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<ApiRequest> {
        let pdf_name = self.ui.confirm_delete.take()?;
        let scope = self.listed_scope()?;

        tracing::info!("Deleting {} from {}", pdf_name, scope);
        Some(ApiRequest::DeletePdf { scope, pdf_name })
    }

    pub fn apply_delete_result(
        &mut self,
        pdf_name: &str,
        result: Result<(), anyhow::Error>,
    ) -> Option<ApiRequest> {
        match result {
            Ok(()) => {
                tracing::info!("Deleted {}", pdf_name);
                self.show_toast(format!("Deleted {}", pdf_name));
                self.request_list()
            }
            Err(e) => {
                tracing::warn!("Delete of {} failed: {:#}", pdf_name, e);
                self.ui.show_alert(format!(
                    "Error deleting {}: {}",
                    pdf_name,
                    format_error_message(&e)
                ));
                None
            }
        }
    }

    // ============================================
    // PREVIEW
    // ============================================

    /// Open the preview modal for a resource. `url` must already be resolved.
    pub fn open_preview(&mut self, name: &str, url: String) -> ApiRequest {
        let request_id = self.ui.preview_requests.issue();
        self.ui.preview = Some(PreviewState {
            name: name.to_string(),
            url: url.clone(),
            request_id,
            status: PreviewStatus::Loading,
            scroll_offset: 0,
        });
        ApiRequest::FetchPreview {
            request_id,
            name: name.to_string(),
            url,
        }
    }

    /// Apply a preview download. Returns false if the modal was closed or
    /// reopened for another document in the meantime.
    pub fn apply_preview_result(
        &mut self,
        request_id: u64,
        document: Result<PreviewDocument, anyhow::Error>,
    ) -> bool {
        if !self.ui.preview_requests.settle(request_id) {
            tracing::debug!("Discarding stale preview #{}", request_id);
            return false;
        }
        let Some(preview) = self.ui.preview.as_mut() else {
            return false;
        };

        preview.status = match document {
            Ok(document) => PreviewStatus::Ready(document),
            Err(e) => {
                tracing::warn!("Preview of {} failed: {:#}", preview.name, e);
                PreviewStatus::Failed(format_error_message(&e))
            }
        };
        true
    }

    pub fn close_preview(&mut self) {
        self.ui.close_preview();
    }

    // ============================================
    // TEXT INPUT
    // ============================================

    /// The text field receiving keystrokes: the rename editor while one is
    /// open, otherwise the focused upload field.
    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        if let Some(draft) = self.drafts.rename.as_mut() {
            return Some(&mut draft.new_name);
        }
        match self.ui.focus {
            Focus::PdfName => Some(&mut self.drafts.upload.pdf_name),
            Focus::FilePath => Some(&mut self.drafts.upload.file_path),
            _ => None,
        }
    }

    pub fn is_editing_text(&self) -> bool {
        self.drafts.rename.is_some() || self.ui.focus.is_text_input()
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(text) = self.active_text_mut() {
            text.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(text) = self.active_text_mut() {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn model_with_scope() -> Model {
        let mut model = Model::new(Catalog::default(), false);
        model.set_filter(FilterField::Branch, "cs");
        model.set_filter(FilterField::Semester, "6");
        model.set_filter(FilterField::Category, "notes");
        model.set_filter(FilterField::Subject, "da");
        model
    }

    fn pdf(name: &str) -> PdfResource {
        PdfResource {
            name: name.to_string(),
            url: format!("/files/{}", name),
        }
    }

    fn loaded(names: &[&str]) -> Model {
        let mut model = model_with_scope();
        let id = model.resources.list_requests.last_issued();
        let scope = model.filters.scope().unwrap();
        model.apply_list_result(id, scope, Ok(names.iter().map(|n| pdf(n)).collect()));
        model
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(Catalog::default(), true);
        assert!(model.ui.vim_mode);
        assert!(model.resources.pdfs.is_empty());
        assert!(model.filters.scope().is_err());
        assert!(!model.has_modal());
    }

    #[test]
    fn test_incomplete_filters_issue_nothing() {
        let mut model = Model::new(Catalog::default(), false);
        assert_eq!(model.set_filter(FilterField::Branch, "cs"), None);
        assert_eq!(model.set_filter(FilterField::Semester, "6"), None);
        assert_eq!(model.set_filter(FilterField::Category, "notes"), None);
        assert!(!model.resources.is_loading());
    }

    #[test]
    fn test_completing_filters_issues_one_fetch() {
        let mut model = Model::new(Catalog::default(), false);
        model.set_filter(FilterField::Branch, "cs");
        model.set_filter(FilterField::Semester, "6");
        model.set_filter(FilterField::Category, "notes");

        let request = model.set_filter(FilterField::Subject, "da");
        assert_eq!(
            request,
            Some(ApiRequest::ListPdfs {
                request_id: 1,
                scope: ResourceScope::new("cs", "6", "notes", "da"),
            })
        );
        // Same value again is not a new combination
        assert_eq!(model.set_filter(FilterField::Subject, "da"), None);
    }

    #[test]
    fn test_cycle_filter_walks_options() {
        let mut model = Model::new(Catalog::default(), false);
        model.cycle_filter(FilterField::Branch, true);
        assert_eq!(model.filters.branch, "cs");
        model.cycle_filter(FilterField::Branch, false);
        assert_eq!(model.filters.branch, "");
    }

    #[test]
    fn test_dropdown_choose() {
        let mut model = Model::new(Catalog::default(), false);
        model.set_filter(FilterField::Branch, "cs");
        model.set_filter(FilterField::Semester, "6");

        model.open_dropdown(FilterField::Subject);
        assert_eq!(model.ui.dropdown_index, 0);
        model.move_dropdown(true);
        model.move_dropdown(true);
        model.choose_dropdown();
        assert_eq!(model.filters.subject, "da");
        assert_eq!(model.ui.open_dropdown, None);

        // Row 0 clears the selection
        model.open_dropdown(FilterField::Subject);
        assert_eq!(model.ui.dropdown_index, 2);
        model.ui.dropdown_index = 0;
        model.choose_dropdown();
        assert_eq!(model.filters.subject, "");
    }

    #[test]
    fn test_list_result_replaces_and_closes_preview() {
        let mut model = loaded(&["a.pdf", "b.pdf"]);
        model.open_preview("a.pdf", "http://x/a.pdf".to_string());

        let id = model.request_list().map(|r| match r {
            ApiRequest::ListPdfs { request_id, .. } => request_id,
            _ => unreachable!(),
        });
        let scope = model.filters.scope().unwrap();
        assert!(model.apply_list_result(id.unwrap(), scope, Ok(vec![pdf("c.pdf")])));

        assert_eq!(model.resources.pdfs, vec![pdf("c.pdf")]);
        assert!(model.ui.preview.is_none());
    }

    #[test]
    fn test_list_failure_keeps_previous_list() {
        let mut model = loaded(&["a.pdf"]);
        let id = match model.refresh() {
            Some(ApiRequest::ListPdfs { request_id, .. }) => request_id,
            other => panic!("unexpected {:?}", other),
        };
        let scope = model.filters.scope().unwrap();
        model.apply_list_result(id, scope, Err(anyhow!("connection refused")));

        assert_eq!(model.resources.pdfs, vec![pdf("a.pdf")]);
        assert!(model.resources.last_error.is_some());
        assert!(model.ui.toast_message.is_some());
        assert!(!model.resources.is_loading());
    }

    #[test]
    fn test_stale_list_response_discarded() {
        let mut model = model_with_scope();
        let first = model.resources.list_requests.last_issued();
        let second = match model.set_filter(FilterField::Subject, "ml") {
            Some(ApiRequest::ListPdfs { request_id, .. }) => request_id,
            other => panic!("unexpected {:?}", other),
        };

        let ml = ResourceScope::new("cs", "6", "notes", "ml");
        let da = ResourceScope::new("cs", "6", "notes", "da");
        assert!(model.apply_list_result(second, ml.clone(), Ok(vec![pdf("ml.pdf")])));
        assert!(!model.apply_list_result(first, da, Ok(vec![pdf("da.pdf")])));

        assert_eq!(model.resources.pdfs, vec![pdf("ml.pdf")]);
        assert_eq!(model.resources.loaded_scope, Some(ml));
    }

    #[test]
    fn test_refresh_without_scope_toasts() {
        let mut model = Model::new(Catalog::default(), false);
        assert_eq!(model.refresh(), None);
        assert!(model.ui.toast_message.is_some());
    }

    #[test]
    fn test_upload_validation_alerts() {
        let mut model = model_with_scope();
        model.drafts.upload.pdf_name = "DA Unit 1".to_string();
        assert_eq!(model.submit_upload(), None);
        assert_eq!(
            model.ui.alert.as_deref(),
            Some("Please select a file and enter a name before uploading.")
        );
        assert!(!model.drafts.upload.in_flight);
    }

    #[test]
    fn test_upload_success_clears_form_and_refetches() {
        let mut model = model_with_scope();
        model.drafts.upload.pdf_name = "DA Unit 1".to_string();
        model.drafts.upload.file_path = "/tmp/unit1.pdf".to_string();

        let request = model.submit_upload().unwrap();
        assert_eq!(
            request,
            ApiRequest::UploadPdf {
                scope: ResourceScope::new("cs", "6", "notes", "da"),
                pdf_name: "DA Unit 1.pdf".to_string(),
                file_path: "/tmp/unit1.pdf".into(),
            }
        );
        assert!(model.drafts.upload.in_flight);
        assert_eq!(model.submit_upload(), None);

        let refetch = model.apply_upload_result("DA Unit 1.pdf", Ok(()));
        assert!(matches!(refetch, Some(ApiRequest::ListPdfs { .. })));
        assert_eq!(model.drafts.upload, UploadDraft::default());
    }

    #[test]
    fn test_upload_failure_keeps_form() {
        let mut model = model_with_scope();
        model.drafts.upload.pdf_name = "x".to_string();
        model.drafts.upload.file_path = "/tmp/x.pdf".to_string();
        model.submit_upload();

        assert_eq!(model.apply_upload_result("x.pdf", Err(anyhow!("boom"))), None);
        assert_eq!(model.drafts.upload.pdf_name, "x");
        assert!(!model.drafts.upload.in_flight);
        assert!(model.ui.alert.as_deref().unwrap().starts_with("Error uploading file"));
    }

    #[test]
    fn test_rename_flow() {
        let mut model = loaded(&["a.pdf", "b.pdf"]);
        model.begin_rename("a.pdf");
        model.begin_rename("b.pdf");
        assert!(!model.drafts.is_renaming("a.pdf"));
        assert!(model.drafts.is_renaming("b.pdf"));

        model.input_backspace();
        model.input_backspace();
        model.input_backspace();
        model.input_backspace();
        for c in "c.pdf".chars() {
            model.input_char(c);
        }

        let request = model.save_rename();
        assert_eq!(
            request,
            Some(ApiRequest::RenamePdf {
                scope: ResourceScope::new("cs", "6", "notes", "da"),
                old_name: "b.pdf".to_string(),
                new_name: "c.pdf".to_string(),
            })
        );
        assert!(model.drafts.rename.is_none());
    }

    #[test]
    fn test_rename_empty_rejected() {
        let mut model = loaded(&["a.pdf"]);
        model.begin_rename("a.pdf");
        model.drafts.rename.as_mut().unwrap().new_name = "   ".to_string();
        assert_eq!(model.save_rename(), None);
        assert!(model.ui.alert.is_some());
        assert!(model.drafts.rename.is_some());
    }

    #[test]
    fn test_rename_cancel_and_failure() {
        let mut model = loaded(&["a.pdf"]);
        model.begin_rename("a.pdf");
        model.cancel_rename();
        assert!(model.drafts.rename.is_none());

        assert_eq!(model.apply_rename_result("a.pdf", "b.pdf", Err(anyhow!("HTTP 500"))), None);
        assert!(model.ui.alert.is_some());
        assert_eq!(
            model.drafts.rename,
            Some(RenameDraft {
                target: "a.pdf".to_string(),
                new_name: "b.pdf".to_string(),
            })
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut model = loaded(&["a.pdf"]);
        model.request_delete_selected();
        assert_eq!(model.ui.confirm_delete.as_deref(), Some("a.pdf"));
        model.cancel_delete();
        assert_eq!(model.confirm_delete(), None);

        model.request_delete("a.pdf");
        assert_eq!(
            model.confirm_delete(),
            Some(ApiRequest::DeletePdf {
                scope: ResourceScope::new("cs", "6", "notes", "da"),
                pdf_name: "a.pdf".to_string(),
            })
        );
        assert!(matches!(
            model.apply_delete_result("a.pdf", Ok(())),
            Some(ApiRequest::ListPdfs { .. })
        ));
    }

    #[test]
    fn test_preview_stale_result_ignored() {
        let mut model = loaded(&["a.pdf", "b.pdf"]);
        let first = match model.open_preview("a.pdf", "u/a".to_string()) {
            ApiRequest::FetchPreview { request_id, .. } => request_id,
            _ => unreachable!(),
        };
        let second = match model.open_preview("b.pdf", "u/b".to_string()) {
            ApiRequest::FetchPreview { request_id, .. } => request_id,
            _ => unreachable!(),
        };

        assert!(!model.apply_preview_result(first, Err(anyhow!("late"))));
        assert!(model.apply_preview_result(second, Err(anyhow!("not found"))));
        let preview = model.ui.preview.as_ref().unwrap();
        assert_eq!(preview.name, "b.pdf");
        assert!(matches!(preview.status, PreviewStatus::Failed(_)));

        model.close_preview();
        assert!(!model.apply_preview_result(second, Err(anyhow!("again"))));
    }

    #[test]
    fn test_text_input_targets_focus() {
        let mut model = Model::new(Catalog::default(), false);
        model.input_char('x');
        assert!(model.drafts.upload.pdf_name.is_empty());

        model.ui.focus = Focus::PdfName;
        model.input_char('D');
        model.input_char('A');
        model.ui.focus = Focus::FilePath;
        model.input_char('/');
        assert_eq!(model.drafts.upload.pdf_name, "DA");
        assert_eq!(model.drafts.upload.file_path, "/");
        assert!(model.is_editing_text());
    }
}
