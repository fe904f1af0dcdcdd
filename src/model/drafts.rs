//! Drafts Model
//!
//! Transient, unsaved input: the upload form and the inline rename editor.

/// Upload form contents. `file_path` stands in for the file picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub pdf_name: String,
    pub file_path: String,
    /// An upload request is queued or running
    pub in_flight: bool,
}

impl UploadDraft {
    /// Reset name and file after a successful upload
    pub fn clear(&mut self) {
        self.pdf_name.clear();
        self.file_path.clear();
    }
}

/// Rename in progress for exactly one resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameDraft {
    pub target: String,
    pub new_name: String,
}

#[derive(Clone, Debug, Default)]
pub struct DraftsModel {
    pub upload: UploadDraft,
    /// At most one resource is in edit mode
    pub rename: Option<RenameDraft>,
}

impl DraftsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_renaming(&self, name: &str) -> bool {
        self.rename
            .as_ref()
            .map(|draft| draft.target == name)
            .unwrap_or(false)
    }
}
