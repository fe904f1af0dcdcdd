//! Client-side validation for mutating operations
//!
//! Every check here runs before a request is queued, so a failure means
//! zero network calls.

use std::path::PathBuf;

use super::naming::normalize_pdf_name;
use crate::api::ResourceScope;
use crate::FilterField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a file and enter a name before uploading.")]
    MissingFileOrName,

    #[error("Select {} first.", describe_fields(.0))]
    MissingFilters(Vec<FilterField>),

    #[error("Enter a new name before saving.")]
    EmptyRename,

    #[error("The list shown is not for the selected filters. Refresh (r) and try again.")]
    ListOutOfDate,
}

fn describe_fields(fields: &[FilterField]) -> String {
    let names: Vec<String> = fields.iter().map(|f| f.as_str().to_lowercase()).collect();
    match names.len() {
        0 => String::new(),
        1 => names[0].clone(),
        n => format!("{} and {}", names[..n - 1].join(", "), names[n - 1]),
    }
}

/// A validated upload, ready to queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub scope: ResourceScope,
    /// Normalised, always ends in `.pdf`
    pub pdf_name: String,
    pub file_path: PathBuf,
}

/// Validate an upload draft against the current filter tuple.
///
/// File and name are checked before the filters so the most common mistake
/// gets the most specific message.
pub fn validate_upload(
    scope: Result<ResourceScope, Vec<FilterField>>,
    pdf_name: &str,
    file_path: &str,
) -> Result<UploadPlan, ValidationError> {
    if pdf_name.trim().is_empty() || file_path.trim().is_empty() {
        return Err(ValidationError::MissingFileOrName);
    }

    let scope = scope.map_err(ValidationError::MissingFilters)?;

    Ok(UploadPlan {
        scope,
        pdf_name: normalize_pdf_name(pdf_name),
        file_path: PathBuf::from(file_path.trim()),
    })
}

/// Validate a rename draft. The new name is sent verbatim apart from trimming.
pub fn validate_rename(new_name: &str) -> Result<String, ValidationError> {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyRename)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> Result<ResourceScope, Vec<FilterField>> {
        Ok(ResourceScope::new("cs", "6", "notes", "da"))
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate_upload(scope(), "", "/tmp/notes1.pdf"),
            Err(ValidationError::MissingFileOrName)
        );
        assert_eq!(
            validate_upload(scope(), "   ", "/tmp/notes1.pdf"),
            Err(ValidationError::MissingFileOrName)
        );
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            validate_upload(scope(), "DA Unit 1", ""),
            Err(ValidationError::MissingFileOrName)
        );
    }

    #[test]
    fn test_missing_file_reported_before_filters() {
        let missing = Err(vec![FilterField::Subject]);
        assert_eq!(
            validate_upload(missing, "", ""),
            Err(ValidationError::MissingFileOrName)
        );
    }

    #[test]
    fn test_missing_filters() {
        let missing = Err(vec![FilterField::Category, FilterField::Subject]);
        let err = validate_upload(missing, "DA Unit 1", "/tmp/notes1.pdf").unwrap_err();
        assert_eq!(err.to_string(), "Select category and subject first.");
    }

    #[test]
    fn test_three_missing_filters_message() {
        let err = ValidationError::MissingFilters(vec![
            FilterField::Branch,
            FilterField::Semester,
            FilterField::Subject,
        ]);
        assert_eq!(err.to_string(), "Select branch, semester and subject first.");
    }

    #[test]
    fn test_valid_upload_normalises_name() {
        let plan = validate_upload(scope(), "DA Unit 1", "/tmp/notes1.pdf").unwrap();
        assert_eq!(plan.pdf_name, "DA Unit 1.pdf");
        assert_eq!(plan.file_path, PathBuf::from("/tmp/notes1.pdf"));
        assert_eq!(plan.scope.subject, "da");
    }

    #[test]
    fn test_validate_rename() {
        assert_eq!(validate_rename("  new.pdf "), Ok("new.pdf".to_string()));
        assert_eq!(validate_rename(" "), Err(ValidationError::EmptyRename));
    }
}
