//! PDF name normalisation

const PDF_SUFFIX: &str = ".pdf";

/// Normalise a user-entered resource name for transmission.
///
/// Surrounding whitespace is trimmed and `.pdf` appended unless the name
/// already ends with it (compared case-insensitively).
///
/// # Examples
/// ```
/// use resadmin::logic::naming::normalize_pdf_name;
///
/// assert_eq!(normalize_pdf_name("DA Unit 1"), "DA Unit 1.pdf");
/// assert_eq!(normalize_pdf_name("notes1.pdf"), "notes1.pdf");
/// ```
pub fn normalize_pdf_name(name: &str) -> String {
    let trimmed = name.trim();
    if has_pdf_suffix(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, PDF_SUFFIX)
    }
}

/// Whether `name` already carries a `.pdf` extension
pub fn has_pdf_suffix(name: &str) -> bool {
    name.len() >= PDF_SUFFIX.len()
        && name.is_char_boundary(name.len() - PDF_SUFFIX.len())
        && name[name.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}
