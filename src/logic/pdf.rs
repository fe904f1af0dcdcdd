//! PDF inspection for the preview modal
//!
//! The document is parsed with lopdf to read its version and walk the page
//! tree. Rendering is left to whatever viewer `open_command` launches.

use lopdf::Document;

/// What the preview modal knows about a downloaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSummary {
    /// Header version, e.g. "1.7"
    pub version: String,
    pub page_count: usize,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdfInspectError {
    #[error("empty document")]
    Empty,
    #[error("not a PDF document: {0}")]
    Malformed(String),
}

pub fn inspect_pdf(bytes: &[u8]) -> Result<PdfSummary, PdfInspectError> {
    if bytes.is_empty() {
        return Err(PdfInspectError::Empty);
    }

    let doc = Document::load_mem(bytes).map_err(|e| PdfInspectError::Malformed(e.to_string()))?;

    Ok(PdfSummary {
        version: doc.version.clone(),
        page_count: doc.get_pages().len(),
        size_bytes: bytes.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    /// Build a document with `pages` pages, optionally with an outline tree
    fn build_pdf(pages: usize, outline_count: Option<i64>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                })
                .into()
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if let Some(count) = outline_count {
            let outlines_id = doc.add_object(dictionary! {
                "Type" => "Outlines",
                "Count" => count,
            });
            catalog.set("Outlines", outlines_id);
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_reads_version_and_count() {
        let bytes = build_pdf(2, None);
        let summary = inspect_pdf(&bytes).unwrap();
        assert_eq!(summary.version, "1.5");
        assert_eq!(summary.page_count, 2);
        assert_eq!(summary.size_bytes, bytes.len() as u64);
    }

    #[test]
    fn test_outline_count_is_not_page_count() {
        let bytes = build_pdf(2, Some(7));
        assert_eq!(inspect_pdf(&bytes).unwrap().page_count, 2);
    }

    #[test]
    fn test_empty_page_tree() {
        let bytes = build_pdf(0, None);
        assert_eq!(inspect_pdf(&bytes).unwrap().page_count, 0);
    }

    #[test]
    fn test_rejects_non_pdf() {
        assert!(matches!(
            inspect_pdf(b"<html>Not found</html>"),
            Err(PdfInspectError::Malformed(_))
        ));
        assert_eq!(inspect_pdf(b""), Err(PdfInspectError::Empty));
    }
}
