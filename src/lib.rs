//! Student Resources Admin Library
//!
//! Exposes modules for the terminal binary and for testing

pub mod api;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod services;
pub mod session;
pub mod utils;

/// One of the four dropdowns that scope a resource query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Branch,
    Semester,
    Category,
    Subject,
}

impl FilterField {
    /// Dropdown order as shown in the filter bar
    pub const ALL: [FilterField; 4] = [
        FilterField::Branch,
        FilterField::Semester,
        FilterField::Category,
        FilterField::Subject,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FilterField::Branch => "Branch",
            FilterField::Semester => "Semester",
            FilterField::Category => "Category",
            FilterField::Subject => "Subject",
        }
    }
}

/// Which input receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filter(FilterField),
    PdfName,  // upload draft: name field
    FilePath, // upload draft: file to upload
    Resources,
}

impl Focus {
    /// Whether printable keys are text input rather than commands
    pub fn is_text_input(&self) -> bool {
        matches!(self, Focus::PdfName | Focus::FilePath)
    }
}
