//! Filter catalog
//!
//! The static option lists behind the four dropdowns, including the
//! branch → semester → subjects table that drives the cascading subject list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::FilterField;

/// A selectable dropdown value and its display label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

impl CatalogOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// branch → semester → subjects
pub type SubjectTable = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default = "default_branches")]
    pub branches: Vec<CatalogOption>,
    #[serde(default = "default_semesters")]
    pub semesters: Vec<CatalogOption>,
    #[serde(default = "default_categories")]
    pub categories: Vec<CatalogOption>,
    #[serde(default = "default_subjects")]
    pub subjects: SubjectTable,
}

fn default_branches() -> Vec<CatalogOption> {
    vec![CatalogOption::new("cs", "Computer Science")]
}

fn default_semesters() -> Vec<CatalogOption> {
    vec![
        CatalogOption::new("6", "Semester 6"),
        CatalogOption::new("4", "Semester 4"),
    ]
}

fn default_categories() -> Vec<CatalogOption> {
    vec![
        CatalogOption::new("notes", "Notes"),
        CatalogOption::new("pyq", "PYQ"),
    ]
}

fn default_subjects() -> SubjectTable {
    let mut cs = BTreeMap::new();
    cs.insert(
        "6".to_string(),
        ["spm", "da", "ml", "cc", "cd"].iter().map(|s| s.to_string()).collect(),
    );
    cs.insert(
        "4".to_string(),
        ["coa", "os", "sbms", "afl", "pdc", "wt"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    let mut table = BTreeMap::new();
    table.insert("cs".to_string(), cs);
    table
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            branches: default_branches(),
            semesters: default_semesters(),
            categories: default_categories(),
            subjects: default_subjects(),
        }
    }
}

impl Catalog {
    /// Subjects offered for a (branch, semester) pair.
    ///
    /// Empty when either side is unselected or the pair is not in the table.
    pub fn subject_options(&self, branch: &str, semester: &str) -> Vec<String> {
        if branch.is_empty() || semester.is_empty() {
            return Vec::new();
        }

        self.subjects
            .get(branch)
            .and_then(|semesters| semesters.get(semester))
            .cloned()
            .unwrap_or_default()
    }

    /// Dropdown options for `field`. Subjects are derived from `branch` and `semester`.
    pub fn options(&self, field: FilterField, branch: &str, semester: &str) -> Vec<CatalogOption> {
        match field {
            FilterField::Branch => self.branches.clone(),
            FilterField::Semester => self.semesters.clone(),
            FilterField::Category => self.categories.clone(),
            FilterField::Subject => self
                .subject_options(branch, semester)
                .into_iter()
                .map(|subject| {
                    let label = subject.to_uppercase();
                    CatalogOption {
                        value: subject,
                        label,
                    }
                })
                .collect(),
        }
    }

    /// Display label for a selected value, falling back to the raw value
    pub fn label_for(&self, field: FilterField, value: &str, branch: &str, semester: &str) -> String {
        self.options(field, branch, semester)
            .into_iter()
            .find(|option| option.value == value)
            .map(|option| option.label)
            .unwrap_or_else(|| value.to_string())
    }
}
