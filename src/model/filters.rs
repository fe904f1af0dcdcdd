//! Filter Model
//!
//! The four dropdown values and the catalog that feeds them.
//! Empty string means "unselected".

use crate::api::ResourceScope;
use crate::logic::catalog::{Catalog, CatalogOption};
use crate::FilterField;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterModel {
    pub catalog: Catalog,
    pub branch: String,
    pub semester: String,
    pub category: String,
    pub subject: String,
}

impl FilterModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            branch: String::new(),
            semester: String::new(),
            category: String::new(),
            subject: String::new(),
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Branch => &self.branch,
            FilterField::Semester => &self.semester,
            FilterField::Category => &self.category,
            FilterField::Subject => &self.subject,
        }
    }

    /// Set a field. Returns whether the value changed.
    ///
    /// The subject is left alone when branch or semester change; see
    /// [`FilterModel::subject_is_stale`].
    pub fn set(&mut self, field: FilterField, value: &str) -> bool {
        let slot = match field {
            FilterField::Branch => &mut self.branch,
            FilterField::Semester => &mut self.semester,
            FilterField::Category => &mut self.category,
            FilterField::Subject => &mut self.subject,
        };

        if slot == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    /// Subjects offered for the current branch and semester
    pub fn subject_options(&self) -> Vec<String> {
        self.catalog.subject_options(&self.branch, &self.semester)
    }

    pub fn options(&self, field: FilterField) -> Vec<CatalogOption> {
        self.catalog.options(field, &self.branch, &self.semester)
    }

    /// Display label of the selected value ("" when unselected)
    pub fn label(&self, field: FilterField) -> String {
        let value = self.get(field);
        if value.is_empty() {
            return String::new();
        }
        self.catalog
            .label_for(field, value, &self.branch, &self.semester)
    }

    /// A subject is selected but not offered for the current branch/semester
    pub fn subject_is_stale(&self) -> bool {
        !self.subject.is_empty() && !self.subject_options().contains(&self.subject)
    }

    /// Unselected fields in dropdown order
    pub fn missing(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// The full filter tuple, or the fields still unselected
    pub fn scope(&self) -> Result<ResourceScope, Vec<FilterField>> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(ResourceScope::new(
            self.branch.clone(),
            self.semester.clone(),
            self.category.clone(),
            self.subject.clone(),
        ))
    }
}
