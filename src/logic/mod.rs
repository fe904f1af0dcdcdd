//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - catalog: Dropdown options and the cascading subject table
//! - errors: Error classification and display formatting
//! - naming: PDF name normalisation
//! - navigation: List selection and dropdown cycling
//! - pdf: Header and page-tree inspection for previews
//! - sequencing: Monotonic request ids for out-of-order responses
//! - ui: Focus cycling and toast timing
//! - upload: Validation before mutating requests

pub mod catalog;
pub mod errors;
pub mod naming;
pub mod navigation;
pub mod pdf;
pub mod sequencing;
pub mod ui;
pub mod upload;
