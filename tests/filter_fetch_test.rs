//! Tests for the cascading filter controller
//!
//! The list endpoint is only hit once all four filters are selected, and
//! exactly once per distinct combination. Subject options follow the
//! branch/semester pair.

use resadmin::api::ResourceScope;
use resadmin::logic::catalog::Catalog;
use resadmin::model::Model;
use resadmin::services::ApiRequest;
use resadmin::FilterField;

fn list_scope(request: Option<ApiRequest>) -> Option<ResourceScope> {
    match request {
        Some(ApiRequest::ListPdfs { scope, .. }) => Some(scope),
        Some(other) => panic!("unexpected request {:?}", other),
        None => None,
    }
}

/// Test: subject options for cs/6 come from the built-in table
#[test]
fn test_cs_sixth_semester_subjects() {
    let mut model = Model::new(Catalog::default(), false);
    model.set_filter(FilterField::Branch, "cs");
    model.set_filter(FilterField::Semester, "6");

    assert_eq!(
        model.filters.subject_options(),
        vec!["spm", "da", "ml", "cc", "cd"]
    );
}

/// Test: subjects are empty until both branch and semester are set
#[test]
fn test_subjects_empty_without_pair() {
    let mut model = Model::new(Catalog::default(), false);
    assert!(model.filters.subject_options().is_empty());

    model.set_filter(FilterField::Semester, "6");
    assert!(model.filters.subject_options().is_empty());

    model.set_filter(FilterField::Branch, "ee");
    assert!(model.filters.subject_options().is_empty());
}

/// Test: every step toward a complete tuple issues nothing; completing it issues one fetch
#[test]
fn test_exactly_one_fetch_per_combination() {
    let mut model = Model::new(Catalog::default(), false);
    let mut issued = Vec::new();

    for (field, value) in [
        (FilterField::Category, "notes"),
        (FilterField::Branch, "cs"),
        (FilterField::Semester, "6"),
        (FilterField::Subject, "ml"),
        // Repeating the same selections is not a new combination
        (FilterField::Subject, "ml"),
        (FilterField::Category, "notes"),
    ] {
        if let Some(scope) = list_scope(model.set_filter(field, value)) {
            issued.push(scope);
        }
    }

    assert_eq!(issued, vec![ResourceScope::new("cs", "6", "notes", "ml")]);

    // Any single change yields one more fetch for the new tuple
    let scope = list_scope(model.set_filter(FilterField::Category, "pyq"));
    assert_eq!(scope, Some(ResourceScope::new("cs", "6", "pyq", "ml")));
}

/// Test: clearing a filter stops fetching; re-selecting resumes
#[test]
fn test_incomplete_tuple_never_fetches() {
    let mut model = Model::new(Catalog::default(), false);
    model.set_filter(FilterField::Branch, "cs");
    model.set_filter(FilterField::Semester, "6");
    model.set_filter(FilterField::Category, "notes");
    model.set_filter(FilterField::Subject, "da");

    assert_eq!(model.set_filter(FilterField::Category, ""), None);
    assert_eq!(model.set_filter(FilterField::Subject, "ml"), None);
    assert!(list_scope(model.set_filter(FilterField::Category, "notes")).is_some());
}

/// Bug: switching semester used to silently keep a subject that no longer
/// exists for the new pair, sending nonsense queries with no hint in the UI.
///
/// The subject is still kept (and still queried), but the model flags it so
/// the filter bar can show the mismatch.
#[test]
fn test_semester_change_flags_stale_subject() {
    let mut model = Model::new(Catalog::default(), false);
    model.set_filter(FilterField::Branch, "cs");
    model.set_filter(FilterField::Semester, "6");
    model.set_filter(FilterField::Category, "notes");
    model.set_filter(FilterField::Subject, "da");
    assert!(!model.filters.subject_is_stale());

    let scope = list_scope(model.set_filter(FilterField::Semester, "4"));
    assert_eq!(scope, Some(ResourceScope::new("cs", "4", "notes", "da")));
    assert!(model.filters.subject_is_stale());

    // Picking a subject offered for semester 4 clears the warning
    model.set_filter(FilterField::Subject, "os");
    assert!(!model.filters.subject_is_stale());
}

/// Test: cycling through the subject dropdown visits every option then "unselected"
#[test]
fn test_cycle_subject_wraps() {
    let mut model = Model::new(Catalog::default(), false);
    model.set_filter(FilterField::Branch, "cs");
    model.set_filter(FilterField::Semester, "4");

    let mut seen = Vec::new();
    for _ in 0..7 {
        model.cycle_filter(FilterField::Subject, true);
        seen.push(model.filters.subject.clone());
    }
    assert_eq!(seen, vec!["coa", "os", "sbms", "afl", "pdc", "wt", ""]);
}

/// Test: a catalog from config replaces the built-in one
#[test]
fn test_custom_catalog_from_yaml() {
    let catalog: Catalog = serde_yaml::from_str(
        r#"
branches:
  - { value: ee, label: Electrical }
subjects:
  ee:
    "2": [circuits, signals]
"#,
    )
    .unwrap();

    let mut model = Model::new(catalog, false);
    model.set_filter(FilterField::Branch, "ee");
    model.set_filter(FilterField::Semester, "2");
    assert_eq!(model.filters.subject_options(), vec!["circuits", "signals"]);
    assert_eq!(model.filters.label(FilterField::Branch), "Electrical");
}
