//! Plan loading operations.

use std::fs;
use std::path::Path;

use serde_json::error::Category;
use tecgas_model::FormModel;

use crate::document::{LoadSummary, PlanDocument, apply_document};
use crate::error::{PersistenceError, Result};

/// Read a plan document from disk.
pub fn read_document(path: &Path) -> Result<PlanDocument> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_document(&bytes, path)
}

/// Read a plan and apply it to the form. Sections absent from the file keep
/// their current values.
pub fn load_plan(path: &Path, form: &mut FormModel) -> Result<LoadSummary> {
    let document = read_document(path)?;
    let summary = apply_document(&document, form);
    tracing::info!(
        applied = summary.applied.len(),
        skipped = summary.skipped.len(),
        "Loaded plan from {}",
        path.display()
    );
    Ok(summary)
}

fn parse_document(bytes: &[u8], path: &Path) -> Result<PlanDocument> {
    serde_json::from_slice(bytes).map_err(|source| match source.classify() {
        // Well-formed JSON that is not an object of sections.
        Category::Data => PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: source.to_string(),
        },
        Category::Io | Category::Syntax | Category::Eof => PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::save_plan;
    use tecgas_model::{SectionId, gas_planning_sheet};
    use tempfile::tempdir;

    #[test]
    fn test_load_plan_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        let mut form = gas_planning_sheet();
        form.set_field(SectionId::GeneralInfo, None, 1, "Tx 21/35")
            .unwrap();
        save_plan(&form, &path).unwrap();

        let mut loaded = gas_planning_sheet();
        let summary = load_plan(&path, &mut loaded).unwrap();
        assert_eq!(summary.applied.len(), SectionId::all().len());
        assert_eq!(loaded, form);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_plan(&dir.path().join("absent.json"), &mut gas_planning_sheet());
        assert!(matches!(
            result,
            Err(PersistenceError::Io {
                operation: "read",
                ..
            })
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, b"{\"General Info\": [").unwrap();

        let result = load_plan(&path, &mut gas_planning_sheet());
        assert!(matches!(
            result,
            Err(PersistenceError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_load_non_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, b"[1, 2, 3]").unwrap();

        let result = load_plan(&path, &mut gas_planning_sheet());
        let err = result.unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidFormat { .. }));
        assert!(err.suggestion().is_some());
    }
}
