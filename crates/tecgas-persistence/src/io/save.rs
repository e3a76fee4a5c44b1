//! Plan saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tecgas_model::FormModel;

use crate::document::{PlanDocument, to_document};
use crate::error::{PersistenceError, Result};

/// Save the form as a JSON plan document.
///
/// Uses atomic write (temp file + rename) so an interrupted save never
/// leaves a half-written plan behind.
pub fn save_plan(form: &FormModel, path: &Path) -> Result<()> {
    let bytes = serialize_document(&to_document(form))?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved plan to {}", path.display());
    Ok(())
}

/// Pretty JSON with a 4-space indent.
pub fn serialize_document(document: &PlanDocument) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(b"    "));
    document
        .serialize(&mut serializer)
        .map_err(|source| PersistenceError::Serialization { source })?;
    output.push(b'\n');
    Ok(output)
}
