use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::ExtractError;
use crate::models::resume::ResumeRecord;

/// Writes the record as pretty-printed JSON, creating parent directories.
///
/// The JSON goes to a temporary file next to `path` which is then renamed
/// over it, so an interrupted run never leaves a half-written record.
pub fn write_record(record: &ResumeRecord, path: &Path) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(record)?;
    let write_err = |source: std::io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
