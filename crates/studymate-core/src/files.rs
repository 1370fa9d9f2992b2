//! Loading and storing studyplans as JSON files.
//!
//! Plans are stored in the same JSON shape the models serialize to, so a
//! file written here can be fed back to any command.

use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, StudymateError};

/// Reads and deserializes a JSON file.
///
/// # Errors
///
/// - `StudymateError::FileSystem` if the file cannot be read
/// - `StudymateError::Serialization` if its content is not valid for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| StudymateError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Serializes `value` as pretty JSON and writes it to `path`, creating
/// missing parent directories.
///
/// # Errors
///
/// - `StudymateError::FileSystem` if the file or its directory cannot be
///   written
/// - `StudymateError::Serialization` if `value` cannot be serialized
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StudymateError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content).map_err(|e| StudymateError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}
