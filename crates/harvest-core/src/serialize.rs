//! Field-mapping export and JSON persistence for records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// A record that can be exported as a flat field mapping and written to disk.
pub trait Serializable {
    /// Public fields keyed by name, in declaration order.
    fn to_field_mapping(&self) -> Map<String, Value>;

    /// File name used by [`Serializable::persist`] when no path is given.
    /// `None` when the record has nothing to name itself after.
    fn default_file_name(&self) -> Option<String> {
        None
    }

    /// Writes the field mapping as four-space indented JSON and returns the
    /// path written.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingFileName`] if `path` is `None` and
    ///   [`Serializable::default_file_name`] returns `None`.
    /// - [`CoreError::Io`] if the file cannot be created or written.
    fn persist(&self, path: Option<&Path>) -> Result<PathBuf, CoreError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(self.default_file_name().ok_or(CoreError::MissingFileName)?),
        };
        write_json(&path, &Value::Object(self.to_field_mapping()))?;
        Ok(path)
    }

    /// Like [`Serializable::persist`] without a path, but places the default
    /// file name inside `dir`.
    ///
    /// # Errors
    ///
    /// Same as [`Serializable::persist`].
    fn persist_in(&self, dir: &Path) -> Result<PathBuf, CoreError> {
        let name = self.default_file_name().ok_or(CoreError::MissingFileName)?;
        self.persist(Some(&dir.join(name)))
    }
}

/// Serializes `value` to `path` as JSON indented with four spaces.
///
/// The file handle is dropped (and closed) on every return path.
///
/// # Errors
///
/// Returns [`CoreError::Io`] on create/flush failure and
/// [`CoreError::Serialize`] if serialization or an intermediate write fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CoreError> {
    let io_error = |source: std::io::Error| CoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    writer.flush().map_err(io_error)?;
    Ok(())
}
