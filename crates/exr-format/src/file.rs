//! JSON documents on disk.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::{FormatError, JsonFormatter};

/// Saves `data` as a JSON document at `path`, replacing any existing file.
///
/// With `pretty`, the document is indented with four spaces.
///
/// # Errors
///
/// Returns [`FormatError::MissingPath`] for an empty path, or an error if
/// the file cannot be written.
pub fn to_json_file<T, P>(path: P, data: &T, pretty: bool) -> Result<(), FormatError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(FormatError::MissingPath);
    }

    let writer = BufWriter::new(File::create(path)?);
    JsonFormatter::new().with_pretty(pretty).write(data, writer)
}

/// Loads a JSON document from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match `T`.
pub fn from_json_file<T, P>(path: P) -> Result<T, FormatError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(FormatError::MissingPath);
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
