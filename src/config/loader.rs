//! Input file loader.
//!
//! Each file is read in full and closed before anything is parsed,
//! so a parse failure never leaves a handle open.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads captured diagnostic files from disk.
pub struct InputLoader;

impl InputLoader {
    /// Load a text file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] if the file does not exist and
    /// [`Error::Io`] for any other read failure.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded input");
        Ok(content)
    }

    /// Load and deserialize a JSON file.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`InputLoader::load_text`], or
    /// [`Error::MalformedJson`] if the content does not fit `T`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let answers: AnswerSet = InputLoader::load_json("doh4_output")?;
    /// ```
    pub fn load_json<T, P>(path: P) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let content = Self::load_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::malformed_json(path, e))
    }
}
