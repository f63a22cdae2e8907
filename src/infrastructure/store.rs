//! Proverb file persistence

use crate::domain::Proverb;
use crate::error::{KahawatError, Result};
use std::fs;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract storage for the canonical proverb list
pub trait ProverbStore {
    /// Where the document lives, for messages
    fn location(&self) -> &Path;

    /// Read the stored document.
    ///
    /// Returns `Ok(None)` when there is no document or it cannot be opened,
    /// and `MalformedDocument` when it exists but does not parse.
    fn read(&self) -> Result<Option<Vec<Proverb>>>;

    /// Replace the stored document with `proverbs`. Failures are `Save` errors.
    fn write(&self, proverbs: &[Proverb]) -> Result<()>;
}

/// JSON file implementation of ProverbStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    fn save_error(&self, source: std::io::Error) -> KahawatError {
        KahawatError::Save {
            path: self.path.clone(),
            source,
        }
    }

    fn encode(proverbs: &[Proverb]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(proverbs)?;
        json.push('\n');
        Ok(json)
    }

    fn malformed(&self, e: serde_json::Error) -> KahawatError {
        KahawatError::MalformedDocument {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    /// Parse a JSON array of proverb objects. A blank document is an empty list.
    ///
    /// Only the document shape is strict. Elements that are not objects load
    /// as empty proverbs and fields of the wrong type load as empty values.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Proverb>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let items: Vec<Value> = serde_json::from_slice(bytes).map_err(|e| self.malformed(e))?;
        items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).map_err(|e| self.malformed(e)),
                _ => Ok(Proverb::default()),
            })
            .collect()
    }
}

impl ProverbStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Vec<Proverb>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "proverb file not readable");
                return Ok(None);
            }
        };

        let proverbs = self.decode(&bytes)?;
        debug!(path = %self.path.display(), count = proverbs.len(), "read proverb file");
        Ok(Some(proverbs))
    }

    /// Write to a temp file next to the target, then rename into place.
    fn write(&self, proverbs: &[Proverb]) -> Result<()> {
        let contents = Self::encode(proverbs)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
            }
        }

        let tmp_name = format!(
            "{}.kahawat-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("proverbs.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.save_error(e));
        }

        // rename does not replace an existing file on Windows
        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.save_error(e))?;
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.save_error(e));
        }

        debug!(path = %self.path.display(), count = proverbs.len(), "wrote proverb file");
        Ok(())
    }
}
