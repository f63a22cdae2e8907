//! Error types for kahawat

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for kahawat
#[derive(Debug, Error)]
pub enum KahawatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed proverb file {}: {message}", path.display())]
    MalformedDocument { path: PathBuf, message: String },

    #[error("Could not save proverbs to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Please select a proverb to {0}.")]
    NoSelection(String),

    #[error("Nothing to {0}: no proverb fields given.")]
    NoFields(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl KahawatError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KahawatError::MalformedDocument { .. } => 2,
            KahawatError::NoSelection(_) => 3,
            KahawatError::Save { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            KahawatError::MalformedDocument { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The file must hold a JSON array of proverb objects\n\
                    • Fix or move '{}' aside; a fresh sample set is written when it is missing\n\
                    • Point at another file with --file or KAHAWAT_FILE",
                    self,
                    path.display()
                )
            }
            KahawatError::Save { path, .. } => {
                format!(
                    "Warning: Could not save proverbs to file.\n{}\n\n\
                    Suggestions:\n\
                    • Check write permissions for '{}'\n\
                    • Choose a writable location: kahawat config data_file <path>",
                    self,
                    path.display()
                )
            }
            KahawatError::NoSelection(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'kahawat list' to see the numbered proverbs\n\
                    • Pass the same --search/--tag/--region filters you listed with",
                    self
                )
            }
            KahawatError::NoFields(action) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Give at least one of --proverb, --transliteration, --meaning,\n  \
                    --english, --tags, --origin or --context\n\
                    • Example: kahawat {} --proverb \"...\" --tags \"wisdom, patience\"",
                    self, action
                )
            }
            KahawatError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: error, warn, info, debug, trace\n\
                        Example: kahawat config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using KahawatError
pub type Result<T> = std::result::Result<T, KahawatError>;
