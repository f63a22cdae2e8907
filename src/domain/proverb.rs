//! Proverb record and canonical list entries

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single proverb entry as persisted in the proverb file.
///
/// Every field defaults to empty so that objects with missing keys still load.
/// Values of the wrong type (`null`, numbers, a string where tags are expected)
/// also read as empty instead of rejecting the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proverb {
    /// The proverb in its original script
    #[serde(rename = "proverb", deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub transliteration: String,
    #[serde(deserialize_with = "lenient_string")]
    pub meaning: String,
    #[serde(deserialize_with = "lenient_string")]
    pub english_equivalent: String,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(deserialize_with = "lenient_string")]
    pub usage_context: String,
}

fn string_or_empty(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(string_or_empty)
}

/// Non-array tags read as no tags; non-string elements become `""`
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(string_or_empty).collect(),
        _ => Vec::new(),
    })
}

impl Proverb {
    /// Create a proverb with only its text set
    pub fn new(text: impl Into<String>) -> Self {
        Proverb {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Tags joined for display in a detail panel
    pub fn display_tags(&self) -> String {
        self.tags.join(", ")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl AsRef<Proverb> for Proverb {
    fn as_ref(&self) -> &Proverb {
        self
    }
}

/// Process-local identifier handed out by the repository.
///
/// Not persisted; it only lives as long as the in-memory canonical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProverbId(u64);

impl ProverbId {
    pub fn new(value: u64) -> Self {
        ProverbId(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProverbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of the canonical list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: ProverbId,
    pub proverb: Proverb,
}

impl Entry {
    pub fn new(id: ProverbId, proverb: Proverb) -> Self {
        Entry { id, proverb }
    }
}

impl AsRef<Proverb> for Entry {
    fn as_ref(&self) -> &Proverb {
        &self.proverb
    }
}

/// Parse comma-separated tag input from an add/edit form.
///
/// Pieces are trimmed and blank ones dropped. Order and duplicates are kept.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
