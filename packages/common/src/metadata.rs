use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata of a module, as recorded on publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// External id. Must be set before the module can be published.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    pub created: DateTime<Utc>,
    pub revised: DateTime<Utc>,
    /// URL of a license registered in the store, matched exactly.
    pub license_url: String,
    /// Language code, e.g. `en`.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub maintainers: Vec<String>,
    #[serde(default)]
    pub licensors: Vec<String>,
    /// Subject tags; only those present in the tag vocabulary get linked.
    #[serde(default)]
    pub subjects: BTreeSet<String>,
    /// Free-form keywords, compared case-sensitively.
    #[serde(default)]
    pub keywords: BTreeSet<String>,
}

/// Who submitted a publish and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub submitter: String,
    pub message: String,
}

impl Submission {
    pub fn new(submitter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            submitter: submitter.into(),
            message: message.into(),
        }
    }
}

impl From<(String, String)> for Submission {
    fn from((submitter, message): (String, String)) -> Self {
        Self { submitter, message }
    }
}
