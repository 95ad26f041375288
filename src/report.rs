use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::wire::{is_zero, null_as_default};

/// git-notes ref holding analysis reports.
pub const REF: &str = "refs/notes/devtools/analyses";

pub const STATUS_LOOKS_GOOD_TO_ME: &str = "lgtm";
pub const STATUS_FOR_YOUR_INFORMATION: &str = "fyi";
pub const STATUS_NEEDS_MORE_WORK: &str = "nmw";

/// Latest version of the report format understood by this crate.
pub const FORMAT_VERSION: i64 = 0;

/// Build/test status report attached to a reviewed commit. Every field is optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Version of the metadata format.
    #[serde(
        rename = "v",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The analyses reported no messages.
    LooksGoodToMe,
    /// The analyses reported informational messages.
    ForYourInformation,
    /// The analyses reported errors.
    NeedsMoreWork,
    Other(String),
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            STATUS_LOOKS_GOOD_TO_ME => Status::LooksGoodToMe,
            STATUS_FOR_YOUR_INFORMATION => Status::ForYourInformation,
            STATUS_NEEDS_MORE_WORK => Status::NeedsMoreWork,
            other => Status::Other(other.to_string()),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::LooksGoodToMe => write!(f, "{STATUS_LOOKS_GOOD_TO_ME}"),
            Status::ForYourInformation => write!(f, "{STATUS_FOR_YOUR_INFORMATION}"),
            Status::NeedsMoreWork => write!(f, "{STATUS_NEEDS_MORE_WORK}"),
            Status::Other(s) => write!(f, "{s}"),
        }
    }
}

impl Report {
    pub fn status(&self) -> Option<Status> {
        self.status.as_deref().map(Status::from)
    }

    // a report without a url carries no remote results
    pub fn has_results(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
