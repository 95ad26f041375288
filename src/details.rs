use serde::{Deserialize, Serialize};

use crate::wire::{is_zero, null_as_default};

/// Location within a source file that an analysis message covers.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LocationRange {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub start_line: i64,
}

/// Location within a source tree that an analysis message covers.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Location {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<LocationRange>,
}

/// A single analysis message.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub category: String,
    // always emitted, never validated
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Response from one static-analysis tool.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeResponse {
    #[serde(
        rename = "note",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notes: Vec<Note>,
}

/// An entire analysis run, possibly spanning several tools.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ReportDetails {
    #[serde(
        rename = "analyze_response",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub analyze_responses: Vec<AnalyzeResponse>,
}

impl Note {
    pub fn new(description: impl Into<String>) -> Self {
        Note {
            description: description.into(),
            ..Default::default()
        }
    }
}

impl ReportDetails {
    /// Flattens every tool's notes, keeping response order then note order.
    pub fn into_notes(self) -> Vec<Note> {
        self.analyze_responses
            .into_iter()
            .flat_map(|response| response.notes)
            .collect()
    }
}
