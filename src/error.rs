use thiserror::Error;

use crate::api::client::ClientError;

#[derive(Error, Debug)]
pub enum AnalysesError {
    #[error("malformed report: {0}")]
    MalformedReport(#[source] serde_json::Error),

    #[error("malformed report details: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("failed to fetch report details: {0}")]
    Fetch(#[from] ClientError),

    #[error("report {index} has an invalid timestamp {timestamp:?}")]
    InvalidTimestamp {
        index: usize,
        timestamp: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, AnalysesError>;
