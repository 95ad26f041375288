//! Static-analysis reports attached to reviewed commits through git notes.
//!
//! Raw notes are parsed into [`Report`]s, the most recent one is picked with
//! [`select_latest`], and its remote details are downloaded with [`get_notes`].

pub mod api;
pub mod details;
pub mod error;
pub mod fetch;
pub mod notes;
pub mod parser;
pub mod report;
pub mod select;
mod wire;

pub use details::{AnalyzeResponse, Location, LocationRange, Note, ReportDetails};
pub use error::AnalysesError;
pub use fetch::{fetch_results, get_notes};
pub use parser::{ReportParser, parse, parse_all_valid};
pub use report::{FORMAT_VERSION, REF, Report, Status};
pub use select::select_latest;
