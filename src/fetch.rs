use spdlog::prelude::*;
use url::Url;

use crate::api::{ClientError, Transport};
use crate::details::{AnalyzeResponse, Note, ReportDetails};
use crate::error::{AnalysesError, Result};
use crate::report::Report;

/// Downloads the details of a report and returns the tool responses embedded in it.
///
/// A report without a url has no results. Nothing is cached: every call goes
/// back to the network.
pub async fn fetch_results<T: Transport>(
    transport: &T,
    report: &Report,
) -> Result<Vec<AnalyzeResponse>> {
    if !report.has_results() {
        return Ok(Vec::new());
    }

    let url =
        Url::parse(report.url.as_deref().unwrap_or_default()).map_err(ClientError::BadUrl)?;
    let body = transport.get(&url).await?;

    let details: ReportDetails =
        serde_json::from_slice(&body).map_err(AnalysesError::MalformedPayload)?;
    debug!(
        "fetched {} analyze responses from {}",
        details.analyze_responses.len(),
        url
    );

    Ok(details.analyze_responses)
}

/// Downloads the details of a report and returns every analysis message in it,
/// in response order then message order.
pub async fn get_notes<T: Transport>(transport: &T, report: &Report) -> Result<Vec<Note>> {
    let responses = fetch_results(transport, report).await?;

    Ok(ReportDetails {
        analyze_responses: responses,
    }
    .into_notes())
}
