use crate::error::{AnalysesError, Result};
use crate::report::Report;

/// Returns the report with the most recent timestamp.
///
/// Every timestamp must be a base-10 integer; a single bad one fails the whole
/// selection. Among equal timestamps the first report in input order wins.
pub fn select_latest(reports: &[Report]) -> Result<Option<&Report>> {
    let mut latest: Option<(i64, &Report)> = None;

    for (index, report) in reports.iter().enumerate() {
        let timestamp = parse_timestamp(index, report)?;
        match latest {
            Some((best, _)) if best >= timestamp => {}
            _ => latest = Some((timestamp, report)),
        }
    }

    Ok(latest.map(|(_, report)| report))
}

fn parse_timestamp(index: usize, report: &Report) -> Result<i64> {
    let raw = report.timestamp.as_deref().unwrap_or_default();
    raw.parse::<i64>()
        .map_err(|err| AnalysesError::InvalidTimestamp {
            index,
            timestamp: raw.to_string(),
            source: err,
        })
}
