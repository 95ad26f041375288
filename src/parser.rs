use spdlog::debug;

use crate::error::{AnalysesError, Result};
use crate::report::{FORMAT_VERSION, Report};

/// Decodes raw git notes into reports, keeping only the format versions it accepts.
#[derive(Debug, Clone)]
pub struct ReportParser {
    accepted_versions: Vec<i64>,
}

impl Default for ReportParser {
    fn default() -> Self {
        ReportParser::new(vec![FORMAT_VERSION])
    }
}

impl ReportParser {
    pub fn new(accepted_versions: Vec<i64>) -> Self {
        ReportParser { accepted_versions }
    }

    pub fn accepts(&self, report: &Report) -> bool {
        self.accepted_versions.contains(&report.version)
    }

    /// Parses every note, silently dropping the ones that are not valid reports
    /// or carry an unsupported version. Input order is kept.
    pub fn parse_all_valid<I, N>(&self, notes: I) -> Vec<Report>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<[u8]>,
    {
        notes
            .into_iter()
            .enumerate()
            .filter_map(|(i, note)| match parse(note.as_ref()) {
                Ok(report) if self.accepts(&report) => Some(report),
                Ok(report) => {
                    debug!("skipping note {}: unsupported version {}", i, report.version);
                    None
                }
                Err(err) => {
                    debug!("skipping note {}: {}", i, err);
                    None
                }
            })
            .collect()
    }
}

/// Parses an analysis report from the raw bytes of a git note.
/// Unknown fields are ignored and the version is not checked.
pub fn parse(note: &[u8]) -> Result<Report> {
    serde_json::from_slice(note).map_err(AnalysesError::MalformedReport)
}

/// [`ReportParser::parse_all_valid`] accepting only [`FORMAT_VERSION`].
pub fn parse_all_valid<I, N>(notes: I) -> Vec<Report>
where
    I: IntoIterator<Item = N>,
    N: AsRef<[u8]>,
{
    ReportParser::default().parse_all_valid(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let report = parse(br#"{"timestamp":"10","status":"fyi","agent":"ci-7"}"#).unwrap();

        assert_eq!(report.timestamp.as_deref(), Some("10"));
        assert_eq!(report.status.as_deref(), Some("fyi"));
        assert_eq!(report.url, None);
        assert_eq!(report.version, 0);
    }

    #[test]
    fn test_parse_keeps_other_versions() {
        let report = parse(br#"{"v":2}"#).unwrap();
        assert_eq!(report.version, 2);
    }

    #[test]
    fn test_parse_null_fields() {
        let report = parse(br#"{"timestamp":"1","url":null,"v":null}"#).unwrap();

        assert_eq!(report.timestamp.as_deref(), Some("1"));
        assert_eq!(report.url, None);
        assert_eq!(report.version, FORMAT_VERSION);
    }

    #[test]
    fn test_parse_malformed() {
        let notes: [&[u8]; 4] = [b"not json", br#"{"timestamp":12}"#, br#"{"v":"0"}"#, b""];
        for note in notes {
            let err = parse(note).unwrap_err();
            assert!(matches!(err, AnalysesError::MalformedReport(_)));
        }
    }

    #[test]
    fn test_parse_all_valid_filters_and_keeps_order() {
        // Given
        let notes = vec![
            r#"{"timestamp":"1","status":"lgtm"}"#,
            "{broken",
            r#"{"timestamp":"2","v":0}"#,
            r#"{"timestamp":"3","v":1}"#,
            r#"{"timestamp":[]}"#,
            r#"{"timestamp":"4","v":null}"#,
        ];

        // When
        let reports = parse_all_valid(notes);

        // Then
        let timestamps: Vec<&str> = reports
            .iter()
            .map(|r| r.timestamp.as_deref().unwrap())
            .collect();
        assert_eq!(timestamps, vec!["1", "2", "4"]);
        assert!(reports.iter().all(|r| r.version == FORMAT_VERSION));
    }

    #[test]
    fn test_parse_all_valid_all_invalid() {
        let reports = parse_all_valid(vec!["", "[]", r#"{"v":9}"#]);
        assert!(reports.is_empty());
    }

    #[test]
    fn test_custom_accepted_versions() {
        let parser = ReportParser::new(vec![0, 1]);
        let notes = vec![r#"{"v":1}"#, r#"{"v":2}"#, "{}"];

        let versions: Vec<i64> = parser
            .parse_all_valid(notes)
            .iter()
            .map(|r| r.version)
            .collect();
        assert_eq!(versions, vec![1, 0]);
    }
}
