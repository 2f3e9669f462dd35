use crate::error::{ConvertError, Result};
use crate::types::trivy::TrivyReport;
use std::path::Path;
use tracing::debug;

/// Reads and parses a Trivy JSON report. Either failure is fatal to the
/// run; nothing downstream executes and no output file is produced.
pub fn load_report(path: &Path) -> Result<TrivyReport> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConvertError::ReportRead(format!("{}: {}", path.display(), e)))?;
    let report: TrivyReport = serde_json::from_str(&content)
        .map_err(|e| ConvertError::ReportParse(format!("{}: {}", path.display(), e)))?;
    debug!(results = report.results.len(), "parsed trivy report");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_report_reads_results() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("report.json");
        fs::write(
            &path,
            r#"{"Results": [{"Class": "os-pkgs", "Target": "alpine:3.19"}]}"#,
        )
        .expect("report should write");

        let report = load_report(&path).expect("load should succeed");
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].class.as_deref(), Some("os-pkgs"));
    }

    #[test]
    fn load_report_treats_missing_results_as_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"ArtifactName": "alpine:3.19"}"#).expect("report should write");

        let report = load_report(&path).expect("load should succeed");
        assert!(report.results.is_empty());
    }

    #[test]
    fn load_report_fails_on_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_report(&dir.path().join("absent.json")).expect_err("load should fail");
        assert!(err.to_string().contains("report read error"));
    }

    #[test]
    fn load_report_fails_on_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("report.json");
        fs::write(&path, "{not json").expect("report should write");

        let err = load_report(&path).expect_err("load should fail");
        assert!(err.to_string().contains("report parse error"));
    }
}
