use crate::error::Result;
use crate::types::sonar::SonarReport;
use std::path::Path;

pub fn render(report: &SonarReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serializes the issue document to `path`, overwriting any existing file.
pub fn write_report(path: &Path, report: &SonarReport) -> Result<()> {
    std::fs::write(path, render(report)?)?;
    Ok(())
}
