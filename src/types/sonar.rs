use serde::Serialize;

/// SonarQube import severity levels, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    /// Maps a raw Trivy severity label onto the Sonar scale. The match is
    /// exact; anything unrecognized (or absent) takes the caller's fallback.
    pub fn normalize(label: Option<&str>, fallback: Severity) -> Severity {
        match label {
            Some("CRITICAL") => Severity::Blocker,
            Some("HIGH") => Severity::Critical,
            Some("MEDIUM") => Severity::Major,
            Some("LOW") => Severity::Minor,
            Some("UNKNOWN") => Severity::Info,
            _ => fallback,
        }
    }
}

pub const ISSUE_TYPE: &str = "VULNERABILITY";

#[derive(Debug, Clone, Serialize)]
pub struct SonarReport {
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub engine_id: String,
    pub rule_id: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: Severity,
    pub primary_location: PrimaryLocation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    pub message: String,
    pub file_path: String,
    pub text_range: TextRange,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: u32,
}

impl Issue {
    pub fn new(
        engine_id: &str,
        rule_id: &str,
        severity: Severity,
        message: String,
        file_path: &str,
        line: u32,
    ) -> Self {
        Self {
            engine_id: engine_id.to_string(),
            rule_id: rule_id.to_string(),
            issue_type: ISSUE_TYPE.to_string(),
            severity,
            primary_location: PrimaryLocation {
                message,
                file_path: file_path.to_string(),
                text_range: TextRange { start_line: line },
            },
        }
    }
}
