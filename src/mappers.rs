use crate::types::sonar::{Issue, Severity};
use crate::types::trivy::{Misconfiguration, Vulnerability};

pub const VULNERABILITY_ENGINE_ID: &str = "Trivy";
pub const MISCONFIGURATION_ENGINE_ID: &str = "Trivy-IaC";

const UNKNOWN_RULE_ID: &str = "UNKNOWN";
const UNKNOWN_SEVERITY_LABEL: &str = "UNKNOWN";
const DEFAULT_MISCONFIGURATION_MESSAGE: &str = "Misconfiguration";

/// Maps one vulnerability onto one issue. Infallible: every field falls
/// back to a placeholder. Vulnerabilities carry no usable line, so they
/// always anchor to line 1.
pub fn vulnerability_issue(vuln: &Vulnerability, target_file: &str) -> Issue {
    let severity = Severity::normalize(vuln.severity.as_deref(), Severity::Info);
    let rule_id = vuln.vulnerability_id.as_deref().unwrap_or(UNKNOWN_RULE_ID);

    let message = format!(
        "[{}] {} ({}) - Fixed in: {}. {}",
        vuln.severity.as_deref().unwrap_or(UNKNOWN_SEVERITY_LABEL),
        vuln.pkg_name.as_deref().unwrap_or("unknown"),
        vuln.installed_version.as_deref().unwrap_or("?"),
        vuln.fixed_version.as_deref().unwrap_or("none"),
        vuln.title.as_deref().unwrap_or(""),
    );

    Issue::new(
        VULNERABILITY_ENGINE_ID,
        rule_id,
        severity,
        message,
        target_file,
        1,
    )
}

/// Maps one misconfiguration onto one issue, keeping the scanner-reported
/// start line. Unclassified severities degrade to MAJOR, not INFO:
/// unvetted configuration drift is treated as significant by default.
pub fn misconfiguration_issue(misconf: &Misconfiguration, target_file: &str) -> Issue {
    let severity = Severity::normalize(misconf.severity.as_deref(), Severity::Major);
    let rule_id = misconf.id.as_deref().unwrap_or(UNKNOWN_RULE_ID);
    let message = misconf
        .message
        .as_deref()
        .unwrap_or(DEFAULT_MISCONFIGURATION_MESSAGE);
    let line = misconf
        .iac_metadata
        .as_ref()
        .and_then(|meta| meta.start_line)
        .unwrap_or(1);

    Issue::new(
        MISCONFIGURATION_ENGINE_ID,
        rule_id,
        severity,
        message.to_string(),
        target_file,
        line,
    )
}
