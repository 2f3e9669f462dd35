use crate::config::ConvertConfig;
use crate::error::Result;
use crate::load;
use crate::mappers;
use crate::report;
use crate::resolve;
use crate::types::sonar::SonarReport;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub anchor_file: String,
    pub marker: String,
}

impl ConvertOptions {
    /// Resolves the effective options from an optional config; built-in
    /// defaults apply field by field.
    pub fn resolve(config: Option<&ConvertConfig>) -> Self {
        let anchor = config.and_then(|cfg| cfg.anchor.as_ref());
        Self {
            anchor_file: anchor
                .and_then(|anchor| anchor.file.clone())
                .unwrap_or_else(|| resolve::DEFAULT_ANCHOR_FILE.to_string()),
            marker: anchor
                .and_then(|anchor| anchor.marker.clone())
                .unwrap_or_else(|| resolve::DEFAULT_BUILD_CONTEXT_MARKER.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub issue_count: usize,
    pub anchor: String,
}

/// The whole pipeline: load the report, fix the fallback anchor once, map
/// every finding in order, write the issue document. `root` is the
/// directory probed for the anchor candidate, threaded explicitly.
pub fn convert(
    input: &Path,
    output: &Path,
    root: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let trivy = load::load_report(input)?;
    let anchor = resolve::fallback_anchor(root, &options.anchor_file);
    debug!(anchor = %anchor, "resolved fallback anchor");

    let mut issues = Vec::new();
    for result in &trivy.results {
        let target = resolve::resolve_target(result, &options.marker, &anchor);
        debug!(
            target = %target,
            vulnerabilities = result.vulnerabilities.len(),
            misconfigurations = result.misconfigurations.len(),
            "mapping result group"
        );
        issues.extend(
            result
                .vulnerabilities
                .iter()
                .map(|vuln| mappers::vulnerability_issue(vuln, &target)),
        );
        issues.extend(
            result
                .misconfigurations
                .iter()
                .map(|misconf| mappers::misconfiguration_issue(misconf, &target)),
        );
    }

    let document = SonarReport { issues };
    report::write_report(output, &document)?;

    Ok(ConvertSummary {
        issue_count: document.issues.len(),
        anchor,
    })
}
