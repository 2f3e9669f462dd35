use crate::types::trivy::ScanResult;
use std::path::Path;

pub const DEFAULT_ANCHOR_FILE: &str = "Dockerfile";
pub const DEFAULT_BUILD_CONTEXT_MARKER: &str = "my-app";

const OS_PKGS_CLASS: &str = "os-pkgs";
const UNKNOWN_TARGET: &str = "unknown";

/// Computed once per run, before any result is processed: the anchor
/// candidate if it exists under `root`, otherwise the directory itself.
pub fn fallback_anchor(root: &Path, anchor_file: &str) -> String {
    if root.join(anchor_file).exists() {
        anchor_file.to_string()
    } else {
        ".".to_string()
    }
}

/// Decides which file path a result group's issues anchor to. OS package
/// findings and build-context findings have no individually attributable
/// source file, so they collapse onto the fallback; anything else keeps
/// the scanner's own target. Marker matching is a plain substring test,
/// not path-segment aware.
pub fn resolve_target(result: &ScanResult, marker: &str, fallback: &str) -> String {
    let class = result.class.as_deref().unwrap_or(OS_PKGS_CLASS);
    let target = result.target.as_deref().unwrap_or(UNKNOWN_TARGET);

    if class == OS_PKGS_CLASS || target.contains(marker) {
        fallback.to_string()
    } else {
        target.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn result(class: Option<&str>, target: Option<&str>) -> ScanResult {
        ScanResult {
            class: class.map(str::to_string),
            target: target.map(str::to_string),
            ..ScanResult::default()
        }
    }

    #[test]
    fn fallback_anchor_prefers_existing_candidate() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("Dockerfile"), "FROM alpine").expect("dockerfile should write");
        assert_eq!(fallback_anchor(dir.path(), DEFAULT_ANCHOR_FILE), "Dockerfile");
    }

    #[test]
    fn fallback_anchor_degrades_to_current_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert_eq!(fallback_anchor(dir.path(), DEFAULT_ANCHOR_FILE), ".");
    }

    #[test]
    fn os_pkgs_results_anchor_to_fallback() {
        let result = result(Some("os-pkgs"), Some("alpine:3.19 (alpine 3.19.1)"));
        assert_eq!(resolve_target(&result, "my-app", "Dockerfile"), "Dockerfile");
    }

    #[test]
    fn absent_class_defaults_to_os_pkgs() {
        let result = result(None, Some("whatever"));
        assert_eq!(resolve_target(&result, "my-app", "."), ".");
    }

    #[test]
    fn marker_substring_anchors_to_fallback_even_for_config_class() {
        let result = result(Some("config"), Some("src/my-app/deploy.yaml"));
        assert_eq!(resolve_target(&result, "my-app", "Dockerfile"), "Dockerfile");
    }

    #[test]
    fn marker_match_is_not_path_segment_aware() {
        let result = result(Some("config"), Some("src/my-application/deploy.yaml"));
        assert_eq!(resolve_target(&result, "my-app", "Dockerfile"), "Dockerfile");
    }

    #[test]
    fn other_results_keep_their_own_target() {
        let result = result(Some("config"), Some("k8s/deploy.yaml"));
        assert_eq!(
            resolve_target(&result, "my-app", "Dockerfile"),
            "k8s/deploy.yaml"
        );
    }
}
