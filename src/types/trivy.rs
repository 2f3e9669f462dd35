use serde::Deserialize;

// Wire names follow Trivy's JSON report. Every field is optional or
// defaults to empty so partial findings never abort a run.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrivyReport {
    #[serde(rename = "Results", default)]
    pub results: Vec<ScanResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanResult {
    #[serde(rename = "Class")]
    pub class: Option<String>,

    #[serde(rename = "Target")]
    pub target: Option<String>,

    #[serde(rename = "Vulnerabilities", default)]
    pub vulnerabilities: Vec<Vulnerability>,

    #[serde(rename = "Misconfigurations", default)]
    pub misconfigurations: Vec<Misconfiguration>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: Option<String>,

    #[serde(rename = "Severity")]
    pub severity: Option<String>,

    #[serde(rename = "PkgName")]
    pub pkg_name: Option<String>,

    #[serde(rename = "InstalledVersion")]
    pub installed_version: Option<String>,

    #[serde(rename = "FixedVersion")]
    pub fixed_version: Option<String>,

    #[serde(rename = "Title")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Misconfiguration {
    #[serde(rename = "ID")]
    pub id: Option<String>,

    #[serde(rename = "Severity")]
    pub severity: Option<String>,

    #[serde(rename = "Message")]
    pub message: Option<String>,

    #[serde(rename = "IacMetadata")]
    pub iac_metadata: Option<IacMetadata>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IacMetadata {
    #[serde(rename = "StartLine")]
    pub start_line: Option<u32>,
}
