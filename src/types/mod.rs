pub mod sonar;
pub mod trivy;
