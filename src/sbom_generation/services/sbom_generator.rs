use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Vendor recorded in the BOM tool section
pub const TOOL_VENDOR: &str = "CycloneDX";

/// Name recorded in the BOM tool section
pub const TOOL_NAME: &str = "cyclonedx-cocoapods";

/// SbomGenerator service for generating SBOM metadata
///
/// Every call produces a fresh serial number and timestamp.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with the current time (UTC, whole seconds)
    /// and a random UUID serial number.
    pub fn generate_metadata(tool_vendor: &str, tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            timestamp,
            tool_vendor.to_string(),
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates SBOM metadata identifying this tool
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_VENDOR, TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
