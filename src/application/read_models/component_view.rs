//! Component view structs for read model
//!
//! These structs provide a flattened, render-ready view of component data.

/// View representation of a pod component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// BOM reference identifier (the purl, possibly trimmed)
    pub bom_ref: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// SHA-1 checksum from Podfile.lock
    pub sha1_hash: Option<String>,
    pub license: Option<LicenseView>,
    /// Package URL (purl, possibly trimmed)
    pub purl: String,
    /// Homepage rendered as a `website` external reference
    pub homepage: Option<String>,
    pub evidence: Option<EvidenceView>,
}

/// View representation of license information
///
/// Exactly one of `id` and `name` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseView {
    /// SPDX license identifier
    pub id: Option<String>,
    /// Free-form license name
    pub name: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

/// How the identity of a component was established
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceView {
    /// Identity field the evidence is about (always `purl`)
    pub field: &'static str,
    pub confidence: f64,
    pub technique: &'static str,
    /// Manifest the identity was read from
    pub value: String,
}

/// View of the primary component in the metadata section
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryComponentView {
    pub component_type: &'static str,
    pub bom_ref: String,
    pub group: Option<String>,
    pub name: String,
    pub version: String,
    pub purl: String,
    pub build_system: Option<String>,
    pub vcs: Option<String>,
}
