//! SBOM read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all SBOM data in a render-ready format.

use super::component_view::{ComponentView, PrimaryComponentView};
use super::dependency_view::DependencyView;
use crate::application::dto::SpecVersion;

/// Main read model for SBOM data
///
/// A sorted, trimmed snapshot of one render call. Formatters map it onto
/// their wire format without reordering anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomReadModel {
    pub spec_version: SpecVersion,
    /// BOM document version (incremented by the caller on regeneration)
    pub bom_version: u32,
    pub metadata: SbomMetadataView,
    /// Components sorted by purl
    pub components: Vec<ComponentView>,
    /// Dependency entries sorted by bom-ref
    pub dependencies: Vec<DependencyView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SbomMetadataView {
    /// Timestamp when the SBOM was created
    pub timestamp: String,
    pub serial_number: String,
    pub tool: ToolView,
    pub component: Option<PrimaryComponentView>,
    pub manufacturer: Option<ManufacturerView>,
}

/// The tool that generated the SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolView {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerView {
    pub name: Option<String>,
    pub url: Option<String>,
    pub contact: Option<ContactView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
