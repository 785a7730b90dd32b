use crate::sbom_generation::domain::Bom;

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Holds the assembled BOM aggregate; rendering happens separately so the
/// same aggregate can be rendered in several formats.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    pub bom: Bom,
    /// Pods for which no podspec was found
    pub pods_without_attributes: Vec<String>,
}

impl SbomResponse {
    pub fn new(bom: Bom, pods_without_attributes: Vec<String>) -> Self {
        Self {
            bom,
            pods_without_attributes,
        }
    }
}
