//! Dependency view structs for read model

/// One entry of the BOM dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyView {
    /// bom-ref of the depending component
    pub bom_ref: String,
    /// bom-refs of its direct dependencies, sorted
    pub depends_on: Vec<String>,
}
