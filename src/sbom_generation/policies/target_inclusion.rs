use crate::sbom_generation::domain::TargetDeclaration;

/// Decides which build targets contribute pods to the BOM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetInclusionPolicy {
    exclude_test_targets: bool,
}

impl TargetInclusionPolicy {
    pub fn new(exclude_test_targets: bool) -> Self {
        Self {
            exclude_test_targets,
        }
    }

    /// Test targets are those whose label contains "test" in any case.
    pub fn includes(&self, target: &TargetDeclaration) -> bool {
        !self.exclude_test_targets || !target.label().to_lowercase().contains("test")
    }
}
