use crate::sbom_generation::domain::{Component, Manufacturer, TargetDeclaration};
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the project directory containing Podfile.lock
    pub project_path: PathBuf,
    /// Explicit target declarations; `None` uses the lockfile's DEPENDENCIES
    pub targets: Option<Vec<TargetDeclaration>>,
    /// Whether targets labelled as tests are left out
    pub exclude_test_targets: bool,
    /// The artifact the BOM describes
    pub component: Option<Component>,
    pub manufacturer: Option<Manufacturer>,
}

impl SbomRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            targets: None,
            exclude_test_targets: false,
            component: None,
            manufacturer: None,
        }
    }

    pub fn with_targets(mut self, targets: Option<Vec<TargetDeclaration>>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_exclude_test_targets(mut self, exclude: bool) -> Self {
        self.exclude_test_targets = exclude;
        self
    }

    pub fn with_component(mut self, component: Option<Component>) -> Self {
        self.component = component;
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: Option<Manufacturer>) -> Self {
        self.manufacturer = manufacturer;
        self
    }
}
