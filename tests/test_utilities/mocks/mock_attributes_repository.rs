use cyclonedx_cocoapods::prelude::*;
use cyclonedx_cocoapods::sbom_generation::domain::PodAttributes;
use std::collections::HashMap;

/// Mock PodAttributesRepository serving podspec JSON keyed by root pod name
#[derive(Default)]
pub struct MockAttributesRepository {
    podspecs: HashMap<String, String>,
}

impl MockAttributesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_podspec(mut self, root_name: &str, json: &str) -> Self {
        self.podspecs.insert(root_name.to_string(), json.to_string());
        self
    }
}

impl PodAttributesRepository for MockAttributesRepository {
    fn attributes_for(&self, pod: &Pod) -> Result<Option<PodAttributes>> {
        self.podspecs
            .get(pod.root_name())
            .map(|json| serde_json::from_str(json).map_err(Into::into))
            .transpose()
    }
}
