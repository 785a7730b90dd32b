use std::collections::{BTreeMap, HashMap};

/// A build target and the pods it declares directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDeclaration {
    label: String,
    pods: Vec<String>,
}

impl TargetDeclaration {
    pub fn new(label: impl Into<String>, pods: Vec<String>) -> Self {
        Self {
            label: label.into(),
            pods,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pods(&self) -> &[String] {
        &self.pods
    }
}

/// One raw `PODS` entry of a Podfile.lock.
///
/// Both strings still carry their annotations, e.g. `"Alamofire (5.6.2)"`
/// depending on `"Dep (~> 2.0)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedPodEntry {
    pub spec: String,
    pub dependencies: Vec<String>,
}

impl LockedPodEntry {
    pub fn new(spec: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            spec: spec.into(),
            dependencies,
        }
    }
}

/// Strips version/platform annotations from a lockfile reference.
pub fn bare_name(reference: &str) -> &str {
    reference.split_whitespace().next().unwrap_or_default()
}

/// Direct dependencies of every locked pod, keyed by bare name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyCache {
    entries: HashMap<String, Vec<String>>,
}

impl AdjacencyCache {
    pub fn from_locked_entries(entries: &[LockedPodEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| {
                (
                    bare_name(&entry.spec).to_string(),
                    entry
                        .dependencies
                        .iter()
                        .map(|dependency| bare_name(dependency).to_string())
                        .collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Direct dependencies of `name`, or `None` when the pod is not locked
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of the transitive closure over the included targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    included_pods: Vec<String>,
    top_level_pods: Vec<String>,
    dependencies: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new(
        included_pods: Vec<String>,
        top_level_pods: Vec<String>,
        dependencies: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            included_pods,
            top_level_pods,
            dependencies,
        }
    }

    /// Every pod reachable from the included targets, sorted by name
    pub fn included_pods(&self) -> &[String] {
        &self.included_pods
    }

    /// Pods declared directly by the included targets, in declaration order
    pub fn top_level_pods(&self) -> &[String] {
        &self.top_level_pods
    }

    /// Direct dependencies of every included pod known to the lockfile
    pub fn dependencies(&self) -> &BTreeMap<String, Vec<String>> {
        &self.dependencies
    }

    pub fn included_pod_count(&self) -> usize {
        self.included_pods.len()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }
}
