use super::component::Component;
use super::dependency_graph::DependencyGraph;
use super::manufacturer::Manufacturer;
use super::package::Pod;
use std::collections::{BTreeMap, HashMap};

/// BOM aggregate: everything a render needs apart from the volatile metadata.
///
/// Dependencies are keyed by bom-ref (the purl). Every pod has an entry,
/// possibly empty, and so does the primary component when one is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Bom {
    pods: Vec<Pod>,
    component: Option<Component>,
    manufacturer: Option<Manufacturer>,
    dependencies: BTreeMap<String, Vec<String>>,
    manifest_path: String,
}

impl Bom {
    pub fn new(
        pods: Vec<Pod>,
        component: Option<Component>,
        manufacturer: Option<Manufacturer>,
        mut dependencies: BTreeMap<String, Vec<String>>,
        manifest_path: impl Into<String>,
    ) -> Self {
        for pod in &pods {
            dependencies.entry(pod.purl()).or_default();
        }
        if let Some(component) = &component {
            dependencies.entry(component.bom_ref().to_string()).or_default();
        }
        for children in dependencies.values_mut() {
            let mut seen = std::collections::HashSet::new();
            children.retain(|child| seen.insert(child.clone()));
        }

        Self {
            pods,
            component,
            manufacturer,
            dependencies,
            manifest_path: manifest_path.into(),
        }
    }

    /// Builds the aggregate from a name-based closure.
    ///
    /// Names are translated to purls through `pods`; a name without a pod is
    /// dropped. The primary component depends on the top-level pods.
    pub fn from_graph(
        pods: Vec<Pod>,
        graph: &DependencyGraph,
        component: Option<Component>,
        manufacturer: Option<Manufacturer>,
        manifest_path: impl Into<String>,
    ) -> Self {
        let purls: HashMap<&str, String> = pods.iter().map(|pod| (pod.name(), pod.purl())).collect();
        let to_purls = |names: &[String]| -> Vec<String> {
            names
                .iter()
                .filter_map(|name| purls.get(name.as_str()).cloned())
                .collect()
        };

        let mut dependencies: BTreeMap<String, Vec<String>> = graph
            .dependencies()
            .iter()
            .filter_map(|(name, children)| {
                purls
                    .get(name.as_str())
                    .map(|purl| (purl.clone(), to_purls(children)))
            })
            .collect();

        if let Some(component) = &component {
            dependencies.insert(
                component.bom_ref().to_string(),
                to_purls(graph.top_level_pods()),
            );
        }

        Self::new(pods, component, manufacturer, dependencies, manifest_path)
    }

    pub fn pods(&self) -> &[Pod] {
        &self.pods
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }

    pub fn manufacturer(&self) -> Option<&Manufacturer> {
        self.manufacturer.as_ref()
    }

    pub fn dependencies(&self) -> &BTreeMap<String, Vec<String>> {
        &self.dependencies
    }

    /// Path of the manifest recorded as identity evidence
    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::component::ComponentType;

    fn create_test_pod(name: &str, version: &str) -> Pod {
        Pod::new(name.to_string(), version.to_string(), None, None).unwrap()
    }

    fn create_test_pods() -> Vec<Pod> {
        vec![
            create_test_pod("Alamofire", "5.6.2"),
            create_test_pod("MSAL", "1.2.1"),
            create_test_pod("MSAL/app-lib", "1.2.1"),
        ]
    }

    #[test]
    fn test_every_pod_gets_a_dependency_entry() {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(
            "pkg:cocoapods/MSAL@1.2.1".to_string(),
            vec!["pkg:cocoapods/MSAL@1.2.1#app-lib".to_string()],
        );
        let bom = Bom::new(create_test_pods(), None, None, dependencies, "Podfile.lock");

        assert_eq!(bom.dependencies().len(), 3);
        assert!(bom.dependencies()["pkg:cocoapods/Alamofire@5.6.2"].is_empty());
        assert_eq!(bom.dependencies()["pkg:cocoapods/MSAL@1.2.1"].len(), 1);
        assert_eq!(bom.manifest_path(), "Podfile.lock");
    }

    #[test]
    fn test_duplicate_children_are_removed() {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(
            "pkg:cocoapods/MSAL@1.2.1".to_string(),
            vec![
                "pkg:cocoapods/MSAL@1.2.1#app-lib".to_string(),
                "pkg:cocoapods/MSAL@1.2.1#app-lib".to_string(),
            ],
        );
        let bom = Bom::new(create_test_pods(), None, None, dependencies, "Podfile.lock");
        assert_eq!(bom.dependencies()["pkg:cocoapods/MSAL@1.2.1"].len(), 1);
    }

    #[test]
    fn test_from_graph_translates_names_and_adds_component() {
        let mut edges = BTreeMap::new();
        edges.insert("MSAL".to_string(), vec!["MSAL/app-lib".to_string()]);
        edges.insert("Alamofire".to_string(), vec![]);
        edges.insert("MSAL/app-lib".to_string(), vec![]);
        let graph = DependencyGraph::new(
            vec!["Alamofire".into(), "MSAL".into(), "MSAL/app-lib".into()],
            vec!["MSAL".into(), "Alamofire".into()],
            edges,
        );
        let component = Component::new(
            None,
            "Application".to_string(),
            "1.0".to_string(),
            ComponentType::Application,
        )
        .unwrap();

        let bom = Bom::from_graph(create_test_pods(), &graph, Some(component), None, "App/Podfile.lock");

        assert_eq!(bom.dependencies().len(), 4);
        assert_eq!(
            bom.dependencies()["pkg:generic/Application@1.0"],
            vec![
                "pkg:cocoapods/MSAL@1.2.1".to_string(),
                "pkg:cocoapods/Alamofire@5.6.2".to_string()
            ]
        );
        assert_eq!(
            bom.dependencies()["pkg:cocoapods/MSAL@1.2.1"],
            vec!["pkg:cocoapods/MSAL@1.2.1#app-lib".to_string()]
        );
    }
}
