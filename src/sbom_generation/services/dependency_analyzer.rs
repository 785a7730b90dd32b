use crate::sbom_generation::domain::{AdjacencyCache, DependencyGraph, TargetDeclaration};
use crate::sbom_generation::policies::TargetInclusionPolicy;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// DependencyAnalyzer service computing the transitive pod closure
///
/// This service contains pure business logic for dependency graph analysis.
/// It has no I/O dependencies and works only with domain objects.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Computes every pod used by the included targets.
    ///
    /// # Arguments
    /// * `targets` - Build targets with their directly declared pods
    /// * `cache` - Direct dependencies of every locked pod
    /// * `policy` - Which targets take part
    ///
    /// # Returns
    /// A DependencyGraph whose pods are sorted by name. Names the lockfile
    /// does not know (e.g. a dependency only locked on another platform) are
    /// left out rather than reported as errors.
    pub fn analyze(
        targets: &[TargetDeclaration],
        cache: &AdjacencyCache,
        policy: &TargetInclusionPolicy,
    ) -> DependencyGraph {
        let mut top_level_pods = Vec::new();
        let mut seen = HashSet::new();
        for target in targets.iter().filter(|target| policy.includes(target)) {
            for pod in target.pods() {
                if cache.contains(pod) && seen.insert(pod.clone()) {
                    top_level_pods.push(pod.clone());
                }
            }
        }

        let mut queue: VecDeque<String> = top_level_pods.iter().cloned().collect();
        let mut dependencies = BTreeMap::new();

        while let Some(name) = queue.pop_front() {
            let Some(direct) = cache.get(&name) else {
                continue;
            };

            let mut children: Vec<String> = Vec::with_capacity(direct.len());
            for child in direct {
                if !cache.contains(child) || children.contains(child) {
                    continue;
                }
                children.push(child.clone());
                if seen.insert(child.clone()) {
                    queue.push_back(child.clone());
                }
            }
            dependencies.insert(name, children);
        }

        let mut included_pods: Vec<String> = seen.into_iter().collect();
        included_pods.sort();

        DependencyGraph::new(included_pods, top_level_pods, dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::LockedPodEntry;
    use proptest::prelude::*;

    fn create_test_cache(entries: &[(&str, &[&str])]) -> AdjacencyCache {
        let entries: Vec<LockedPodEntry> = entries
            .iter()
            .map(|(spec, deps)| {
                LockedPodEntry::new(*spec, deps.iter().map(|d| d.to_string()).collect())
            })
            .collect();
        AdjacencyCache::from_locked_entries(&entries)
    }

    fn target(label: &str, pods: &[&str]) -> TargetDeclaration {
        TargetDeclaration::new(label, pods.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_analyze_simple_dependency_tree() {
        let cache = create_test_cache(&[
            ("Alamofire (5.6.2)", &[]),
            ("MSAL (1.2.1)", &["MSAL/app-lib (= 1.2.1)"]),
            ("MSAL/app-lib (1.2.1)", &[]),
        ]);
        let targets = vec![target("App", &["MSAL", "Alamofire"])];

        let graph =
            DependencyAnalyzer::analyze(&targets, &cache, &TargetInclusionPolicy::default());

        assert_eq!(graph.included_pods(), &["Alamofire", "MSAL", "MSAL/app-lib"]);
        assert_eq!(graph.top_level_pods(), &["MSAL", "Alamofire"]);
        assert_eq!(graph.dependencies()["MSAL"], vec!["MSAL/app-lib".to_string()]);
        assert!(graph.dependencies()["Alamofire"].is_empty());
        assert!(graph.dependencies()["MSAL/app-lib"].is_empty());
    }

    #[test]
    fn test_analyze_deep_transitive_chain() {
        let cache = create_test_cache(&[
            ("A (1.0)", &["B (~> 1.0)"]),
            ("B (1.0)", &["C"]),
            ("C (1.0)", &["D"]),
            ("D (1.0)", &[]),
            ("Unused (1.0)", &[]),
        ]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &["A"])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert_eq!(graph.included_pods(), &["A", "B", "C", "D"]);
        assert_eq!(graph.dependencies().len(), 4);
    }

    #[test]
    fn test_analyze_no_declared_pods() {
        let cache = create_test_cache(&[("A (1.0)", &[])]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &[])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert!(graph.included_pods().is_empty());
        assert!(graph.dependencies().is_empty());
    }

    #[test]
    fn test_analyze_missing_platform_dependency_is_skipped() {
        let cache = create_test_cache(&[("A (1.0)", &["WatchOnlyPod (1.0)", "B"]), ("B (1.0)", &[])]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &["A"])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert_eq!(graph.included_pods(), &["A", "B"]);
        assert_eq!(graph.dependencies()["A"], vec!["B".to_string()]);
    }

    #[test]
    fn test_analyze_shared_pod_across_targets_is_processed_once() {
        let cache = create_test_cache(&[
            ("A (1.0)", &["Shared"]),
            ("B (1.0)", &["Shared"]),
            ("Shared (1.0)", &[]),
        ]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &["A", "Shared"]), target("Widget", &["B", "Shared"])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert_eq!(graph.included_pods(), &["A", "B", "Shared"]);
        assert_eq!(graph.top_level_pods(), &["A", "Shared", "B"]);
    }

    #[test]
    fn test_analyze_duplicate_edges_are_collapsed() {
        let cache = create_test_cache(&[("A (1.0)", &["B (>= 1.0)", "B (< 2.0)"]), ("B (1.0)", &[])]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &["A"])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert_eq!(graph.dependencies()["A"], vec!["B".to_string()]);
    }

    #[test]
    fn test_analyze_excludes_test_targets() {
        let cache = create_test_cache(&[("A (1.0)", &[]), ("Quick (5.0)", &["Nimble"]), ("Nimble (10.0)", &[])]);
        let targets = vec![target("App", &["A"]), target("AppTests", &["Quick"])];

        let all = DependencyAnalyzer::analyze(&targets, &cache, &TargetInclusionPolicy::new(false));
        assert_eq!(all.included_pods(), &["A", "Nimble", "Quick"]);

        let filtered = DependencyAnalyzer::analyze(&targets, &cache, &TargetInclusionPolicy::new(true));
        assert_eq!(filtered.included_pods(), &["A"]);
    }

    #[test]
    fn test_analyze_tolerates_cycles() {
        let cache = create_test_cache(&[("A (1.0)", &["B"]), ("B (1.0)", &["A"])]);
        let graph = DependencyAnalyzer::analyze(
            &[target("App", &["A"])],
            &cache,
            &TargetInclusionPolicy::default(),
        );

        assert_eq!(graph.included_pods(), &["A", "B"]);
        assert_eq!(graph.dependencies()["B"], vec!["A".to_string()]);
    }

    fn reachable(start: &[String], edges: &BTreeMap<String, Vec<String>>) -> Vec<String> {
        let mut seen: std::collections::BTreeSet<String> = start.iter().cloned().collect();
        let mut stack: Vec<String> = start.to_vec();
        while let Some(name) = stack.pop() {
            for child in edges.get(&name).into_iter().flatten() {
                if seen.insert(child.clone()) {
                    stack.push(child.clone());
                }
            }
        }
        seen.into_iter().collect()
    }

    fn arb_lockfile() -> impl Strategy<Value = (BTreeMap<String, Vec<String>>, Vec<String>)> {
        (1usize..12).prop_flat_map(|size| {
            let names: Vec<String> = (0..size).map(|i| format!("Pod{}", i)).collect();
            let edges = prop::collection::vec(prop::collection::vec(0..size, 0..4), size);
            let declared = prop::collection::vec(0..size, 0..4);
            (Just(names), edges, declared).prop_map(|(names, edges, declared)| {
                let map = names
                    .iter()
                    .zip(edges)
                    .map(|(name, children)| {
                        (name.clone(), children.into_iter().map(|i| names[i].clone()).collect())
                    })
                    .collect();
                let declared = declared.into_iter().map(|i| names[i].clone()).collect();
                (map, declared)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_closure_is_complete_and_sound((edges, declared) in arb_lockfile()) {
            let entries: Vec<LockedPodEntry> = edges
                .iter()
                .map(|(name, children)| LockedPodEntry::new(format!("{} (1.0)", name), children.clone()))
                .collect();
            let cache = AdjacencyCache::from_locked_entries(&entries);
            let targets = vec![TargetDeclaration::new("App", declared.clone())];

            let graph = DependencyAnalyzer::analyze(&targets, &cache, &TargetInclusionPolicy::default());

            prop_assert_eq!(graph.included_pods().to_vec(), reachable(&declared, &edges));
        }

        #[test]
        fn prop_closure_is_idempotent((edges, declared) in arb_lockfile()) {
            let entries: Vec<LockedPodEntry> = edges
                .iter()
                .map(|(name, children)| LockedPodEntry::new(name.clone(), children.clone()))
                .collect();
            let cache = AdjacencyCache::from_locked_entries(&entries);
            let targets = vec![TargetDeclaration::new("App", declared)];
            let policy = TargetInclusionPolicy::default();

            let first = DependencyAnalyzer::analyze(&targets, &cache, &policy);
            let second = DependencyAnalyzer::analyze(&targets, &cache, &policy);
            prop_assert_eq!(first, second);
        }
    }
}
