use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{
    LockfileParseResult, LockfileReader, PodAttributesRepository, ProgressReporter,
};
use crate::sbom_generation::domain::{AdjacencyCache, Bom, DependencyGraph, Pod, TargetDeclaration};
use crate::sbom_generation::policies::TargetInclusionPolicy;
use crate::sbom_generation::services::DependencyAnalyzer;
use crate::shared::Result;

/// Label of the implicit target built from the lockfile's DEPENDENCIES
pub const DEFAULT_TARGET_LABEL: &str = "Podfile";

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PAR` - PodAttributesRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<LR, PAR, PR> {
    lockfile_reader: LR,
    attributes_repository: PAR,
    progress_reporter: PR,
}

impl<LR, PAR, PR> GenerateSbomUseCase<LR, PAR, PR>
where
    LR: LockfileReader,
    PAR: PodAttributesRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, attributes_repository: PAR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            attributes_repository,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - Project path, target declarations and document metadata
    ///
    /// # Returns
    /// SbomResponse holding the assembled BOM aggregate
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read and parse lockfile
        let lockfile = self.read_and_report_lockfile(&request)?;

        // Step 2: Compute the closure of the included targets
        let targets = Self::resolve_targets(&request, &lockfile);
        let graph = self.analyze_dependencies(&request, &targets, &lockfile);

        // Step 3: Keep the included pods and enrich them from their podspecs
        let included = Self::select_included_pods(lockfile.pods, &graph);
        let (pods, pods_without_attributes) = self.enrich_pods(included);

        // Step 4: Assemble the aggregate
        let bom = Bom::from_graph(
            pods,
            &graph,
            request.component,
            request.manufacturer,
            lockfile.manifest_path,
        );

        Ok(SbomResponse::new(bom, pods_without_attributes))
    }

    /// Reads and parses the lockfile, reporting progress
    fn read_and_report_lockfile(&self, request: &SbomRequest) -> Result<LockfileParseResult> {
        self.progress_reporter.report(&format!(
            "📖 Loading Podfile.lock from: {}",
            request.project_path.display()
        ));

        let lockfile = self
            .lockfile_reader
            .read_and_parse_lockfile(&request.project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} locked pod(s)", lockfile.pods.len()));

        Ok(lockfile)
    }

    /// Explicit targets win; otherwise DEPENDENCIES form a single target.
    fn resolve_targets(
        request: &SbomRequest,
        lockfile: &LockfileParseResult,
    ) -> Vec<TargetDeclaration> {
        match &request.targets {
            Some(targets) => targets.clone(),
            None => vec![TargetDeclaration::new(
                DEFAULT_TARGET_LABEL,
                lockfile.declared_dependencies.clone(),
            )],
        }
    }

    fn analyze_dependencies(
        &self,
        request: &SbomRequest,
        targets: &[TargetDeclaration],
        lockfile: &LockfileParseResult,
    ) -> DependencyGraph {
        self.progress_reporter
            .report("📊 Parsing dependency information...");

        let policy = TargetInclusionPolicy::new(request.exclude_test_targets);
        let included_labels: Vec<&str> = targets
            .iter()
            .filter(|target| policy.includes(target))
            .map(TargetDeclaration::label)
            .collect();
        self.progress_reporter.report_debug(&format!(
            "Including all pods for targets: {:?}",
            included_labels
        ));

        let cache = AdjacencyCache::from_locked_entries(&lockfile.locked_entries);
        let graph = DependencyAnalyzer::analyze(targets, &cache, &policy);

        self.progress_reporter.report(&format!(
            "   - Top-level pods: {}",
            graph.top_level_pods().len()
        ));
        self.progress_reporter.report(&format!(
            "   - Included pods: {}",
            graph.included_pod_count()
        ));

        graph
    }

    /// Keeps lockfile order for the pods the closure reached
    fn select_included_pods(pods: Vec<Pod>, graph: &DependencyGraph) -> Vec<Pod> {
        pods.into_iter()
            .filter(|pod| {
                graph
                    .included_pods()
                    .binary_search_by(|name| name.as_str().cmp(pod.name()))
                    .is_ok()
            })
            .collect()
    }

    /// Populates every pod from its podspec.
    ///
    /// A missing or unreadable podspec is a warning: the pod stays in the BOM
    /// without descriptive fields and its name is returned in the second list.
    fn enrich_pods(&self, pods: Vec<Pod>) -> (Vec<Pod>, Vec<String>) {
        self.progress_reporter
            .report("🔍 Completing pod information from podspecs...");

        let total = pods.len();
        let mut enriched = Vec::with_capacity(total);
        let mut without_attributes = Vec::new();

        for (idx, pod) in pods.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(pod.name()));
            self.progress_reporter
                .report_debug(&format!("Completing information for {}", pod.name()));

            match self.populate_pod(&pod) {
                Ok(Some(populated)) => enriched.push(populated),
                Ok(None) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: No podspec found for {}",
                        pod.name()
                    ));
                    without_attributes.push(pod.name().to_string());
                    enriched.push(pod);
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to read podspec for {}: {}",
                        pod.name(),
                        e
                    ));
                    without_attributes.push(pod.name().to_string());
                    enriched.push(pod);
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Pod information completed: {}/{} pod(s) with podspec data",
            total - without_attributes.len(),
            total
        ));

        (enriched, without_attributes)
    }

    fn populate_pod(&self, pod: &Pod) -> Result<Option<Pod>> {
        self.attributes_repository
            .attributes_for(pod)?
            .map(|attributes| pod.populate(&attributes))
            .transpose()
    }
}
