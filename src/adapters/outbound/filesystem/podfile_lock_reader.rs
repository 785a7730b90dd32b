use crate::ports::outbound::{LockfileParseResult, LockfileReader};
use crate::sbom_generation::domain::{
    bare_name, GitCheckout, GitRefType, LockedPodEntry, Pod, PodSource,
};
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde_yaml_ng::{Mapping, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const LOCKFILE_NAME: &str = "Podfile.lock";

/// Git reference keys in priority order
const CHECKOUT_REF_KEYS: [&str; 3] = [":tag", ":branch", ":commit"];

/// PodfileLockReader adapter for reading Podfile.lock from disk
///
/// This adapter implements the LockfileReader port. Provenance and checksums
/// are looked up by the pod's root name, so subspecs share them with their
/// parent pod.
pub struct PodfileLockReader {
    working_dir: Option<PathBuf>,
}

impl PodfileLockReader {
    pub fn new() -> Self {
        Self { working_dir: None }
    }

    /// Computes the manifest path relative to `working_dir` instead of the
    /// process working directory.
    pub fn with_working_dir(working_dir: PathBuf) -> Self {
        Self {
            working_dir: Some(working_dir),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        self.working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
    }
}

impl Default for PodfileLockReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for PodfileLockReader {
    fn read_and_parse_lockfile(&self, project_path: &Path) -> Result<LockfileParseResult> {
        if !project_path.is_dir() {
            return Err(SbomError::InvalidProjectPath {
                path: project_path.to_path_buf(),
                reason: "not a directory".to_string(),
            }
            .into());
        }

        let lockfile_path = project_path.join(LOCKFILE_NAME);
        if !lockfile_path.exists() {
            return Err(SbomError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "Podfile.lock does not exist in project directory \"{}\".\n   \
                     Please run 'pod install' before generating the BOM, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(&lockfile_path, LOCKFILE_NAME)?;
        let mut result = parse_lockfile(&content).map_err(|e| SbomError::LockfileParseError {
            path: lockfile_path.clone(),
            details: e.to_string(),
        })?;

        result.manifest_path = match self.working_dir() {
            Some(cwd) => manifest_path_for(&lockfile_path, &cwd),
            None => lockfile_path.display().to_string(),
        };
        Ok(result)
    }
}

/// Parses Podfile.lock content. `manifest_path` is left empty.
pub fn parse_lockfile(content: &str) -> Result<LockfileParseResult> {
    let document: Value = serde_yaml_ng::from_str(content)?;
    let root = document
        .as_mapping()
        .ok_or_else(|| anyhow::anyhow!("top level of the lockfile is not a mapping"))?;

    let locked_entries = parse_pods_section(root.get("PODS"))?;
    let declared_dependencies = string_list(root.get("DEPENDENCIES"))
        .iter()
        .map(|reference| bare_name(reference).to_string())
        .collect();
    let provenance = ProvenanceTable::from_lockfile(root);
    let checksums = string_map(root.get("SPEC CHECKSUMS"));

    let mut pods = Vec::with_capacity(locked_entries.len());
    for entry in &locked_entries {
        let name = bare_name(&entry.spec).to_string();
        let version = locked_version(&entry.spec).ok_or_else(|| {
            anyhow::anyhow!("PODS entry \"{}\" has no version", entry.spec)
        })?;
        let root_name = name.split('/').next().unwrap_or_default().to_string();
        let pod = Pod::new(
            name,
            version,
            provenance.source_for(&root_name),
            checksums.get(&root_name).cloned(),
        )?;
        pods.push(pod);
    }

    Ok(LockfileParseResult {
        pods,
        locked_entries,
        declared_dependencies,
        manifest_path: String::new(),
    })
}

/// Where the lockfile lives, as recorded in identity evidence.
///
/// Inside `cwd` the path is relative and prefixed with the directory name,
/// e.g. `SampleApp/Podfile.lock`. Elsewhere the path is kept as is.
pub fn manifest_path_for(lockfile_path: &Path, cwd: &Path) -> String {
    let absolute = if lockfile_path.is_absolute() {
        lockfile_path.to_path_buf()
    } else {
        cwd.join(lockfile_path)
    };
    let absolute = absolute.canonicalize().unwrap_or(absolute);
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());

    match (absolute.strip_prefix(&cwd), cwd.file_name()) {
        (Ok(relative), Some(dir_name)) => Path::new(dir_name)
            .join(relative)
            .to_string_lossy()
            .into_owned(),
        _ => lockfile_path.to_string_lossy().into_owned(),
    }
}

fn parse_pods_section(section: Option<&Value>) -> Result<Vec<LockedPodEntry>> {
    let Some(section) = section else {
        return Ok(Vec::new());
    };
    let items = section
        .as_sequence()
        .ok_or_else(|| anyhow::anyhow!("PODS is not a list"))?;

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Mapping(mapping) => {
                for (spec, dependencies) in mapping {
                    let spec = scalar_to_string(spec)
                        .ok_or_else(|| anyhow::anyhow!("PODS entry key is not a string"))?;
                    entries.push(LockedPodEntry::new(spec, string_list(Some(dependencies))));
                }
            }
            other => {
                let spec = scalar_to_string(other)
                    .ok_or_else(|| anyhow::anyhow!("unexpected PODS entry: {:?}", other))?;
                entries.push(LockedPodEntry::new(spec, Vec::new()));
            }
        }
    }
    Ok(entries)
}

/// Version inside the parentheses of `"Name (1.2.3)"`
fn locked_version(spec: &str) -> Option<String> {
    let start = spec.find('(')?;
    let end = spec[start..].find(')')? + start;
    let version = spec[start + 1..end].trim();
    (!version.is_empty()).then(|| version.to_string())
}

/// Provenance sections keyed by root pod name
#[derive(Debug, Default)]
struct ProvenanceTable {
    spec_repos: HashMap<String, String>,
    checkout_options: HashMap<String, HashMap<String, String>>,
    external_sources: HashMap<String, HashMap<String, String>>,
}

impl ProvenanceTable {
    fn from_lockfile(root: &Mapping) -> Self {
        let mut spec_repos = HashMap::new();
        if let Some(Value::Mapping(repos)) = root.get("SPEC REPOS") {
            for (repo, pods) in repos {
                let Some(repo) = scalar_to_string(repo) else {
                    continue;
                };
                for pod in string_list(Some(pods)) {
                    spec_repos.insert(pod, repo.clone());
                }
            }
        }

        Self {
            spec_repos,
            checkout_options: nested_string_map(root.get("CHECKOUT OPTIONS")),
            external_sources: nested_string_map(root.get("EXTERNAL SOURCES")),
        }
    }

    /// Spec repo first, then git checkout, then `:path`, then `:podspec`
    fn source_for(&self, root_name: &str) -> Option<PodSource> {
        if let Some(repo) = self.spec_repos.get(root_name) {
            return Some(PodSource::repository(repo.clone()));
        }

        if let Some(options) = self.checkout_options.get(root_name) {
            let url = options.get(":git").cloned().unwrap_or_default();
            let checkout = CHECKOUT_REF_KEYS.iter().find_map(|key| {
                let label = options.get(*key)?;
                let ref_type: GitRefType = key.parse().ok()?;
                Some(GitCheckout {
                    ref_type,
                    label: label.clone(),
                })
            });
            return Some(PodSource::git(url, checkout));
        }

        let external = self.external_sources.get(root_name)?;
        if let Some(path) = external.get(":path") {
            return Some(PodSource::local_path(path.clone()));
        }
        external
            .get(":podspec")
            .map(|url| PodSource::podspec(url.clone()))
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn string_map(value: Option<&Value>) -> HashMap<String, String> {
    let Some(Value::Mapping(mapping)) = value else {
        return HashMap::new();
    };
    mapping
        .iter()
        .filter_map(|(k, v)| Some((scalar_to_string(k)?, scalar_to_string(v)?)))
        .collect()
}

fn nested_string_map(value: Option<&Value>) -> HashMap<String, HashMap<String, String>> {
    let Some(Value::Mapping(mapping)) = value else {
        return HashMap::new();
    };
    mapping
        .iter()
        .filter_map(|(k, v)| Some((scalar_to_string(k)?, string_map(Some(v)))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_LOCKFILE: &str = r#"PODS:
  - Alamofire (5.6.2)
  - MSAL (1.2.1):
    - MSAL/app-lib (= 1.2.1)
  - MSAL/app-lib (1.2.1)
  - LocalPod (0.1.0)
  - SwiftLint (0.49.1)
  - Tagged (2.0.0-beta.1)

DEPENDENCIES:
  - Alamofire (~> 5.6)
  - LocalPod (from `../LocalPod`)
  - MSAL
  - Tagged (from `https://github.com/example/Tagged.git`, tag `2.0.0-beta.1`)

SPEC REPOS:
  trunk:
    - Alamofire
    - MSAL
  https://github.com/example/private-specs.git:
    - SwiftLint

EXTERNAL SOURCES:
  LocalPod:
    :path: "../LocalPod"
  Tagged:
    :git: https://github.com/example/Tagged.git
    :tag: 2.0.0-beta.1

CHECKOUT OPTIONS:
  Tagged:
    :git: https://github.com/example/Tagged.git
    :tag: 2.0.0-beta.1

SPEC CHECKSUMS:
  Alamofire: f3b09a368f1582ab751b3fff5460276e0d2cf5c9
  MSAL: 9a8ccc3a24b87624f4b40883adab3d98a9fdc00d

PODFILE CHECKSUM: 4bd4a4d3a9f2bf1b1d0f0e9c4b0a9d1b2c3d4e5f

COCOAPODS: 1.11.3
"#;

    fn find<'a>(result: &'a LockfileParseResult, name: &str) -> &'a Pod {
        result.pods.iter().find(|p| p.name() == name).unwrap()
    }

    #[test]
    fn test_parse_pods_and_dependencies() {
        let result = parse_lockfile(SAMPLE_LOCKFILE).unwrap();

        assert_eq!(result.pods.len(), 6);
        assert_eq!(result.locked_entries.len(), 6);
        assert_eq!(
            result.declared_dependencies,
            vec!["Alamofire", "LocalPod", "MSAL", "Tagged"]
        );

        let msal = result
            .locked_entries
            .iter()
            .find(|e| e.spec == "MSAL (1.2.1)")
            .unwrap();
        assert_eq!(msal.dependencies, vec!["MSAL/app-lib (= 1.2.1)"]);
    }

    #[test]
    fn test_sources_follow_root_name() {
        let result = parse_lockfile(SAMPLE_LOCKFILE).unwrap();

        assert_eq!(
            find(&result, "MSAL/app-lib").source(),
            Some(&PodSource::repository("trunk"))
        );
        assert_eq!(
            find(&result, "MSAL/app-lib").checksum(),
            Some("9a8ccc3a24b87624f4b40883adab3d98a9fdc00d")
        );
        assert_eq!(
            find(&result, "SwiftLint").purl(),
            "pkg:cocoapods/SwiftLint@0.49.1?repository_url=https%3A%2F%2Fgithub.com%2Fexample%2Fprivate-specs.git"
        );
        assert_eq!(
            find(&result, "LocalPod").source(),
            Some(&PodSource::local_path("../LocalPod"))
        );
    }

    #[test]
    fn test_checkout_options_take_precedence_over_external_sources() {
        let result = parse_lockfile(SAMPLE_LOCKFILE).unwrap();

        assert_eq!(
            find(&result, "Tagged").source(),
            Some(&PodSource::git(
                "https://github.com/example/Tagged.git",
                Some(GitCheckout {
                    ref_type: GitRefType::Tag,
                    label: "2.0.0-beta.1".to_string(),
                })
            ))
        );
    }

    #[test]
    fn test_numeric_scalars_are_accepted() {
        let content = "PODS:\n  - Numbers (1.0)\nSPEC REPOS:\n  trunk:\n    - Numbers\nEXTERNAL SOURCES:\n  Other:\n    :path: 42\n";
        let result = parse_lockfile(content).unwrap();
        assert_eq!(result.pods[0].version(), "1.0");
        assert!(result.declared_dependencies.is_empty());
    }

    #[test]
    fn test_podspec_source() {
        let content = "PODS:\n  - Remote (3.0)\nEXTERNAL SOURCES:\n  Remote:\n    :podspec: https://example.com/Remote.podspec\n";
        let result = parse_lockfile(content).unwrap();
        assert_eq!(
            result.pods[0].source(),
            Some(&PodSource::podspec("https://example.com/Remote.podspec"))
        );
    }

    #[test]
    fn test_malformed_entries_are_rejected() {
        assert!(parse_lockfile("PODS: nope").is_err());
        assert!(parse_lockfile("PODS:\n  - NoVersion\n").is_err());
        assert!(parse_lockfile("- just\n- a list\n").is_err());
    }

    #[test]
    fn test_locked_version() {
        assert_eq!(locked_version("MSAL (1.2.1)"), Some("1.2.1".to_string()));
        assert_eq!(locked_version("Dep (~> 2.0)"), Some("~> 2.0".to_string()));
        assert_eq!(locked_version("Dep"), None);
    }

    #[test]
    fn test_read_lockfile_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("SampleApp");
        fs::create_dir(&project).unwrap();
        fs::write(project.join(LOCKFILE_NAME), SAMPLE_LOCKFILE).unwrap();

        let reader = PodfileLockReader::with_working_dir(project.clone());
        let result = reader.read_and_parse_lockfile(&project).unwrap();

        assert_eq!(result.pods.len(), 6);
        assert_eq!(result.manifest_path, "SampleApp/Podfile.lock");
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = PodfileLockReader::new();
        let err = reader.read_and_parse_lockfile(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::LockfileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_lockfile_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LOCKFILE_NAME), "PODS: [unclosed").unwrap();

        let reader = PodfileLockReader::new();
        let err = reader.read_and_parse_lockfile(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::LockfileParseError { .. })
        ));
    }

    #[test]
    fn test_manifest_path_outside_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let cwd = temp_dir.path().join("elsewhere");
        fs::create_dir(&cwd).unwrap();
        let lockfile = temp_dir.path().join(LOCKFILE_NAME);
        fs::write(&lockfile, "PODS: []").unwrap();

        assert_eq!(
            manifest_path_for(&lockfile, &cwd),
            lockfile.to_string_lossy()
        );
    }
}
