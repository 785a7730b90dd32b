use crate::ports::outbound::PodAttributesRepository;
use crate::sbom_generation::domain::{Pod, PodAttributes};
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Directory where `pod install` caches podspecs of local and git pods
pub const LOCAL_PODSPECS_DIR: &str = "Pods/Local Podspecs";

/// LocalPodspecRepository adapter reading `*.podspec.json` files from disk
///
/// Looks in each search directory for `<Root>.podspec.json` and then for the
/// spec-repo layout `<Root>/<version>/<Root>.podspec.json`. The first match wins.
pub struct LocalPodspecRepository {
    search_dirs: Vec<PathBuf>,
}

impl LocalPodspecRepository {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Searches the project's `Pods/Local Podspecs` before `extra_dirs`.
    pub fn for_project(project_path: &Path, extra_dirs: Vec<PathBuf>) -> Self {
        let mut search_dirs = vec![project_path.join(LOCAL_PODSPECS_DIR)];
        search_dirs.extend(extra_dirs);
        Self::new(search_dirs)
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    fn locate(&self, pod: &Pod) -> Option<PathBuf> {
        let file_name = format!("{}.podspec.json", pod.root_name());
        self.search_dirs.iter().find_map(|dir| {
            [
                dir.join(&file_name),
                dir.join(pod.root_name()).join(pod.version()).join(&file_name),
            ]
            .into_iter()
            .find(|candidate| candidate.is_file())
        })
    }
}

impl PodAttributesRepository for LocalPodspecRepository {
    fn attributes_for(&self, pod: &Pod) -> Result<Option<PodAttributes>> {
        let Some(path) = self.locate(pod) else {
            return Ok(None);
        };

        let content = read_regular_file(&path, "podspec")?;
        let attributes = serde_json::from_str(&content).map_err(|e| SbomError::FileReadError {
            path: path.clone(),
            details: format!("Invalid podspec JSON: {}", e),
        })?;
        Ok(Some(attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PODSPEC: &str = r#"{
        "name": "MSAL",
        "version": "1.2.1",
        "authors": {"Microsoft": "nugetaad@microsoft.com"},
        "summary": "Microsoft Authentication Library",
        "license": {"type": "MIT", "file": "LICENSE"},
        "homepage": "https://github.com/AzureAD/microsoft-authentication-library-for-objc"
    }"#;

    fn pod(name: &str) -> Pod {
        Pod::new(name.to_string(), "1.2.1".to_string(), None, None).unwrap()
    }

    #[test]
    fn test_reads_local_podspec_for_subspec() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(LOCAL_PODSPECS_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("MSAL.podspec.json"), PODSPEC).unwrap();

        let repository = LocalPodspecRepository::for_project(temp_dir.path(), vec![]);
        let attributes = repository
            .attributes_for(&pod("MSAL/app-lib"))
            .unwrap()
            .unwrap();

        assert_eq!(
            attributes.summary.as_deref(),
            Some("Microsoft Authentication Library")
        );
        let populated = pod("MSAL").populate(&attributes).unwrap();
        assert_eq!(populated.author(), Some("Microsoft <nugetaad@microsoft.com>"));
        assert_eq!(populated.license().unwrap().identifier(), "MIT");
    }

    #[test]
    fn test_reads_versioned_layout_from_extra_dir() {
        let temp_dir = TempDir::new().unwrap();
        let specs = temp_dir.path().join("specs");
        let versioned = specs.join("MSAL").join("1.2.1");
        fs::create_dir_all(&versioned).unwrap();
        fs::write(versioned.join("MSAL.podspec.json"), PODSPEC).unwrap();

        let repository = LocalPodspecRepository::for_project(temp_dir.path(), vec![specs]);
        assert_eq!(repository.search_dirs().len(), 2);
        assert!(repository.attributes_for(&pod("MSAL")).unwrap().is_some());
    }

    #[test]
    fn test_missing_podspec_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repository = LocalPodspecRepository::for_project(temp_dir.path(), vec![]);
        assert!(repository.attributes_for(&pod("MSAL")).unwrap().is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("MSAL.podspec.json"), "{ nope").unwrap();

        let repository = LocalPodspecRepository::new(vec![temp_dir.path().to_path_buf()]);
        let err = repository.attributes_for(&pod("MSAL")).unwrap_err();
        assert!(format!("{}", err).contains("Invalid podspec JSON"));
    }
}
