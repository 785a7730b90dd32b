use crate::sbom_generation::domain::{LockedPodEntry, Pod};
use crate::shared::Result;
use std::path::Path;

/// Everything the BOM needs from a Podfile.lock
#[derive(Debug, Clone, Default)]
pub struct LockfileParseResult {
    /// Every locked pod, with provenance and checksum
    pub pods: Vec<Pod>,
    /// Raw `PODS` entries used to build the adjacency cache
    pub locked_entries: Vec<LockedPodEntry>,
    /// Bare names listed under `DEPENDENCIES`
    pub declared_dependencies: Vec<String>,
    /// Path of the lockfile as recorded in identity evidence
    pub manifest_path: String,
}

/// LockfileReader port for reading and parsing Podfile.lock
///
/// This port abstracts the file system operations needed to read
/// the lockfile from a CocoaPods project directory.
pub trait LockfileReader {
    /// Reads and parses Podfile.lock from the given project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - Podfile.lock does not exist
    /// - The file cannot be read
    /// - The YAML is malformed or a locked pod fails validation
    fn read_and_parse_lockfile(&self, project_path: &Path) -> Result<LockfileParseResult>;
}
