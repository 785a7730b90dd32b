use cyclonedx_cocoapods::adapters::outbound::filesystem::parse_lockfile;
use cyclonedx_cocoapods::prelude::*;
use std::path::Path;

/// Mock LockfileReader parsing in-memory Podfile.lock content
pub struct MockLockfileReader {
    pub content: String,
    pub manifest_path: String,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            manifest_path: "SampleApp/Podfile.lock".to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            manifest_path: String::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_and_parse_lockfile(&self, _project_path: &Path) -> Result<LockfileParseResult> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        let mut result = parse_lockfile(&self.content)?;
        result.manifest_path = self.manifest_path.clone();
        Ok(result)
    }
}
