use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for Podfile.lock, podspec and config files (16 MB)
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Reads a text file after checking it is a regular file of acceptable size.
///
/// # Security
/// `symlink_metadata()` is used so the link itself is inspected rather than
/// its target. Symbolic links are rejected.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human-readable name used in error messages (e.g. "Podfile.lock")
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    read_regular_file_with_limit(path, file_description, MAX_FILE_SIZE)
}

/// Same as [`read_regular_file`] with an explicit size limit.
pub fn read_regular_file_with_limit(
    path: &Path,
    file_description: &str,
    max_size: u64,
) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_description,
                metadata.len(),
                max_size
            ),
            hint: "Check that the right file was selected".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile.lock");
        fs::write(&file_path, "PODS: []").unwrap();

        let content = read_regular_file(&file_path, "Podfile.lock").unwrap();
        assert_eq!(content, "PODS: []");
    }

    #[test]
    fn test_read_regular_file_nonexistent() {
        let result = read_regular_file(Path::new("/nonexistent/Podfile.lock"), "Podfile.lock");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_regular_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_regular_file(temp_dir.path(), "Podfile.lock");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a regular file"));
    }

    #[test]
    fn test_read_regular_file_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = read_regular_file_with_limit(&file_path, "podspec", 5);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        let link = temp_dir.path().join("Podfile.lock");
        fs::write(&target, "PODS: []").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_regular_file(&link, "Podfile.lock");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
