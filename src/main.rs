use cyclonedx_cocoapods::adapters::outbound::console::StderrProgressReporter;
use cyclonedx_cocoapods::adapters::outbound::filesystem::{
    FileSystemWriter, LocalPodspecRepository, PodfileLockReader,
};
use cyclonedx_cocoapods::application::dto::SbomRequest;
use cyclonedx_cocoapods::application::factories::FormatterFactory;
use cyclonedx_cocoapods::application::use_cases::{GenerateSbomUseCase, RenderBomUseCase};
use cyclonedx_cocoapods::cli::Args;
use cyclonedx_cocoapods::config::{discover_config, load_config_from_path, CONFIG_FILENAME};
use cyclonedx_cocoapods::ports::outbound::{OutputPresenter, ProgressReporter};
use cyclonedx_cocoapods::shared::error::{ExitCode, SbomError};
use cyclonedx_cocoapods::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let project_path = args.project_path();
    validate_project_path(&project_path)?;

    let config = match &args.config {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(config)
        }
        None => {
            let config = discover_config(&project_path)?;
            if config.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    project_path.join(CONFIG_FILENAME).display()
                );
            }
            config
        }
    };
    let settings = args.resolve(config)?;

    // Create adapters (Dependency Injection)
    let lockfile_reader = PodfileLockReader::new();
    let attributes_repository =
        LocalPodspecRepository::for_project(&settings.project_path, settings.podspec_dirs.clone());
    let progress_reporter = StderrProgressReporter::new(settings.verbose);
    progress_reporter.report_debug(&format!("Running cyclonedx-cocoapods with: {:?}", settings));

    let request = SbomRequest::new(settings.project_path.clone())
        .with_targets(settings.targets.clone())
        .with_exclude_test_targets(settings.exclude_test_targets)
        .with_component(settings.component.clone())
        .with_manufacturer(settings.manufacturer.clone());

    let use_case = GenerateSbomUseCase::new(lockfile_reader, attributes_repository, progress_reporter);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.render.format()));
    let document = RenderBomUseCase::execute(&response.bom, &settings.render)?;

    let writer = FileSystemWriter::new(settings.output.clone());
    writer.present(&document)?;

    eprintln!("✅ BOM written to {}", writer.output_path().display());
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile.lock");
        fs::write(&file_path, "PODS: []").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }
}
