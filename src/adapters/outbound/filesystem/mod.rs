/// Filesystem adapters for file I/O operations
mod file_writer;
mod podfile_lock_reader;
mod podspec_repository;

pub use file_writer::FileSystemWriter;
pub use podfile_lock_reader::{manifest_path_for, parse_lockfile, PodfileLockReader, LOCKFILE_NAME};
pub use podspec_repository::{LocalPodspecRepository, LOCAL_PODSPECS_DIR};
