/// Mock implementations for testing
mod mock_attributes_repository;
mod mock_lockfile_reader;
mod mock_progress_reporter;

pub use mock_attributes_repository::MockAttributesRepository;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;
