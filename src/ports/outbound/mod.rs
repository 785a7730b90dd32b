/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod pod_attributes_repository;
pub mod progress_reporter;

pub use formatter::SbomFormatter;
pub use lockfile_reader::{LockfileParseResult, LockfileReader};
pub use output_presenter::OutputPresenter;
pub use pod_attributes_repository::PodAttributesRepository;
pub use progress_reporter::ProgressReporter;
