/// Console adapters writing to stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
