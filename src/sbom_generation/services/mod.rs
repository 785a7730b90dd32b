mod dependency_analyzer;
mod sbom_generator;

pub use dependency_analyzer::DependencyAnalyzer;
pub use sbom_generator::{SbomGenerator, TOOL_NAME, TOOL_VENDOR};
