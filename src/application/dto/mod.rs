/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod render_options;
mod sbom_request;
mod sbom_response;
mod spec_version;

pub use output_format::OutputFormat;
pub use render_options::RenderOptions;
pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
pub use spec_version::SpecVersion;
