use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the wire format (CycloneDX XML or JSON).
pub trait SbomFormatter {
    /// Formats a prepared read model
    ///
    /// The model is already sorted and trimmed; formatters only map it
    /// onto their schema.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
