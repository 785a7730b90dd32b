use crate::adapters::outbound::formatters::{CycloneDxJsonFormatter, CycloneDxXmlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// Selects the infrastructure adapter for an output format so use cases
/// only ever see the SbomFormatter port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cyclonedx_cocoapods::application::dto::OutputFormat;
    /// use cyclonedx_cocoapods::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Xml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Xml => Box::new(CycloneDxXmlFormatter::new()),
            OutputFormat::Json => Box::new(CycloneDxJsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cyclonedx_cocoapods::application::dto::OutputFormat;
    /// use cyclonedx_cocoapods::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Xml);
    /// assert_eq!(message, "📝 Generating CycloneDX XML output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Xml => "📝 Generating CycloneDX XML output...",
            OutputFormat::Json => "📝 Generating CycloneDX JSON output...",
        }
    }
}
