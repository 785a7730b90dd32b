/// Output format enumeration for SBOM generation
///
/// Both formats carry the same CycloneDX document; only the encoding differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// CycloneDX XML (default)
    #[default]
    Xml,
    /// CycloneDX JSON
    Json,
}

impl OutputFormat {
    /// File name used when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "bom.xml",
            OutputFormat::Json => "bom.json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'xml' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
