use super::{OutputFormat, SpecVersion};
use crate::sbom_generation::policies::TrimPolicy;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Validated arguments of a single render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    bom_version: u32,
    trim: TrimPolicy,
    format: OutputFormat,
    spec_version: SpecVersion,
}

impl RenderOptions {
    /// # Errors
    /// `InvalidArgument` when `bom_version` is not a positive integer or
    /// `trim_length` is negative.
    pub fn new(bom_version: i64, trim_length: i64, format: OutputFormat) -> Result<Self> {
        let bom_version = u32::try_from(bom_version)
            .ok()
            .filter(|version| *version > 0)
            .ok_or_else(|| {
                SbomError::invalid_argument(
                    "BOM version",
                    bom_version.to_string(),
                    "should be an integer greater than 0",
                )
            })?;

        let trim_length = usize::try_from(trim_length).map_err(|_| {
            SbomError::invalid_argument(
                "string trim length",
                trim_length.to_string(),
                "should be a non-negative integer",
            )
        })?;

        Ok(Self {
            bom_version,
            trim: TrimPolicy::new(trim_length),
            format,
            spec_version: SpecVersion::default(),
        })
    }

    /// Parses raw string arguments, rejecting anything that is not an integer
    /// or a known format.
    pub fn parse(bom_version: &str, trim_length: &str, format: &str) -> Result<Self> {
        let version = bom_version.trim().parse::<i64>().map_err(|_| {
            SbomError::invalid_argument(
                "BOM version",
                bom_version,
                "should be an integer greater than 0",
            )
        })?;
        let trim = trim_length.trim().parse::<i64>().map_err(|_| {
            SbomError::invalid_argument(
                "string trim length",
                trim_length,
                "should be a non-negative integer",
            )
        })?;
        let format = format
            .parse::<OutputFormat>()
            .map_err(|reason| SbomError::invalid_argument("output format", format, reason))?;

        Self::new(version, trim, format)
    }

    pub fn with_spec_version(mut self, spec_version: SpecVersion) -> Self {
        self.spec_version = spec_version;
        self
    }

    pub fn bom_version(&self) -> u32 {
        self.bom_version
    }

    pub fn trim(&self) -> TrimPolicy {
        self.trim
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bom_version: 1,
            trim: TrimPolicy::default(),
            format: OutputFormat::default(),
            spec_version: SpecVersion::default(),
        }
    }
}
