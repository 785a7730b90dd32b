use super::package::Version;
use super::purl::{PurlBuilder, PurlType};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// CycloneDX component classification of the primary component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Application,
    Framework,
    Library,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    File,
    /// Rendered as `library`, identified under the `cocoapods` purl type
    CocoaPods,
}

impl ComponentType {
    pub const VALID_TYPES: &'static str =
        "application|framework|library|container|operating-system|device|firmware|file|cocoapods";

    /// Value written to the BOM `type` field
    pub fn bom_type(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Framework => "framework",
            ComponentType::Library | ComponentType::CocoaPods => "library",
            ComponentType::Container => "container",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
        }
    }

    pub fn purl_type(&self) -> PurlType {
        match self {
            ComponentType::CocoaPods => PurlType::CocoaPods,
            _ => PurlType::Generic,
        }
    }
}

impl FromStr for ComponentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "application" => Ok(ComponentType::Application),
            "framework" => Ok(ComponentType::Framework),
            "library" => Ok(ComponentType::Library),
            "container" => Ok(ComponentType::Container),
            "operating-system" => Ok(ComponentType::OperatingSystem),
            "device" => Ok(ComponentType::Device),
            "firmware" => Ok(ComponentType::Firmware),
            "file" => Ok(ComponentType::File),
            "cocoapods" => Ok(ComponentType::CocoaPods),
            _ => Err(SbomError::invalid_argument(
                "component type",
                s,
                format!("{} is not valid component type ({})", s, Self::VALID_TYPES),
            )
            .into()),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::CocoaPods => write!(f, "cocoapods"),
            other => write!(f, "{}", other.bom_type()),
        }
    }
}

/// The artifact the BOM describes (usually the application being built).
///
/// Its purl is computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    group: Option<String>,
    name: String,
    version: Version,
    component_type: ComponentType,
    build_system: Option<String>,
    vcs: Option<String>,
    purl: String,
}

impl Component {
    pub fn new(
        group: Option<String>,
        name: String,
        version: String,
        component_type: ComponentType,
    ) -> Result<Self> {
        if let Some(group) = &group {
            if group.trim().is_empty() {
                return Err(SbomError::invalid_argument(
                    "component group",
                    group.as_str(),
                    "Group, if specified, must be non empty",
                )
                .into());
            }
        }

        if name.trim().is_empty() {
            return Err(SbomError::invalid_argument(
                "component name",
                name,
                "Name must be non empty",
            )
            .into());
        }

        let version = Version::new(version)?;
        let purl = PurlBuilder::new(component_type.purl_type(), &name, version.as_str())
            .group(group.as_deref())
            .build();

        Ok(Self {
            group,
            name,
            version,
            component_type,
            build_system: None,
            vcs: None,
            purl,
        })
    }

    /// Attaches the build-system and version-control references.
    ///
    /// Neither participates in the purl.
    pub fn with_references(mut self, build_system: Option<String>, vcs: Option<String>) -> Self {
        self.build_system = build_system;
        self.vcs = vcs;
        self
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn build_system(&self) -> Option<&str> {
        self.build_system.as_deref()
    }

    pub fn vcs(&self) -> Option<&str> {
        self.vcs.as_deref()
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    /// The bom-ref of a component is its purl
    pub fn bom_ref(&self) -> &str {
        &self.purl
    }
}
