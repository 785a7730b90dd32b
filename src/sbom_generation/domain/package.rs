use super::license::License;
use super::pod_attributes::{LicenseAttribute, PodAttributes};
use super::purl::{PurlBuilder, PurlType};
use super::source::PodSource;
use crate::shared::error::SbomError;
use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length for pod names (security limit)
const MAX_POD_NAME_LENGTH: usize = 255;

/// Maximum length for pod versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// RubyGems version grammar: dot separated segments, optional pre-release suffix.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[0-9]+(?:\.[0-9a-zA-Z]+)*(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?\s*$")
        .expect("static regex")
});

static CHECKSUM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-fA-F0-9]{40}$").expect("static regex"));

/// Algorithm of every checksum recorded in Podfile.lock
pub const CHECKSUM_ALGORITHM: &str = "SHA-1";

/// NewType wrapper for a pod name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PodName(String);

impl PodName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid("pod name", &name, "Name must be non empty"));
        }

        if name.len() > MAX_POD_NAME_LENGTH {
            return Err(invalid(
                "pod name",
                &name,
                &format!(
                    "Name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_POD_NAME_LENGTH
                ),
            ));
        }

        if name.contains(' ') {
            return Err(invalid("pod name", &name, "Name shouldn't contain spaces"));
        }

        // `pod lib create` rejects '+', but hundreds of published pods use it.
        if name.starts_with('.') {
            return Err(invalid("pod name", &name, "Name shouldn't start with a dot"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name before the first `/` (the pod owning a subspec)
    pub fn root(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for PodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a version string following the RubyGems grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.len() > MAX_VERSION_LENGTH {
            return Err(invalid(
                "version",
                &version,
                &format!("Version is longer than {} bytes", MAX_VERSION_LENGTH),
            ));
        }

        if !VERSION_PATTERN.is_match(&version) {
            return Err(invalid("version", &version, "Malformed version number string"));
        }

        Ok(Self(version.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SHA-1 checksum of a pod's podspec, 40 hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    pub fn new(checksum: String) -> Result<Self> {
        if !CHECKSUM_PATTERN.is_match(&checksum) {
            return Err(invalid(
                "checksum",
                &checksum,
                "checksum is not a valid SHA-1 hash",
            ));
        }
        Ok(Self(checksum))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A resolved pod from Podfile.lock.
///
/// Identity fields are fixed at construction. Descriptive fields (author,
/// description, license, homepage) are only set through [`Pod::populate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pod {
    name: PodName,
    version: Version,
    source: Option<PodSource>,
    checksum: Option<Checksum>,
    author: Option<String>,
    description: Option<String>,
    license: Option<License>,
    homepage: Option<String>,
}

impl Pod {
    pub fn new(
        name: String,
        version: String,
        source: Option<PodSource>,
        checksum: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: PodName::new(name)?,
            version: Version::new(version)?,
            source,
            checksum: checksum.map(Checksum::new).transpose()?,
            author: None,
            description: None,
            license: None,
            homepage: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root_name(&self) -> &str {
        self.name.root()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn source(&self) -> Option<&PodSource> {
        self.source.as_ref()
    }

    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_ref().map(Checksum::as_str)
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license(&self) -> Option<&License> {
        self.license.as_ref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// Package URL of this pod; subspecs become a purl subpath.
    pub fn purl(&self) -> String {
        PurlBuilder::new(PurlType::CocoaPods, self.name(), self.version())
            .qualifier(self.source.as_ref().and_then(PodSource::source_qualifier))
            .build()
    }

    /// Returns a copy with all descriptive fields replaced by `attributes`.
    ///
    /// Fields missing from `attributes` are cleared, never kept from a
    /// previous call.
    pub fn populate(&self, attributes: &PodAttributes) -> Result<Self> {
        let license = match &attributes.license {
            Some(LicenseAttribute::Identifier(identifier)) => Some(License::new(identifier)?),
            Some(LicenseAttribute::Detailed { license_type, text }) => match license_type {
                Some(identifier) if !identifier.trim().is_empty() => {
                    Some(License::new(identifier)?.with_text(text.clone()))
                }
                _ => None,
            },
            None => None,
        };

        Ok(Self {
            author: attributes.people().map(|people| people.display()),
            description: attributes
                .description
                .clone()
                .or_else(|| attributes.summary.clone()),
            license,
            homepage: attributes.homepage.clone(),
            ..self.clone()
        })
    }
}

impl std::fmt::Display for Pod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pod<{}, {}>", self.name, self.version)
    }
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    SbomError::invalid_argument(argument, value, reason).into()
}
