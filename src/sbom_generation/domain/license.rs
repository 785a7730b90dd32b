use crate::shared::error::SbomError;
use crate::shared::Result;

/// Whether a license identifier is a known SPDX id or a free-form name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseIdentifierType {
    Id,
    Name,
}

/// License value object attached to a pod
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    identifier: String,
    identifier_type: LicenseIdentifierType,
    text: Option<String>,
    url: Option<String>,
}

impl License {
    /// Creates a license, normalising the identifier to its canonical SPDX
    /// spelling when it matches one case-insensitively.
    pub fn new(identifier: &str) -> Result<Self> {
        if identifier.trim().is_empty() {
            return Err(SbomError::invalid_argument(
                "license identifier",
                identifier,
                "license identifier must be non empty",
            )
            .into());
        }

        let spdx_id = spdx::identifiers::LICENSES
            .iter()
            .find(|license| license.0.eq_ignore_ascii_case(identifier))
            .map(|license| license.0);

        Ok(match spdx_id {
            Some(id) => Self {
                identifier: id.to_string(),
                identifier_type: LicenseIdentifierType::Id,
                text: None,
                url: None,
            },
            None => Self {
                identifier: identifier.to_string(),
                identifier_type: LicenseIdentifierType::Name,
                text: None,
                url: None,
            },
        })
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn identifier_type(&self) -> LicenseIdentifierType {
        self.identifier_type
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
