use crate::shared::error::SbomError;
use crate::shared::Result;

/// Organisation that manufactured the primary component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manufacturer {
    name: Option<String>,
    url: Option<String>,
    contact_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl Manufacturer {
    /// Every field is optional; a supplied field must not be blank.
    pub fn new(
        name: Option<String>,
        url: Option<String>,
        contact_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self> {
        for (field, value) in [
            ("manufacturer name", &name),
            ("manufacturer URL", &url),
            ("manufacturer contact name", &contact_name),
            ("manufacturer email", &email),
            ("manufacturer phone", &phone),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(SbomError::invalid_argument(
                        field,
                        value.as_str(),
                        format!("{}, if specified, must be non empty", field),
                    )
                    .into());
                }
            }
        }

        Ok(Self {
            name,
            url,
            contact_name,
            email,
            phone,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn has_contact(&self) -> bool {
        self.contact_name.is_some() || self.email.is_some() || self.phone.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && !self.has_contact()
    }
}
