/// CycloneDX schema version a BOM is rendered against
///
/// Each version selects a slightly different document shape; the document
/// model itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SpecVersion {
    V1_4,
    V1_5,
    #[default]
    V1_6,
}

impl SpecVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V1_4 => "1.4",
            SpecVersion::V1_5 => "1.5",
            SpecVersion::V1_6 => "1.6",
        }
    }

    /// XML namespace of the schema
    pub fn xml_namespace(&self) -> String {
        format!("http://cyclonedx.org/schema/bom/{}", self.as_str())
    }

    /// 1.5 introduced component evidence identity
    pub fn supports_identity_evidence(&self) -> bool {
        *self >= SpecVersion::V1_5
    }

    /// 1.5 deprecated `tools/tool` in favour of `tools/components`
    pub fn tools_as_components(&self) -> bool {
        *self >= SpecVersion::V1_5
    }

    /// 1.6 turned evidence identity into an array
    pub fn identity_is_array(&self) -> bool {
        *self >= SpecVersion::V1_6
    }

    /// Name of the metadata manufacturer element (renamed in 1.6)
    pub fn manufacturer_field(&self) -> &'static str {
        if *self >= SpecVersion::V1_6 {
            "manufacturer"
        } else {
            "manufacture"
        }
    }
}

impl std::str::FromStr for SpecVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.4" => Ok(SpecVersion::V1_4),
            "1.5" => Ok(SpecVersion::V1_5),
            "1.6" => Ok(SpecVersion::V1_6),
            _ => Err(format!(
                "Invalid spec version: {}. Please specify '1.4', '1.5' or '1.6'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
