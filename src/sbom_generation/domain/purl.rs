//! Package URL (purl) construction
//!
//! Builds identifiers of the form
//! `pkg:<type>/<group>/<root-name>@<version>?<key>=<value>#<subpath>`.
//! Hierarchical names (`Parent/Subspec`) keep the root name in the path and
//! move the remaining segments into the subpath, so every subspec shares its
//! parent's version.

use urlencoding::encode;

/// Package URL type namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurlType {
    /// Pods resolved from a Podfile.lock
    CocoaPods,
    /// Anything without an ecosystem of its own (e.g. the application the BOM describes)
    Generic,
}

impl PurlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurlType::CocoaPods => "cocoapods",
            PurlType::Generic => "generic",
        }
    }
}

/// A single purl qualifier (`key=value`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub key: &'static str,
    pub value: String,
}

impl Qualifier {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Builder for package URL strings.
///
/// Inputs are expected to be validated by the caller (pods and components
/// validate at construction), so building never fails.
#[derive(Debug, Clone)]
pub struct PurlBuilder<'a> {
    purl_type: PurlType,
    group: Option<&'a str>,
    name: &'a str,
    version: &'a str,
    qualifier: Option<Qualifier>,
}

impl<'a> PurlBuilder<'a> {
    pub fn new(purl_type: PurlType, name: &'a str, version: &'a str) -> Self {
        Self {
            purl_type,
            group: None,
            name,
            version,
            qualifier: None,
        }
    }

    pub fn group(mut self, group: Option<&'a str>) -> Self {
        self.group = group;
        self
    }

    pub fn qualifier(mut self, qualifier: Option<Qualifier>) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn build(&self) -> String {
        let mut purl = format!("pkg:{}/", self.purl_type.as_str());

        // A grouped name is used verbatim; only ungrouped names are split into subpaths.
        let subpath = match self.group {
            Some(group) => {
                purl.push_str(&encode(group));
                purl.push('/');
                purl.push_str(&encode(self.name));
                None
            }
            None => {
                let mut segments = self.name.split('/');
                let root = segments.next().unwrap_or_default();
                purl.push_str(&encode(root));
                let rest: Vec<String> = segments.map(|s| encode(s).into_owned()).collect();
                (!rest.is_empty()).then(|| rest.join("/"))
            }
        };

        purl.push('@');
        purl.push_str(&encode(self.version));

        if let Some(qualifier) = &self.qualifier {
            purl.push('?');
            purl.push_str(qualifier.key);
            purl.push('=');
            purl.push_str(&encode(&qualifier.value));
        }

        if let Some(subpath) = subpath {
            purl.push('#');
            purl.push_str(&subpath);
        }

        purl
    }
}
