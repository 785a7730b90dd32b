use indexmap::IndexMap;
use serde::Deserialize;

/// Descriptive attributes of a pod as found in its podspec.
///
/// Only the fields the BOM carries are modelled; everything else in the
/// podspec is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PodAttributes {
    #[serde(default)]
    pub author: Option<People>,
    #[serde(default)]
    pub authors: Option<People>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseAttribute>,
    #[serde(default)]
    pub homepage: Option<String>,
}

/// `author`/`authors` accept a single name, a list, or a `name => email` map
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum People {
    Single(String),
    List(Vec<String>),
    WithEmail(IndexMap<String, Option<String>>),
}

impl People {
    /// Flattens the authors into one display string.
    pub fn display(&self) -> String {
        match self {
            People::Single(name) => name.clone(),
            People::List(names) => names.join(", "),
            People::WithEmail(entries) => entries
                .iter()
                .map(|(name, email)| match email {
                    Some(email) => format!("{} <{}>", name, email),
                    None => name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// `license` is either a bare identifier or `{ type, text }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LicenseAttribute {
    Identifier(String),
    Detailed {
        #[serde(rename = "type", default)]
        license_type: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
}

impl PodAttributes {
    pub fn people(&self) -> Option<&People> {
        self.author.as_ref().or(self.authors.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_podspec_json() {
        let json = r#"{
            "name": "Alamofire",
            "version": "5.6.2",
            "license": "MIT",
            "summary": "Elegant HTTP Networking in Swift",
            "homepage": "https://github.com/Alamofire/Alamofire",
            "authors": { "Alamofire Software Foundation": "info@alamofire.org" },
            "source": { "git": "https://github.com/Alamofire/Alamofire.git", "tag": "5.6.2" }
        }"#;
        let attributes: PodAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(
            attributes.people().unwrap().display(),
            "Alamofire Software Foundation <info@alamofire.org>"
        );
        assert_eq!(
            attributes.license,
            Some(LicenseAttribute::Identifier("MIT".to_string()))
        );
        assert_eq!(attributes.description, None);
        assert_eq!(
            attributes.summary.as_deref(),
            Some("Elegant HTTP Networking in Swift")
        );
    }

    #[test]
    fn test_author_takes_precedence_over_authors() {
        let json = r#"{ "author": "Chewbacca", "authors": ["Han Solo"] }"#;
        let attributes: PodAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attributes.people().unwrap().display(), "Chewbacca");
    }

    #[test]
    fn test_people_list_and_map_preserve_order() {
        let list = People::List(vec!["Chewbacca".into(), "Han Solo".into()]);
        assert_eq!(list.display(), "Chewbacca, Han Solo");

        let json = r#"{ "Zed": "zed@example.com", "Amy": null }"#;
        let map: People = serde_json::from_str(json).unwrap();
        assert_eq!(map.display(), "Zed <zed@example.com>, Amy");
    }

    #[test]
    fn test_detailed_license() {
        let json = r#"{ "license": { "type": "Apache-2.0", "text": "Licensed under..." } }"#;
        let attributes: PodAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(
            attributes.license,
            Some(LicenseAttribute::Detailed {
                license_type: Some("Apache-2.0".to_string()),
                text: Some("Licensed under...".to_string()),
            })
        );
    }
}
