use crate::application::read_models::{
    ComponentView, DependencyView, EvidenceView, LicenseView, ManufacturerView,
    PrimaryComponentView, SbomMetadataView, SbomReadModel,
};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::CHECKSUM_ALGORITHM;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Tools,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<PrimaryComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacture: Option<OrganizationalEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacturer: Option<OrganizationalEntity>,
}

/// `tools` was an array of tools up to 1.4 and an object of components since 1.5
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Tools {
    Legacy(Vec<LegacyTool>),
    Components { components: Vec<ToolComponent> },
}

#[derive(Debug, Serialize)]
struct LegacyTool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ToolComponent {
    #[serde(rename = "type")]
    component_type: &'static str,
    group: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct PrimaryComponent {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    version: String,
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
}

#[derive(Debug, Serialize)]
struct OrganizationalEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    url: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    contact: Vec<Contact>,
}

#[derive(Debug, Serialize)]
struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<String>,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<Hash>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<License>,
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence: Option<Evidence>,
}

#[derive(Debug, Serialize)]
struct Hash {
    alg: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<LicenseText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct LicenseText {
    content: String,
}

#[derive(Debug, Serialize)]
struct ExternalReference {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: String,
}

#[derive(Debug, Serialize)]
struct Evidence {
    identity: IdentityEvidence,
}

/// A single object in 1.5, an array since 1.6
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum IdentityEvidence {
    Single(Identity),
    Many(Vec<Identity>),
}

#[derive(Debug, Serialize)]
struct Identity {
    field: &'static str,
    confidence: f64,
    methods: Vec<Method>,
}

#[derive(Debug, Serialize)]
struct Method {
    technique: &'static str,
    confidence: f64,
    value: String,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn")]
    depends_on: Vec<String>,
}

/// CycloneDxJsonFormatter adapter for generating CycloneDX JSON
///
/// This adapter implements the SbomFormatter port for every supported
/// schema version.
pub struct CycloneDxJsonFormatter;

impl CycloneDxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxJsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: model.spec_version.as_str(),
            serial_number: model.metadata.serial_number.clone(),
            version: model.bom_version,
            metadata: self.build_metadata(model),
            components: self.build_components(model),
            dependencies: self.build_dependencies(&model.dependencies),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxJsonFormatter {
    fn build_metadata(&self, model: &SbomReadModel) -> Metadata {
        let metadata: &SbomMetadataView = &model.metadata;
        let tool = &metadata.tool;
        let tools = if model.spec_version.tools_as_components() {
            Tools::Components {
                components: vec![ToolComponent {
                    component_type: "application",
                    group: tool.vendor.clone(),
                    name: tool.name.clone(),
                    version: tool.version.clone(),
                }],
            }
        } else {
            Tools::Legacy(vec![LegacyTool {
                vendor: tool.vendor.clone(),
                name: tool.name.clone(),
                version: tool.version.clone(),
            }])
        };

        let manufacturer = metadata.manufacturer.as_ref().map(|m| self.build_manufacturer(m));
        let (manufacture, manufacturer) = if model.spec_version.manufacturer_field() == "manufacturer" {
            (None, manufacturer)
        } else {
            (manufacturer, None)
        };

        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools,
            component: metadata
                .component
                .as_ref()
                .map(|c| self.build_primary_component(c)),
            manufacture,
            manufacturer,
        }
    }

    fn build_primary_component(&self, component: &PrimaryComponentView) -> PrimaryComponent {
        let mut external_references = Vec::new();
        if let Some(url) = &component.build_system {
            external_references.push(ExternalReference {
                reference_type: "build-system",
                url: url.clone(),
            });
        }
        if let Some(url) = &component.vcs {
            external_references.push(ExternalReference {
                reference_type: "vcs",
                url: url.clone(),
            });
        }

        PrimaryComponent {
            component_type: component.component_type,
            bom_ref: component.bom_ref.clone(),
            group: component.group.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            purl: component.purl.clone(),
            external_references,
        }
    }

    fn build_manufacturer(&self, manufacturer: &ManufacturerView) -> OrganizationalEntity {
        OrganizationalEntity {
            name: manufacturer.name.clone(),
            url: manufacturer.url.iter().cloned().collect(),
            contact: manufacturer
                .contact
                .iter()
                .map(|c| Contact {
                    name: c.name.clone(),
                    email: c.email.clone(),
                    phone: c.phone.clone(),
                })
                .collect(),
        }
    }

    fn build_components(&self, model: &SbomReadModel) -> Vec<Component> {
        model
            .components
            .iter()
            .map(|c: &ComponentView| Component {
                component_type: "library",
                bom_ref: c.bom_ref.clone(),
                author: c.author.clone(),
                publisher: c.publisher.clone(),
                name: c.name.clone(),
                version: c.version.clone(),
                description: c.description.clone(),
                hashes: c
                    .sha1_hash
                    .iter()
                    .map(|content| Hash {
                        alg: CHECKSUM_ALGORITHM,
                        content: content.clone(),
                    })
                    .collect(),
                licenses: c.license.iter().map(|l| self.build_license(l)).collect(),
                purl: c.purl.clone(),
                external_references: c
                    .homepage
                    .iter()
                    .map(|url| ExternalReference {
                        reference_type: "website",
                        url: url.clone(),
                    })
                    .collect(),
                evidence: c
                    .evidence
                    .as_ref()
                    .filter(|_| model.spec_version.supports_identity_evidence())
                    .map(|e| self.build_evidence(e, model.spec_version.identity_is_array())),
            })
            .collect()
    }

    fn build_license(&self, license: &LicenseView) -> License {
        License {
            license: LicenseContent {
                id: license.id.clone(),
                name: license.name.clone(),
                text: license.text.clone().map(|content| LicenseText { content }),
                url: license.url.clone(),
            },
        }
    }

    fn build_evidence(&self, evidence: &EvidenceView, as_array: bool) -> Evidence {
        let identity = Identity {
            field: evidence.field,
            confidence: evidence.confidence,
            methods: vec![Method {
                technique: evidence.technique,
                confidence: evidence.confidence,
                value: evidence.value.clone(),
            }],
        };

        Evidence {
            identity: if as_array {
                IdentityEvidence::Many(vec![identity])
            } else {
                IdentityEvidence::Single(identity)
            },
        }
    }

    fn build_dependencies(&self, dependencies: &[DependencyView]) -> Vec<Dependency> {
        dependencies
            .iter()
            .map(|d| Dependency {
                bom_ref: d.bom_ref.clone(),
                depends_on: d.depends_on.clone(),
            })
            .collect()
    }
}
