use crate::application::read_models::{
    ComponentView, DependencyView, EvidenceView, LicenseView, ManufacturerView,
    PrimaryComponentView, SbomReadModel,
};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::CHECKSUM_ALGORITHM;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// XML wraps every collection in its own element (e.g. <components><component>...)

#[derive(Debug, Serialize)]
struct BomXml {
    #[serde(rename = "@xmlns")]
    xmlns: String,
    #[serde(rename = "@serialNumber")]
    serial_number: String,
    #[serde(rename = "@version")]
    version: u32,
    metadata: MetadataXml,
    components: ComponentsXml,
    dependencies: DependenciesXml,
}

/// Element order follows the schema: `manufacturer` (1.6) precedes the
/// component, `manufacture` (up to 1.5) follows it.
#[derive(Debug, Serialize)]
struct MetadataXml {
    timestamp: String,
    tools: ToolsXml,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacturer: Option<OrganizationalEntityXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<PrimaryComponentXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacture: Option<OrganizationalEntityXml>,
}

#[derive(Debug, Serialize)]
struct ToolsXml {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool: Vec<LegacyToolXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<ToolComponentsXml>,
}

#[derive(Debug, Serialize)]
struct LegacyToolXml {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ToolComponentsXml {
    component: Vec<ToolComponentXml>,
}

#[derive(Debug, Serialize)]
struct ToolComponentXml {
    #[serde(rename = "@type")]
    component_type: &'static str,
    group: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct PrimaryComponentXml {
    #[serde(rename = "@type")]
    component_type: &'static str,
    #[serde(rename = "@bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    version: String,
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    external_references: Option<ExternalReferencesXml>,
}

#[derive(Debug, Serialize)]
struct OrganizationalEntityXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<ContactXml>,
}

#[derive(Debug, Serialize)]
struct ContactXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComponentsXml {
    component: Vec<ComponentXml>,
}

#[derive(Debug, Serialize)]
struct ComponentXml {
    #[serde(rename = "@type")]
    component_type: &'static str,
    #[serde(rename = "@bom-ref")]
    bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<String>,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashes: Option<HashesXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<LicensesXml>,
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    external_references: Option<ExternalReferencesXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence: Option<EvidenceXml>,
}

#[derive(Debug, Serialize)]
struct HashesXml {
    hash: Vec<HashXml>,
}

#[derive(Debug, Serialize)]
struct HashXml {
    #[serde(rename = "@alg")]
    alg: &'static str,
    #[serde(rename = "$text")]
    content: String,
}

#[derive(Debug, Serialize)]
struct LicensesXml {
    license: Vec<LicenseXml>,
}

#[derive(Debug, Serialize)]
struct LicenseXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExternalReferencesXml {
    reference: Vec<ExternalReferenceXml>,
}

#[derive(Debug, Serialize)]
struct ExternalReferenceXml {
    #[serde(rename = "@type")]
    ref_type: &'static str,
    url: String,
}

#[derive(Debug, Serialize)]
struct EvidenceXml {
    identity: IdentityXml,
}

#[derive(Debug, Serialize)]
struct IdentityXml {
    field: &'static str,
    confidence: f64,
    methods: MethodsXml,
}

#[derive(Debug, Serialize)]
struct MethodsXml {
    method: Vec<MethodXml>,
}

#[derive(Debug, Serialize)]
struct MethodXml {
    technique: &'static str,
    confidence: f64,
    value: String,
}

#[derive(Debug, Serialize)]
struct DependenciesXml {
    dependency: Vec<DependencyXml>,
}

#[derive(Debug, Serialize)]
struct DependencyXml {
    #[serde(rename = "@ref")]
    ref_field: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependency: Vec<DependencyRefXml>,
}

#[derive(Debug, Serialize)]
struct DependencyRefXml {
    #[serde(rename = "@ref")]
    ref_field: String,
}

/// CycloneDxXmlFormatter adapter for generating namespaced CycloneDX XML
///
/// This adapter implements the SbomFormatter port for every supported
/// schema version.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxXmlFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = BomXml {
            xmlns: model.spec_version.xml_namespace(),
            serial_number: model.metadata.serial_number.clone(),
            version: model.bom_version,
            metadata: self.build_metadata(model),
            components: ComponentsXml {
                component: model
                    .components
                    .iter()
                    .map(|c| self.build_component(c, model))
                    .collect(),
            },
            dependencies: DependenciesXml {
                dependency: self.build_dependencies(&model.dependencies),
            },
        };

        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some("bom"))
            .map_err(|e| output_error(e.to_string()))?;
        serializer.indent(' ', 2);
        bom.serialize(serializer)
            .map_err(|e| output_error(e.to_string()))?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }
}

impl CycloneDxXmlFormatter {
    fn build_metadata(&self, model: &SbomReadModel) -> MetadataXml {
        let tool = &model.metadata.tool;
        let tools = if model.spec_version.tools_as_components() {
            ToolsXml {
                tool: Vec::new(),
                components: Some(ToolComponentsXml {
                    component: vec![ToolComponentXml {
                        component_type: "application",
                        group: tool.vendor.clone(),
                        name: tool.name.clone(),
                        version: tool.version.clone(),
                    }],
                }),
            }
        } else {
            ToolsXml {
                tool: vec![LegacyToolXml {
                    vendor: tool.vendor.clone(),
                    name: tool.name.clone(),
                    version: tool.version.clone(),
                }],
                components: None,
            }
        };

        let entity = model
            .metadata
            .manufacturer
            .as_ref()
            .map(|m| self.build_manufacturer(m));
        let (manufacturer, manufacture) =
            if model.spec_version.manufacturer_field() == "manufacturer" {
                (entity, None)
            } else {
                (None, entity)
            };

        MetadataXml {
            timestamp: model.metadata.timestamp.clone(),
            tools,
            manufacturer,
            component: model
                .metadata
                .component
                .as_ref()
                .map(|c| self.build_primary_component(c)),
            manufacture,
        }
    }

    fn build_primary_component(&self, component: &PrimaryComponentView) -> PrimaryComponentXml {
        let mut references = Vec::new();
        if let Some(url) = &component.build_system {
            references.push(ExternalReferenceXml {
                ref_type: "build-system",
                url: url.clone(),
            });
        }
        if let Some(url) = &component.vcs {
            references.push(ExternalReferenceXml {
                ref_type: "vcs",
                url: url.clone(),
            });
        }

        PrimaryComponentXml {
            component_type: component.component_type,
            bom_ref: component.bom_ref.clone(),
            group: component.group.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            purl: component.purl.clone(),
            external_references: (!references.is_empty()).then_some(ExternalReferencesXml {
                reference: references,
            }),
        }
    }

    fn build_manufacturer(&self, manufacturer: &ManufacturerView) -> OrganizationalEntityXml {
        OrganizationalEntityXml {
            name: manufacturer.name.clone(),
            url: manufacturer.url.clone(),
            contact: manufacturer.contact.as_ref().map(|c| ContactXml {
                name: c.name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
            }),
        }
    }

    fn build_component(&self, component: &ComponentView, model: &SbomReadModel) -> ComponentXml {
        ComponentXml {
            component_type: "library",
            bom_ref: component.bom_ref.clone(),
            author: component.author.clone(),
            publisher: component.publisher.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: component.description.clone(),
            hashes: component.sha1_hash.as_ref().map(|content| HashesXml {
                hash: vec![HashXml {
                    alg: CHECKSUM_ALGORITHM,
                    content: content.clone(),
                }],
            }),
            licenses: component.license.as_ref().map(|l| LicensesXml {
                license: vec![self.build_license(l)],
            }),
            purl: component.purl.clone(),
            external_references: component.homepage.as_ref().map(|url| ExternalReferencesXml {
                reference: vec![ExternalReferenceXml {
                    ref_type: "website",
                    url: url.clone(),
                }],
            }),
            evidence: component
                .evidence
                .as_ref()
                .filter(|_| model.spec_version.supports_identity_evidence())
                .map(|e| self.build_evidence(e)),
        }
    }

    fn build_license(&self, license: &LicenseView) -> LicenseXml {
        LicenseXml {
            id: license.id.clone(),
            name: license.name.clone(),
            text: license.text.clone(),
            url: license.url.clone(),
        }
    }

    fn build_evidence(&self, evidence: &EvidenceView) -> EvidenceXml {
        EvidenceXml {
            identity: IdentityXml {
                field: evidence.field,
                confidence: evidence.confidence,
                methods: MethodsXml {
                    method: vec![MethodXml {
                        technique: evidence.technique,
                        confidence: evidence.confidence,
                        value: evidence.value.clone(),
                    }],
                },
            },
        }
    }

    fn build_dependencies(&self, dependencies: &[DependencyView]) -> Vec<DependencyXml> {
        dependencies
            .iter()
            .map(|d| DependencyXml {
                ref_field: d.bom_ref.clone(),
                dependency: d
                    .depends_on
                    .iter()
                    .map(|child| DependencyRefXml {
                        ref_field: child.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn output_error(details: String) -> anyhow::Error {
    SbomError::OutputGenerationError {
        format: "XML".to_string(),
        details,
    }
    .into()
}
