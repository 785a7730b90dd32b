//! Builder for constructing SbomReadModel from domain objects
//!
//! Ordering and string trimming are applied here, once, so every formatter
//! renders the same snapshot.

use super::component_view::{ComponentView, EvidenceView, LicenseView, PrimaryComponentView};
use super::dependency_view::DependencyView;
use super::sbom_read_model::{
    ContactView, ManufacturerView, SbomMetadataView, SbomReadModel, ToolView,
};
use crate::application::dto::RenderOptions;
use crate::sbom_generation::domain::{
    Bom, Component, License, LicenseIdentifierType, Manufacturer, Pod, SbomMetadata,
};
use crate::sbom_generation::policies::TrimPolicy;

/// Confidence asserted for purls derived from the lockfile
pub const EVIDENCE_CONFIDENCE: f64 = 0.6;

/// Technique recorded for identity evidence
pub const EVIDENCE_TECHNIQUE: &str = "manifest-analysis";

/// Builder for constructing SbomReadModel from domain objects
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds a SbomReadModel from the BOM aggregate
    ///
    /// # Arguments
    /// * `bom` - The assembled BOM aggregate
    /// * `metadata` - Fresh metadata (timestamp, tool info, serial number)
    /// * `options` - Validated render options (trim length, schema version)
    pub fn build(bom: &Bom, metadata: &SbomMetadata, options: &RenderOptions) -> SbomReadModel {
        let trim = options.trim();

        SbomReadModel {
            spec_version: options.spec_version(),
            bom_version: options.bom_version(),
            metadata: Self::build_metadata(metadata, bom, &trim),
            components: Self::build_components(bom.pods(), bom.manifest_path(), &trim),
            dependencies: Self::build_dependencies(bom, &trim),
        }
    }

    fn build_metadata(metadata: &SbomMetadata, bom: &Bom, trim: &TrimPolicy) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            serial_number: metadata.serial_number().to_string(),
            tool: ToolView {
                vendor: metadata.tool_vendor().to_string(),
                name: metadata.tool_name().to_string(),
                version: metadata.tool_version().to_string(),
            },
            component: bom
                .component()
                .map(|component| Self::build_primary_component(component, trim)),
            manufacturer: bom
                .manufacturer()
                .filter(|manufacturer| !manufacturer.is_empty())
                .map(Self::build_manufacturer),
        }
    }

    fn build_primary_component(component: &Component, trim: &TrimPolicy) -> PrimaryComponentView {
        PrimaryComponentView {
            component_type: component.component_type().bom_type(),
            bom_ref: trim.apply(component.bom_ref()),
            group: component.group().map(str::to_string),
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: trim.apply(component.purl()),
            build_system: component.build_system().map(str::to_string),
            vcs: component.vcs().map(str::to_string),
        }
    }

    fn build_manufacturer(manufacturer: &Manufacturer) -> ManufacturerView {
        let contact = manufacturer.has_contact().then(|| ContactView {
            name: manufacturer.contact_name().map(str::to_string),
            email: manufacturer.email().map(str::to_string),
            phone: manufacturer.phone().map(str::to_string),
        });

        ManufacturerView {
            name: manufacturer.name().map(str::to_string),
            url: manufacturer.url().map(str::to_string),
            contact,
        }
    }

    /// Converts pods to component views sorted by their full purl.
    ///
    /// Sorting uses the untrimmed purl so trimming never changes the order.
    fn build_components(pods: &[Pod], manifest_path: &str, trim: &TrimPolicy) -> Vec<ComponentView> {
        let mut keyed: Vec<(String, &Pod)> = pods.iter().map(|pod| (pod.purl(), pod)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        keyed
            .into_iter()
            .map(|(purl, pod)| ComponentView {
                bom_ref: trim.apply(&purl),
                author: trim.apply_opt(pod.author()),
                publisher: trim.apply_opt(pod.author()),
                name: pod.name().to_string(),
                version: pod.version().to_string(),
                description: pod.description().map(str::to_string),
                sha1_hash: pod.checksum().map(str::to_string),
                license: pod.license().map(Self::build_license),
                purl: trim.apply(&purl),
                homepage: pod.homepage().map(str::to_string),
                evidence: Some(EvidenceView {
                    field: "purl",
                    confidence: EVIDENCE_CONFIDENCE,
                    technique: EVIDENCE_TECHNIQUE,
                    value: manifest_path.to_string(),
                }),
            })
            .collect()
    }

    fn build_license(license: &License) -> LicenseView {
        let (id, name) = match license.identifier_type() {
            LicenseIdentifierType::Id => (Some(license.identifier().to_string()), None),
            LicenseIdentifierType::Name => (None, Some(license.identifier().to_string())),
        };
        LicenseView {
            id,
            name,
            text: license.text().map(str::to_string),
            url: license.url().map(str::to_string),
        }
    }

    /// Dependency entries sorted by bom-ref, each with sorted children
    fn build_dependencies(bom: &Bom, trim: &TrimPolicy) -> Vec<DependencyView> {
        // BTreeMap iteration is already ordered by the full bom-ref.
        bom.dependencies()
            .iter()
            .map(|(bom_ref, children)| {
                let mut children: Vec<&String> = children.iter().collect();
                children.sort();
                DependencyView {
                    bom_ref: trim.apply(bom_ref),
                    depends_on: children.into_iter().map(|child| trim.apply(child)).collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::OutputFormat;
    use crate::sbom_generation::domain::{ComponentType, People, PodAttributes};
    use std::collections::BTreeMap;

    fn create_test_metadata() -> SbomMetadata {
        SbomMetadata::new(
            "2024-01-15T10:30:00Z".to_string(),
            "CycloneDX".to_string(),
            "cyclonedx-cocoapods".to_string(),
            "2.0.0".to_string(),
            "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
        )
    }

    fn create_test_pod(name: &str, version: &str) -> Pod {
        Pod::new(name.to_string(), version.to_string(), None, None).unwrap()
    }

    fn create_test_bom() -> Bom {
        let pods = vec![
            create_test_pod("MSAL/app-lib", "1.2.1"),
            create_test_pod("MSAL", "1.2.1"),
            create_test_pod("Alamofire", "5.6.2")
                .populate(&PodAttributes {
                    author: Some(People::Single("Chewbacca".to_string())),
                    ..Default::default()
                })
                .unwrap(),
        ];
        let mut dependencies = BTreeMap::new();
        dependencies.insert(
            "pkg:cocoapods/MSAL@1.2.1".to_string(),
            vec!["pkg:cocoapods/MSAL@1.2.1#app-lib".to_string()],
        );
        Bom::new(pods, None, None, dependencies, "Project/Podfile.lock")
    }

    fn options(trim: i64) -> RenderOptions {
        RenderOptions::new(1, trim, OutputFormat::Xml).unwrap()
    }

    #[test]
    fn test_build_metadata() {
        let model = SbomReadModelBuilder::build(&create_test_bom(), &create_test_metadata(), &options(0));

        assert_eq!(model.metadata.timestamp, "2024-01-15T10:30:00Z");
        assert_eq!(model.metadata.tool.vendor, "CycloneDX");
        assert_eq!(model.metadata.tool.name, "cyclonedx-cocoapods");
        assert_eq!(model.metadata.tool.version, "2.0.0");
        assert!(model.metadata.component.is_none());
        assert!(model.metadata.manufacturer.is_none());
        assert_eq!(model.bom_version, 1);
    }

    #[test]
    fn test_components_sorted_by_purl() {
        let model = SbomReadModelBuilder::build(&create_test_bom(), &create_test_metadata(), &options(0));
        let purls: Vec<&str> = model.components.iter().map(|c| c.purl.as_str()).collect();

        assert_eq!(
            purls,
            vec![
                "pkg:cocoapods/Alamofire@5.6.2",
                "pkg:cocoapods/MSAL@1.2.1",
                "pkg:cocoapods/MSAL@1.2.1#app-lib",
            ]
        );
    }

    #[test]
    fn test_evidence_and_author() {
        let model = SbomReadModelBuilder::build(&create_test_bom(), &create_test_metadata(), &options(0));
        let alamofire = &model.components[0];

        assert_eq!(alamofire.author.as_deref(), Some("Chewbacca"));
        assert_eq!(alamofire.publisher.as_deref(), Some("Chewbacca"));
        let evidence = alamofire.evidence.as_ref().unwrap();
        assert_eq!(evidence.field, "purl");
        assert_eq!(evidence.confidence, 0.6);
        assert_eq!(evidence.technique, "manifest-analysis");
        assert_eq!(evidence.value, "Project/Podfile.lock");
    }

    #[test]
    fn test_trimming_applies_to_author_and_identities() {
        let model = SbomReadModelBuilder::build(&create_test_bom(), &create_test_metadata(), &options(6));
        let alamofire = &model.components[0];

        assert_eq!(alamofire.author.as_deref(), Some("Chewba"));
        assert_eq!(alamofire.publisher.as_deref(), Some("Chewba"));
        assert_eq!(alamofire.purl, "pkg:co");
        assert_eq!(alamofire.bom_ref, "pkg:co");
        assert_eq!(alamofire.name, "Alamofire");
        assert_eq!(alamofire.evidence.as_ref().unwrap().value, "Project/Podfile.lock");
        assert!(model.dependencies.iter().all(|d| d.bom_ref == "pkg:co"));
    }

    #[test]
    fn test_dependencies_sorted_with_nested_children() {
        let model = SbomReadModelBuilder::build(&create_test_bom(), &create_test_metadata(), &options(0));

        assert_eq!(model.dependencies.len(), 3);
        assert_eq!(model.dependencies[0].bom_ref, "pkg:cocoapods/Alamofire@5.6.2");
        assert!(model.dependencies[0].depends_on.is_empty());
        assert_eq!(model.dependencies[1].bom_ref, "pkg:cocoapods/MSAL@1.2.1");
        assert_eq!(
            model.dependencies[1].depends_on,
            vec!["pkg:cocoapods/MSAL@1.2.1#app-lib".to_string()]
        );
        assert!(model.dependencies[2].depends_on.is_empty());
    }

    #[test]
    fn test_primary_component_and_manufacturer() {
        let component = Component::new(
            Some("com.example".to_string()),
            "Application".to_string(),
            "1.3.5".to_string(),
            ComponentType::Application,
        )
        .unwrap();
        let manufacturer = Manufacturer::new(
            Some("ACME".to_string()),
            None,
            None,
            Some("dev@acme.example".to_string()),
            None,
        )
        .unwrap();
        let bom = Bom::new(
            vec![create_test_pod("Alamofire", "5.6.2")],
            Some(component),
            Some(manufacturer),
            BTreeMap::new(),
            "Podfile.lock",
        );

        let model = SbomReadModelBuilder::build(&bom, &create_test_metadata(), &options(0));
        let primary = model.metadata.component.as_ref().unwrap();
        assert_eq!(primary.component_type, "application");
        assert_eq!(primary.purl, "pkg:generic/com.example/Application@1.3.5");

        let manufacturer = model.metadata.manufacturer.as_ref().unwrap();
        assert_eq!(manufacturer.name.as_deref(), Some("ACME"));
        let contact = manufacturer.contact.as_ref().unwrap();
        assert_eq!(contact.email.as_deref(), Some("dev@acme.example"));
        assert_eq!(contact.name, None);

        assert!(model
            .dependencies
            .iter()
            .any(|d| d.bom_ref == "pkg:generic/com.example/Application@1.3.5"));
    }

    #[test]
    fn test_license_view() {
        let pod = create_test_pod("Alamofire", "5.6.2")
            .populate(&PodAttributes {
                license: Some(crate::sbom_generation::domain::LicenseAttribute::Identifier(
                    "Proprietary EULA".to_string(),
                )),
                ..Default::default()
            })
            .unwrap();
        let bom = Bom::new(vec![pod], None, None, BTreeMap::new(), "Podfile.lock");

        let model = SbomReadModelBuilder::build(&bom, &create_test_metadata(), &options(0));
        let license = model.components[0].license.as_ref().unwrap();
        assert_eq!(license.id, None);
        assert_eq!(license.name.as_deref(), Some("Proprietary EULA"));
    }
}
