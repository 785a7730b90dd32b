pub mod bom;
pub mod component;
pub mod dependency_graph;
pub mod license;
pub mod manufacturer;
pub mod package;
pub mod pod_attributes;
pub mod purl;
pub mod sbom_metadata;
pub mod source;

pub use bom::Bom;
pub use component::{Component, ComponentType};
pub use dependency_graph::{
    bare_name, AdjacencyCache, DependencyGraph, LockedPodEntry, TargetDeclaration,
};
pub use license::{License, LicenseIdentifierType};
pub use manufacturer::Manufacturer;
pub use package::{Pod, PodName, Version, CHECKSUM_ALGORITHM};
pub use pod_attributes::{LicenseAttribute, People, PodAttributes};
pub use purl::{PurlBuilder, PurlType, Qualifier};
pub use sbom_metadata::SbomMetadata;
pub use source::{GitCheckout, GitRefType, PodSource};
