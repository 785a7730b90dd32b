//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for rendering.

pub mod component_view;
pub mod dependency_view;
pub mod sbom_read_model;
pub mod sbom_read_model_builder;

pub use component_view::{ComponentView, EvidenceView, LicenseView, PrimaryComponentView};
pub use dependency_view::DependencyView;
pub use sbom_read_model::{
    ContactView, ManufacturerView, SbomMetadataView, SbomReadModel, ToolView,
};
pub use sbom_read_model_builder::{
    SbomReadModelBuilder, EVIDENCE_CONFIDENCE, EVIDENCE_TECHNIQUE,
};
