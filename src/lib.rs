//! cyclonedx-cocoapods - SBOM generation tool for CocoaPods projects
//!
//! This library generates CycloneDX Software Bills of Materials from a
//! project's Podfile.lock, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): pod identity, provenance, the
//!   dependency closure and the BOM aggregate
//! - **Application Layer** (`application`): use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Podfile.lock/podspec readers, XML and JSON
//!   formatters, console reporting
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cyclonedx_cocoapods::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project = PathBuf::from(".");
//! let use_case = GenerateSbomUseCase::new(
//!     PodfileLockReader::new(),
//!     LocalPodspecRepository::for_project(&project, vec![]),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let response = use_case.execute(SbomRequest::new(project))?;
//! let xml = RenderBomUseCase::execute(&response.bom, &RenderOptions::default())?;
//! println!("{}", xml);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, LocalPodspecRepository, PodfileLockReader,
    };
    pub use crate::adapters::outbound::formatters::{CycloneDxJsonFormatter, CycloneDxXmlFormatter};
    pub use crate::application::dto::{
        OutputFormat, RenderOptions, SbomRequest, SbomResponse, SpecVersion,
    };
    pub use crate::application::use_cases::{GenerateSbomUseCase, RenderBomUseCase};
    pub use crate::ports::outbound::{
        LockfileParseResult, LockfileReader, OutputPresenter, PodAttributesRepository,
        ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Bom, Component, ComponentType, DependencyGraph, License, Manufacturer, Pod, PodSource,
        SbomMetadata, TargetDeclaration,
    };
    pub use crate::sbom_generation::services::{DependencyAnalyzer, SbomGenerator};
    pub use crate::shared::Result;
}
