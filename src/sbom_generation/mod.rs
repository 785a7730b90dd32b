//! Pure SBOM domain: pod identity, provenance, the dependency closure and
//! the BOM aggregate. Nothing in here performs I/O.

pub mod domain;
pub mod policies;
pub mod services;
