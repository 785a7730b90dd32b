/// Use cases module containing application business logic orchestration
mod generate_sbom;
mod render_bom;

pub use generate_sbom::{GenerateSbomUseCase, DEFAULT_TARGET_LABEL};
pub use render_bom::RenderBomUseCase;
