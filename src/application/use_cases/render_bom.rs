use crate::application::dto::RenderOptions;
use crate::application::factories::FormatterFactory;
use crate::application::read_models::SbomReadModelBuilder;
use crate::sbom_generation::domain::{Bom, SbomMetadata};
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::Result;

/// RenderBomUseCase - serializes a BOM aggregate
///
/// Every call stamps fresh metadata (timestamp and serial number), so two
/// renders of the same aggregate only differ in those two fields.
pub struct RenderBomUseCase;

impl RenderBomUseCase {
    /// Renders `bom` in the format and schema version chosen by `options`.
    pub fn execute(bom: &Bom, options: &RenderOptions) -> Result<String> {
        Self::execute_with_metadata(bom, &SbomGenerator::generate_default_metadata(), options)
    }

    /// Renders with caller supplied metadata.
    pub fn execute_with_metadata(
        bom: &Bom,
        metadata: &SbomMetadata,
        options: &RenderOptions,
    ) -> Result<String> {
        let model = SbomReadModelBuilder::build(bom, metadata, options);
        FormatterFactory::create(options.format()).format(&model)
    }
}
