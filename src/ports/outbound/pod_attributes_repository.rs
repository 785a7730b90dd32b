use crate::sbom_generation::domain::{Pod, PodAttributes};
use crate::shared::Result;

/// PodAttributesRepository port for looking up descriptive pod metadata
///
/// Implementations resolve a pod to the attributes of its podspec
/// (author, summary, license, homepage).
pub trait PodAttributesRepository {
    /// Returns the attributes of `pod`, or `None` when no podspec is available.
    ///
    /// # Errors
    /// Returns an error if a podspec exists but cannot be read or parsed
    fn attributes_for(&self, pod: &Pod) -> Result<Option<PodAttributes>>;
}
