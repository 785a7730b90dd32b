/// Result alias with anyhow::Error as the error type.
/// Typed failures are raised as `SbomError` and travel inside the anyhow error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
