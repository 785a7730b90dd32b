mod string_trim;
mod target_inclusion;

pub use string_trim::TrimPolicy;
pub use target_inclusion::TargetInclusionPolicy;
