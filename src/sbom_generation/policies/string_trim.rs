/// Shortens strings for consumers with field-length limits.
///
/// A limit of zero disables trimming. Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimPolicy {
    max_chars: usize,
}

impl TrimPolicy {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_chars > 0
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn apply(&self, value: &str) -> String {
        if !self.is_enabled() {
            return value.to_string();
        }
        value.chars().take(self.max_chars).collect()
    }

    pub fn apply_opt(&self, value: Option<&str>) -> Option<String> {
        value.map(|v| self.apply(v))
    }
}
