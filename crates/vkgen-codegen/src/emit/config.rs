//! Configuration shared by every emitter.

/// Run-wide emission settings. Emitter-specific settings come from the
/// emitter's positional arguments instead.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Replaces the generated-file notice when set.
    pub(crate) banner: Option<String>,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `text` verbatim as the banner. Trailing newlines are dropped so
    /// section spacing stays uniform.
    pub fn banner(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.banner = Some(text.trim_end_matches(['\n', '\r']).to_string());
        self
    }
}
