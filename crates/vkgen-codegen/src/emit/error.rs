//! Error types for artifact emission.

use super::EmitterKind;

/// Error during artifact emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmitError {
    /// Positional configuration missing or malformed for the emitter.
    Usage { emitter: EmitterKind, usage: String },
    /// The emitter needs a prototype the description does not contain.
    MissingPrototype(&'static str),
    /// A prototype lacks the shape the emitter relies on.
    MalformedPrototype { name: String, reason: &'static str },
}

impl EmitError {
    pub(crate) fn usage(emitter: EmitterKind, usage: impl Into<String>) -> Self {
        Self::Usage {
            emitter,
            usage: usage.into(),
        }
    }

    /// Usage errors are the caller's fault, the rest are the description's.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { emitter, usage } => write!(f, "{emitter}: {usage}"),
            Self::MissingPrototype(name) => {
                write!(f, "API description has no '{name}' prototype")
            }
            Self::MalformedPrototype { name, reason } => write!(f, "prototype '{name}' {reason}"),
        }
    }
}

impl std::error::Error for EmitError {}
