//! Terminal classification of a type's introduction.

/// How a traced type was ultimately introduced into a typeset.
///
/// This is the terminal tag of a provenance walk: the chain of constraints
/// ends either at a classified introduction point or nowhere at all.
/// Consumers match on this to render one of three explanations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The chain ended without a classified terminus.
    Unknown,
    /// Determined by static analysis.
    Static,
    /// Determined from observed runtime/bytecode behavior.
    Dynamic,
}

impl Origin {
    /// Whether the walk reached a classified introduction point.
    pub fn is_classified(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }

    /// Human-readable tail for a rendered provenance chain.
    pub fn explain(self) -> &'static str {
        match self {
            Self::Unknown => "and the trail runs cold",
            Self::Static => "which was determined statically",
            Self::Dynamic => "which was determined dynamically",
        }
    }
}
