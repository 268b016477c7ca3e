use thiserror::Error as ThisError;

///
/// AccessError
/// Runtime failures raised by generated accessor code. The property name
/// is only known as a string at call time, so every variant is a runtime
/// condition; nothing here is recoverable inside the generated code.
///

#[derive(Debug, ThisError)]
pub enum AccessError {
    #[error("type '{ty}' has no property named '{name}'")]
    UnknownProperty { name: String, ty: String },

    #[error("empty property path for type '{ty}'")]
    EmptyPath { ty: String },

    #[error("failed to parse value for property '{property}'")]
    Parse {
        property: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("value for property '{property}' is not of type '{expected}'")]
    TypeMismatch { property: String, expected: String },
}

impl AccessError {
    #[must_use]
    pub fn unknown_property(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::UnknownProperty {
            name: name.into(),
            ty: ty.into(),
        }
    }

    #[must_use]
    pub fn empty_path(ty: impl Into<String>) -> Self {
        Self::EmptyPath { ty: ty.into() }
    }

    /// Wrap a parse-factory failure, preserving it as the error source.
    #[must_use]
    pub fn parse(
        property: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            property: property.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn type_mismatch(property: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected: expected.into(),
        }
    }
}
