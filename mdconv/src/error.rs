//! Error types for conversion operations

/// Errors that can occur while resolving or running a converter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Format not found in registry. `available` lists the registered names
    /// in registration order.
    #[error("unexpected format '{name}', expected: ({})", available.join(", "))]
    FormatNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Input could not be accepted (e.g. it is not valid UTF-8)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error while producing the target markup. The bundled converters never
    /// fail here; it is for converters registered from outside this crate.
    #[error("render error: {0}")]
    Render(String),
}
