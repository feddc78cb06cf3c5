use thiserror::Error;

/// Failure categories for the codec facade.
///
/// The first two are caller bugs and carry the name of the offending
/// parameter; the last two wrap the underlying `serde_json::Error`, which
/// stays reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum JsonKitError {
    #[error("argument `{param}` must not be null")]
    NullInput { param: &'static str },

    #[error("argument `{param}` must not be empty or whitespace-only")]
    EmptyInput { param: &'static str },

    #[error("failed to serialize value of type `{type_name}` to JSON (argument `{param}`)")]
    SerializationFailed {
        type_name: &'static str,
        param: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to deserialize JSON into `{type_name}` (argument `{param}`)")]
    DeserializationFailed {
        type_name: &'static str,
        param: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, JsonKitError>;
