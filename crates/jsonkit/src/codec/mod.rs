//! The codec facade: serialize, deserialize, and reformat over `serde_json`,
//! with default option wiring and uniform error translation.
//!
//! Every operation comes in three flavors: default options, explicit options
//! (`_with`), and an explicit [`TypeDescriptor`] (`_described`) for call
//! sites that bypass the derived-trait path. All of them are synchronous,
//! touch no shared mutable state, and either return a complete result or a
//! [`JsonKitError`] naming the type and parameter at fault.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::TypeDescriptor;
use crate::errors::{JsonKitError, Result};
use crate::options::{default_options, JsonOptions, PropertyNaming};

/// Serialize a value to JSON text under the default options.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_json_with(value, default_options())
}

/// Serialize a value to JSON text under explicit options.
///
/// Fails with [`JsonKitError::NullInput`] when the value encodes to a root
/// JSON `null` (`None`, `()`, `Value::Null`); a `true`-shaped result never
/// degenerates to the literal `null`.
pub fn to_json_with<T: Serialize + ?Sized>(value: &T, options: &JsonOptions) -> Result<String> {
    let type_name = std::any::type_name::<T>();
    let tree = serde_json::to_value(value).map_err(|source| {
        tracing::debug!(type_name, error = %source, "value could not be encoded");
        JsonKitError::SerializationFailed {
            type_name,
            param: "value",
            source,
        }
    })?;
    write_tree(tree, options, type_name)
}

/// Serialize through a caller-supplied [`TypeDescriptor`] instead of `T`'s
/// serde impls, under the default options.
pub fn to_json_described<T>(value: &T, descriptor: &TypeDescriptor<T>) -> Result<String> {
    to_json_described_with(value, descriptor, default_options())
}

/// Descriptor-path serialize under explicit options.
pub fn to_json_described_with<T>(
    value: &T,
    descriptor: &TypeDescriptor<T>,
    options: &JsonOptions,
) -> Result<String> {
    let type_name = descriptor.type_name();
    let tree = descriptor.encode(value).map_err(|source| {
        tracing::debug!(type_name, error = %source, "descriptor could not encode value");
        JsonKitError::SerializationFailed {
            type_name,
            param: "value",
            source,
        }
    })?;
    write_tree(tree, options, type_name)
}

/// Deserialize JSON text into `T` under the default options.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    from_json_with(text, default_options())
}

/// Deserialize JSON text into `T` under explicit options.
///
/// Parsing has no formatting degrees of freedom, so the options only travel
/// here for call-site symmetry with the serialize path; key matching is
/// governed by the serde attributes on `T`. Fails with
/// [`JsonKitError::EmptyInput`] on empty or whitespace-only text and with
/// [`JsonKitError::DeserializationFailed`] on malformed JSON or a shape
/// mismatch.
pub fn from_json_with<T: DeserializeOwned>(text: &str, _options: &JsonOptions) -> Result<T> {
    require_text(text)?;
    serde_json::from_str(text).map_err(|source| deserialization_failed::<T>(source))
}

/// Deserialize through a caller-supplied [`TypeDescriptor`] instead of `T`'s
/// serde impls.
pub fn from_json_described<T>(text: &str, descriptor: &TypeDescriptor<T>) -> Result<T> {
    from_json_described_with(text, descriptor, default_options())
}

/// Descriptor-path deserialize under explicit options.
pub fn from_json_described_with<T>(
    text: &str,
    descriptor: &TypeDescriptor<T>,
    _options: &JsonOptions,
) -> Result<T> {
    require_text(text)?;
    let type_name = descriptor.type_name();
    let wrap = |source: serde_json::Error| {
        tracing::debug!(type_name, error = %source, "text could not be decoded");
        JsonKitError::DeserializationFailed {
            type_name,
            param: "text",
            source,
        }
    };
    let tree: Value = serde_json::from_str(text).map_err(wrap)?;
    descriptor.decode(tree).map_err(wrap)
}

/// Non-throwing deserialize under the default options.
///
/// Returns `None` for every failure class: empty or whitespace-only text,
/// malformed JSON, a shape mismatch, or text that parses to a root JSON
/// `null`. `Some` always carries a usable value.
pub fn try_from_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    try_from_json_with(text, default_options())
}

/// Non-throwing deserialize under explicit options.
pub fn try_from_json_with<T: DeserializeOwned>(text: &str, _options: &JsonOptions) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    let tree: Value = serde_json::from_str(text).ok()?;
    if tree.is_null() {
        return None;
    }
    serde_json::from_value(tree).ok()
}

/// Non-throwing descriptor-path deserialize. Decode failures are swallowed
/// the same way as parse failures.
pub fn try_from_json_described<T>(text: &str, descriptor: &TypeDescriptor<T>) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    let tree: Value = serde_json::from_str(text).ok()?;
    if tree.is_null() {
        return None;
    }
    descriptor.decode(tree).ok()
}

/// Re-emit JSON text under the default options (pretty-printed).
pub fn reformat(text: &str) -> Result<String> {
    reformat_with(text, default_options())
}

/// Re-emit JSON text under explicit options.
///
/// The text is parsed into a generic document and written back out; key
/// order, numbers, and string content pass through untouched. Keys in the
/// document are data rather than declared property names, so naming
/// conventions never rewrite them.
pub fn reformat_with(text: &str, options: &JsonOptions) -> Result<String> {
    require_text(text)?;
    let tree: Value = serde_json::from_str(text).map_err(|source| {
        tracing::debug!(error = %source, "text is not valid JSON");
        JsonKitError::DeserializationFailed {
            type_name: DOCUMENT_TYPE,
            param: "text",
            source,
        }
    })?;
    write_document(&tree, options, DOCUMENT_TYPE)
}

/// Descriptor-path reformat, for call sites that route even the generic
/// document through an explicit descriptor. Uses the default options.
pub fn reformat_described(text: &str, descriptor: &TypeDescriptor<Value>) -> Result<String> {
    require_text(text)?;
    let type_name = descriptor.type_name();
    let wrap = |source: serde_json::Error| {
        tracing::debug!(type_name, error = %source, "text is not valid JSON");
        JsonKitError::DeserializationFailed {
            type_name,
            param: "text",
            source,
        }
    };
    let tree: Value = serde_json::from_str(text).map_err(wrap)?;
    let tree = descriptor.decode(tree).map_err(wrap)?;
    write_document(&tree, default_options(), type_name)
}

/// Older name for [`from_json`]; retained as a pass-through for callers of
/// the 0.1 surface.
#[deprecated(note = "use `from_json` instead")]
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T> {
    from_json(text)
}

/// Older name for [`from_json_described`]; retained as a pass-through.
#[deprecated(note = "use `from_json_described` instead")]
pub fn parse_described<T>(text: &str, descriptor: &TypeDescriptor<T>) -> Result<T> {
    from_json_described(text, descriptor)
}

const DOCUMENT_TYPE: &str = "json document";

fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(JsonKitError::EmptyInput { param: "text" })
    } else {
        Ok(())
    }
}

fn deserialization_failed<T>(source: serde_json::Error) -> JsonKitError {
    let type_name = std::any::type_name::<T>();
    tracing::debug!(type_name, error = %source, "text could not be decoded");
    JsonKitError::DeserializationFailed {
        type_name,
        param: "text",
        source,
    }
}

/// Finish the typed serialize path: reject a root `null`, apply the naming
/// convention, write.
fn write_tree(mut tree: Value, options: &JsonOptions, type_name: &'static str) -> Result<String> {
    if tree.is_null() {
        return Err(JsonKitError::NullInput { param: "value" });
    }
    if options.naming != PropertyNaming::Preserve {
        rename_keys(&mut tree, options.naming);
    }
    write_document(&tree, options, type_name)
}

fn write_document(tree: &Value, options: &JsonOptions, type_name: &'static str) -> Result<String> {
    let written = if options.pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    written.map_err(|source| {
        tracing::debug!(type_name, error = %source, "document could not be written");
        JsonKitError::SerializationFailed {
            type_name,
            param: "value",
            source,
        }
    })
}

/// Rewrite every object key in the tree to the given convention. Relies on
/// `serde_json`'s `preserve_order` feature to keep keys in insertion order.
fn rename_keys(tree: &mut Value, naming: PropertyNaming) {
    match tree {
        Value::Object(map) => {
            let entries: Vec<(String, Value)> = std::mem::take(map)
                .into_iter()
                .map(|(key, mut child)| {
                    rename_keys(&mut child, naming);
                    (naming.apply(&key), child)
                })
                .collect();
            map.extend(entries);
        }
        Value::Array(items) => {
            for item in items {
                rename_keys(item, naming);
            }
        }
        _ => {}
    }
}
