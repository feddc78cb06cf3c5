use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

type EncodeFn<T> = fn(&T) -> Result<Value, serde_json::Error>;
type DecodeFn<T> = fn(Value) -> Result<T, serde_json::Error>;

/// A statically-declared mapping between `T` and its JSON representation.
///
/// Stands in for the derived-trait path when a type's serde impls are not
/// available or deliberately bypassed: the caller supplies the encode and
/// decode functions plus a type name for diagnostics. The facade only reads
/// a descriptor; it never caches or mutates one.
pub struct TypeDescriptor<T> {
    type_name: &'static str,
    encode: EncodeFn<T>,
    decode: DecodeFn<T>,
}

impl<T> TypeDescriptor<T> {
    /// Build a descriptor from hand-written encode/decode functions.
    pub const fn new(type_name: &'static str, encode: EncodeFn<T>, decode: DecodeFn<T>) -> Self {
        Self {
            type_name,
            encode,
            decode,
        }
    }

    /// The name used in failure messages for this type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn encode(&self, value: &T) -> Result<Value, serde_json::Error> {
        (self.encode)(value)
    }

    pub(crate) fn decode(&self, value: Value) -> Result<T, serde_json::Error> {
        (self.decode)(value)
    }
}

impl<T: Serialize + DeserializeOwned> TypeDescriptor<T> {
    /// Descriptor backed by `T`'s own serde impls.
    pub fn derived() -> Self {
        Self::new(
            std::any::type_name::<T>(),
            |value| serde_json::to_value(value),
            |value| serde_json::from_value(value),
        )
    }
}

/// Descriptor for the generic JSON document (`serde_json::Value`), the
/// type-agnostic shape used by `codec::reformat_described`.
pub fn document() -> TypeDescriptor<Value> {
    TypeDescriptor::new("json document", |value| Ok(value.clone()), Ok)
}

// Function pointers copy regardless of `T`, so the usual derive bounds would
// be too strict.
impl<T> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeDescriptor<T> {}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
