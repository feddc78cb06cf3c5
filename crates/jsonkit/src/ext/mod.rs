//! Call-site sugar: `value.to_json()` and `text.parse_json::<T>()`.
//!
//! Thin forwarders over the [`crate::codec`] functions; no behavior of their
//! own.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::errors::Result;
use crate::options::JsonOptions;

/// Method-call serialization for any `Serialize` value.
pub trait ToJsonExt: Serialize {
    /// See [`codec::to_json`].
    fn to_json(&self) -> Result<String> {
        codec::to_json(self)
    }

    /// See [`codec::to_json_with`].
    fn to_json_with(&self, options: &JsonOptions) -> Result<String> {
        codec::to_json_with(self, options)
    }
}

impl<T: Serialize + ?Sized> ToJsonExt for T {}

/// Method-call parsing and reformatting on JSON text.
pub trait JsonStrExt {
    /// See [`codec::from_json`].
    fn parse_json<T: DeserializeOwned>(&self) -> Result<T>;

    /// See [`codec::try_from_json`].
    fn try_parse_json<T: DeserializeOwned>(&self) -> Option<T>;

    /// See [`codec::reformat`].
    fn reformat_json(&self) -> Result<String>;
}

impl JsonStrExt for str {
    fn parse_json<T: DeserializeOwned>(&self) -> Result<T> {
        codec::from_json(self)
    }

    fn try_parse_json<T: DeserializeOwned>(&self) -> Option<T> {
        codec::try_from_json(self)
    }

    fn reformat_json(&self) -> Result<String> {
        codec::reformat(self)
    }
}
