//! jsonkit: a convenience layer over `serde_json`.
//!
//! Centralizes the option wiring and error translation that JSON-heavy code
//! otherwise repeats at every call site: a process-wide default configuration
//! (pretty-printed, property names emitted as declared), a uniform error type
//! that names the type and parameter at fault while keeping the underlying
//! `serde_json::Error` as source, and non-throwing `try_` variants for callers
//! that only care whether a usable value came out.
//!
//! The JSON grammar itself is `serde_json`'s business; nothing here parses or
//! writes JSON directly.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "Test".into(), age: 20 };
//! let text = jsonkit::to_json(&person)?;
//! assert!(text.contains("\"Name\": \"Test\""));
//!
//! let back: Person = jsonkit::from_json(&text)?;
//! assert_eq!(back, person);
//! # Ok::<(), jsonkit::JsonKitError>(())
//! ```

pub mod codec;
pub mod descriptor;
pub mod errors;
pub mod ext;
pub mod options;

pub use codec::{
    from_json, from_json_described, from_json_described_with, from_json_with, reformat,
    reformat_described, reformat_with, to_json, to_json_described, to_json_described_with,
    to_json_with, try_from_json, try_from_json_described, try_from_json_with,
};
pub use descriptor::{document, TypeDescriptor};
pub use errors::{JsonKitError, Result};
pub use ext::{JsonStrExt, ToJsonExt};
pub use options::{default_options, JsonOptions, PropertyNaming};
