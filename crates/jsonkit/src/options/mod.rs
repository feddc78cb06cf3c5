use std::sync::OnceLock;

/// Convention applied to object keys produced by the typed serialize path.
///
/// Keys inside a generic JSON document (see `codec::reformat`) are data, not
/// declared property names, and are never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyNaming {
    /// Emit keys exactly as the type declares them.
    Preserve,
    /// `lowerCamelCase` keys.
    CamelCase,
    /// `snake_case` keys.
    SnakeCase,
}

impl PropertyNaming {
    /// Convert a declared property name into this convention.
    pub(crate) fn apply(self, key: &str) -> String {
        match self {
            PropertyNaming::Preserve => key.to_string(),
            PropertyNaming::CamelCase => to_camel(key),
            PropertyNaming::SnakeCase => to_snake(key),
        }
    }
}

/// Lowercase the leading run of uppercase characters. When the run is
/// followed by a lowercase letter, its final character starts a new word and
/// keeps its case ("HTTPServer" becomes "httpServer").
fn to_camel(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len());
    for (i, &c) in chars.iter().enumerate() {
        let in_leading_run = c.is_uppercase() && (i == 0 || chars[i - 1].is_uppercase());
        let starts_word =
            i > 0 && i + 1 < chars.len() && chars[i + 1].is_lowercase();
        if in_leading_run && !starts_word {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn to_snake(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let boundary = i > 0
                && (!chars[i - 1].is_uppercase()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Immutable serialization preferences.
///
/// A process-wide default instance is constructed once (see
/// [`default_options`]) and shared read-only across all calls; callers may
/// pass their own instance to any `_with` operation instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indent output across multiple lines (two spaces per level).
    pub pretty: bool,
    /// Key convention for the typed serialize path.
    pub naming: PropertyNaming,
}

impl JsonOptions {
    pub const fn new(pretty: bool, naming: PropertyNaming) -> Self {
        Self { pretty, naming }
    }

    /// Single-line output, keys as declared.
    pub const fn compact() -> Self {
        Self::new(false, PropertyNaming::Preserve)
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::new(true, PropertyNaming::Preserve)
    }
}

static DEFAULT_OPTIONS: OnceLock<JsonOptions> = OnceLock::new();

/// The process-wide default options: pretty-printed, property names emitted
/// as declared. Initialized on first access and never mutated afterwards, so
/// the reference is safe to share across threads.
pub fn default_options() -> &'static JsonOptions {
    DEFAULT_OPTIONS.get_or_init(JsonOptions::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- defaults ---

    #[test]
    fn default_is_pretty_with_declared_names() {
        let options = JsonOptions::default();
        assert!(options.pretty);
        assert_eq!(options.naming, PropertyNaming::Preserve);
    }

    #[test]
    fn default_options_returns_shared_instance() {
        let a: *const JsonOptions = default_options();
        let b: *const JsonOptions = default_options();
        assert_eq!(a, b);
    }

    #[test]
    fn compact_is_single_line_declared_names() {
        let options = JsonOptions::compact();
        assert!(!options.pretty);
        assert_eq!(options.naming, PropertyNaming::Preserve);
    }

    // --- camelCase ---

    #[test]
    fn camel_lowercases_first_letter() {
        assert_eq!(PropertyNaming::CamelCase.apply("Name"), "name");
        assert_eq!(PropertyNaming::CamelCase.apply("Age"), "age");
    }

    #[test]
    fn camel_handles_leading_acronym() {
        assert_eq!(PropertyNaming::CamelCase.apply("HTTPServer"), "httpServer");
        assert_eq!(PropertyNaming::CamelCase.apply("ID"), "id");
    }

    #[test]
    fn camel_leaves_lowercase_keys_alone() {
        assert_eq!(PropertyNaming::CamelCase.apply("already"), "already");
    }

    #[test]
    fn camel_empty_key() {
        assert_eq!(PropertyNaming::CamelCase.apply(""), "");
    }

    // --- snake_case ---

    #[test]
    fn snake_splits_pascal_case() {
        assert_eq!(PropertyNaming::SnakeCase.apply("AgeInYears"), "age_in_years");
    }

    #[test]
    fn snake_handles_acronym_then_word() {
        assert_eq!(PropertyNaming::SnakeCase.apply("HTTPServer"), "http_server");
    }

    #[test]
    fn snake_leaves_snake_keys_alone() {
        assert_eq!(PropertyNaming::SnakeCase.apply("already_snake"), "already_snake");
    }

    // --- preserve ---

    #[test]
    fn preserve_passes_keys_through() {
        assert_eq!(PropertyNaming::Preserve.apply("MiXeD_Case"), "MiXeD_Case");
    }
}
