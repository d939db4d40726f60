use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for spgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles the schema text with its filename so error factories only need
/// the details specific to each failure.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// The `[Config]` table did not have the expected shape.
    pub fn config_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Config {
            src: self.named_source(),
            span: find_header_span(&self.src, crate::CONFIG_SECTION),
            message: message.into(),
        })
    }

    /// A group value was not an array of tables.
    pub fn invalid_group_error(&self, group: &str, found: &str) -> Box<Error> {
        Box::new(Error::InvalidGroup {
            src: self.named_source(),
            span: find_header_span(&self.src, group),
            group: group.to_string(),
            found: found.to_string(),
        })
    }

    /// A required item key is absent.
    pub fn missing_field_error(&self, group: &str, index: usize, key: &str) -> Box<Error> {
        Box::new(Error::MissingItemField {
            src: self.named_source(),
            span: find_header_span(&self.src, group),
            group: group.to_string(),
            index,
            key: key.to_string(),
        })
    }

    /// An item key holds a value of the wrong TOML type.
    pub fn invalid_field_error(
        &self,
        group: &str,
        index: usize,
        key: &str,
        found: &str,
    ) -> Box<Error> {
        Box::new(Error::InvalidItemField {
            src: self.named_source(),
            span: find_header_span(&self.src, group),
            group: group.to_string(),
            index,
            key: key.to_string(),
            found: found.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'spgen --new <file>' to create a starter schema"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(spgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [Config] section: {message}")]
    #[diagnostic(
        code(spgen::config_error),
        help("valid keys are: package, dir, author, nameKey, typeKey, commentKey, defaultKey")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this section")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("group '{group}' must be an array of tables, found {found}")]
    #[diagnostic(
        code(spgen::invalid_group),
        help("declare items with [[{group}]] headers")
    )]
    InvalidGroup {
        #[source_code]
        src: NamedSource<String>,
        #[label("group declared here")]
        span: Option<SourceSpan>,
        group: String,
        found: String,
    },

    #[error("item #{index} of group '{group}' is missing '{key}'")]
    #[diagnostic(code(spgen::missing_field))]
    MissingItemField {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this group")]
        span: Option<SourceSpan>,
        group: String,
        index: usize,
        key: String,
    },

    #[error("item #{index} of group '{group}': '{key}' must be a string, found {found}")]
    #[diagnostic(code(spgen::invalid_field))]
    InvalidItemField {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this group")]
        span: Option<SourceSpan>,
        group: String,
        index: usize,
        key: String,
        found: String,
    },
}

/// Find the span of a top-level table name in the TOML source.
///
/// Looks for `[[name]]`, then `[name]`, then `name =`. Returns `None` rather
/// than pointing at the wrong place.
pub(crate) fn find_header_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("[[{}]]", name), 2usize),
        (format!("[{}]", name), 1usize),
        (format!("{} =", name), 0usize),
        (format!("{}=", name), 0usize),
    ];

    patterns.iter().find_map(|(pattern, skip)| {
        src.find(pattern.as_str())
            .map(|pos| SourceSpan::from((pos + skip, name.len())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_span_array_table() {
        let src = "[Config]\n\n[[Basic]]\nnm = \"a\"\n";
        let span = find_header_span(src, "Basic").unwrap();
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_header_span_plain_key() {
        let src = "Broken = 3\n";
        let span = find_header_span(src, "Broken").unwrap();
        assert_eq!(span.offset(), 0);
    }

    #[test]
    fn test_find_header_span_missing() {
        assert!(find_header_span("[[Other]]\n", "Basic").is_none());
    }

    #[test]
    fn test_messages() {
        let ctx = SourceContext::new("[[G]]\n", "config.toml");
        let err = ctx.missing_field_error("G", 1, "nm");
        assert_eq!(err.to_string(), "item #1 of group 'G' is missing 'nm'");

        let err = ctx.invalid_group_error("G", "integer");
        assert_eq!(
            err.to_string(),
            "group 'G' must be an array of tables, found integer"
        );
    }
}
