use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for weld-java operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("class fragment submitted without a class name")]
    #[diagnostic(
        code(weld::missing_class_name),
        help("submit at least one fragment under the class category, e.g. submit(Category::Class, [\"MyRequirement\"])")
    )]
    MissingClassName,

    #[error("failed to parse skeleton config")]
    #[diagnostic(code(weld::skeleton_parse))]
    SkeletonParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a skeleton parse error from a toml error.
    pub fn skeleton_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::SkeletonParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a missing class name error.
    pub fn missing_class_name() -> Box<Self> {
        Box::new(Error::MissingClassName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_class_name_message() {
        let err = Error::missing_class_name();
        assert_eq!(
            err.to_string(),
            "class fragment submitted without a class name"
        );
    }

    #[test]
    fn test_skeleton_parse_wraps_toml_error() {
        let bad = "base_class = ";
        let source = toml::from_str::<toml::Value>(bad).unwrap_err();
        let err = Error::skeleton_parse(source, bad, "skeleton.toml");
        assert!(matches!(*err, Error::SkeletonParse { .. }));
        assert_eq!(err.to_string(), "failed to parse skeleton config");
    }
}
