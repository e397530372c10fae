//! Fixed textual contract of the generated class.
//!
//! Everything about the output that is not submitted by a generator lives
//! here: the base type the class extends, the constructor shape, the
//! execution routine name, and the placeholder class name. Keeping these as
//! named fields of one struct keeps the format auditable and versionable
//! independent of the accumulation logic.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Named constants of the generated class shape.
///
/// The defaults target the Spark runtime: generated classes extend
/// `SparkRequirement`, take a `SparkSession` in their constructor, and run
/// their statements inside `public void execute()`. The constants are fixed
/// per composer instance; they are never configurable per submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Skeleton {
    /// Base type every generated class extends.
    pub base_class: String,
    /// Type of the single constructor parameter.
    pub session_type: String,
    /// Name of the constructor parameter, forwarded to `super(..)`.
    pub session_param: String,
    /// Type of the temporary variable declared in the execution routine.
    pub temp_row_type: String,
    /// Name of the temporary variable.
    pub temp_var: String,
    /// Name of the execution routine.
    pub exec_method: String,
    /// Class name used when no class fragment was ever submitted.
    pub default_class_name: String,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            base_class: "SparkRequirement".to_string(),
            session_type: "SparkSession".to_string(),
            session_param: "spark".to_string(),
            temp_row_type: "Dataset<Row>".to_string(),
            temp_var: "tmp".to_string(),
            exec_method: "execute".to_string(),
            default_class_name: "DefaultRequirement_0".to_string(),
        }
    }
}

impl Skeleton {
    /// Parse a skeleton from TOML.
    ///
    /// Missing fields fall back to the Spark defaults. `filename` is only
    /// used for error reporting.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::skeleton_parse(e, src, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_spark() {
        let skeleton = Skeleton::default();
        assert_eq!(skeleton.base_class, "SparkRequirement");
        assert_eq!(skeleton.session_type, "SparkSession");
        assert_eq!(skeleton.session_param, "spark");
        assert_eq!(skeleton.temp_row_type, "Dataset<Row>");
        assert_eq!(skeleton.temp_var, "tmp");
        assert_eq!(skeleton.exec_method, "execute");
        assert_eq!(skeleton.default_class_name, "DefaultRequirement_0");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let skeleton = Skeleton::from_toml_str(
            r#"
            base_class = "FlinkRequirement"
            session_type = "StreamExecutionEnvironment"
            session_param = "env"
            "#,
            "skeleton.toml",
        )
        .unwrap();

        assert_eq!(skeleton.base_class, "FlinkRequirement");
        assert_eq!(skeleton.session_param, "env");
        // Untouched fields keep the Spark defaults.
        assert_eq!(skeleton.exec_method, "execute");
        assert_eq!(skeleton.temp_var, "tmp");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let skeleton = Skeleton::from_toml_str("", "skeleton.toml").unwrap();
        assert_eq!(skeleton, Skeleton::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Skeleton::from_toml_str("no_such_field = 1", "skeleton.toml").unwrap_err();
        assert!(matches!(*err, Error::SkeletonParse { .. }));
    }
}
