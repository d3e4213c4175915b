//! Error types for scaffold generation

use std::path::PathBuf;
use thiserror::Error;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The model the artifacts are named after does not exist
    #[error("Model file not found at {}", path.display())]
    ModelNotFound {
        /// Requested model class name
        class_name: String,
        /// Path that was expected to hold the model
        path: PathBuf,
    },

    /// Class name cannot be used to derive artifact names
    #[error("Invalid class name: '{0}'")]
    InvalidClassName(String),

    /// Filesystem failure while reading or writing an artifact
    #[error("I/O error at {}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Inline template could not be registered
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    /// Inline template could not be rendered
    #[error("Template render error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Configuration file or environment could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it occurred at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the scaffolder
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_message() {
        let err = ScaffoldError::ModelNotFound {
            class_name: "Course".to_string(),
            path: PathBuf::from("app/Models/Course.php"),
        };
        assert_eq!(err.to_string(), "Model file not found at app/Models/Course.php");
    }

    #[test]
    fn test_io_keeps_source() {
        let err = ScaffoldError::io(
            "app/Repo/CourseRepo.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error at app/Repo/CourseRepo.php");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("denied".to_string())
        );
    }
}
