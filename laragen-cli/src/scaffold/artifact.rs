//! Artifact kinds and their output locations

use std::fmt;
use std::path::{Path, PathBuf};

/// One kind of generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `app/Interface/IRepo/I{Class}Repo`
    RepositoryInterface,
    /// `app/Repo/{Class}Repo`
    Repository,
    /// `app/Interface/IService/I{Class}Service`
    ServiceInterface,
    /// `app/Service/{Class}Service`
    Service,
    /// `app/Http/Controllers/{Class}Controller`
    Controller,
}

impl ArtifactKind {
    /// All kinds, in generation order
    pub const ALL: [Self; 5] = [
        Self::RepositoryInterface,
        Self::Repository,
        Self::ServiceInterface,
        Self::Service,
        Self::Controller,
    ];

    /// Human-readable label used in status lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RepositoryInterface => "repository interface",
            Self::Repository => "repository",
            Self::ServiceInterface => "service interface",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// Directory segments below the base directory
    const fn dir_segments(self) -> &'static [&'static str] {
        match self {
            Self::RepositoryInterface => &["app", "Interface", "IRepo"],
            Self::Repository => &["app", "Repo"],
            Self::ServiceInterface => &["app", "Interface", "IService"],
            Self::Service => &["app", "Service"],
            Self::Controller => &["app", "Http", "Controllers"],
        }
    }

    /// File stem for a class, e.g. `ICourseRepo`
    #[must_use]
    pub fn file_stem(self, class_name: &str) -> String {
        match self {
            Self::RepositoryInterface => format!("I{class_name}Repo"),
            Self::Repository => format!("{class_name}Repo"),
            Self::ServiceInterface => format!("I{class_name}Service"),
            Self::Service => format!("{class_name}Service"),
            Self::Controller => format!("{class_name}Controller"),
        }
    }

    /// Output path relative to the base directory
    #[must_use]
    pub fn relative_path(self, class_name: &str, extension: &str) -> PathBuf {
        let mut path: PathBuf = self.dir_segments().iter().collect();
        path.push(format!("{}.{extension}", self.file_stem(class_name)));
        path
    }

    /// Output path under `base_dir`
    #[must_use]
    pub fn output_path(self, base_dir: &Path, class_name: &str, extension: &str) -> PathBuf {
        base_dir.join(self.relative_path(class_name, extension))
    }

    /// Name of the inline template, `None` when rendered from a stub
    #[must_use]
    pub const fn template_name(self) -> Option<&'static str> {
        match self {
            Self::RepositoryInterface => Some("repository_interface"),
            Self::Repository => Some("repository"),
            Self::ServiceInterface => Some("service_interface"),
            Self::Service => Some("service"),
            Self::Controller => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
