//! Scaffold generator orchestrator
//!
//! Resolves each artifact kind to an [`ArtifactSpec`], renders it without
//! touching the filesystem, then hands the result to [`write_if_absent`].
//! Files that already exist are never modified.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::artifact::ArtifactKind;
use super::helpers::TemplateHelpers;
use crate::config::LaragenConfig;
use crate::error::{Result, ScaffoldError};
use crate::templates::{render_stub, TemplateRegistry};

/// Class name and project location for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model class name, e.g. `Course`
    pub class_name: String,
    /// Root of the Laravel application
    pub base_dir: PathBuf,
}

impl GenerationRequest {
    /// Create a request
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidClassName`] for an empty class name.
    pub fn new(class_name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let class_name = class_name.into();
        if class_name.trim().is_empty() {
            return Err(ScaffoldError::InvalidClassName(class_name));
        }

        Ok(Self {
            class_name,
            base_dir: base_dir.into(),
        })
    }

    /// Path of the model file that must exist before generating
    #[must_use]
    pub fn model_path(&self, extension: &str) -> PathBuf {
        self.base_dir
            .join("app")
            .join("Models")
            .join(format!("{}.{extension}", self.class_name))
    }
}

/// Where an artifact's content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Registered inline template
    Inline(&'static str),
    /// External stub file
    Stub(PathBuf),
}

/// Fully resolved description of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Destination file
    pub output_path: PathBuf,
    /// Template to render
    pub source: TemplateSource,
    /// Placeholder name to value
    pub placeholders: BTreeMap<String, String>,
}

/// What happened to a single artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// File was written
    Generated(PathBuf),
    /// File would be written (dry run)
    Planned(PathBuf),
    /// File already existed and was left alone
    Skipped(PathBuf),
    /// Controller stub was not found, artifact not produced
    MissingStub {
        /// Destination that was not written
        output: PathBuf,
        /// Stub location that was checked
        stub: PathBuf,
    },
}

impl ArtifactOutcome {
    /// Destination path of the artifact
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Generated(path) | Self::Planned(path) | Self::Skipped(path) => path,
            Self::MissingStub { output, .. } => output,
        }
    }
}

/// Outcomes of one run, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Model class name
    pub class_name: String,
    /// One entry per attempted artifact
    pub outcomes: Vec<(ArtifactKind, ArtifactOutcome)>,
}

impl GenerationReport {
    fn count(&self, pred: impl Fn(&ArtifactOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| pred(outcome)).count()
    }

    /// Number of files written
    #[must_use]
    pub fn generated_count(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Generated(_)))
    }

    /// Number of files that would be written
    #[must_use]
    pub fn planned_count(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Planned(_)))
    }

    /// Number of files left alone because they existed
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Skipped(_)))
    }

    /// Number of artifacts not produced because the stub was missing
    #[must_use]
    pub fn missing_stub_count(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::MissingStub { .. }))
    }

    /// Paths written during the run
    #[must_use]
    pub fn written_paths(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                ArtifactOutcome::Generated(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

/// Repository/service/controller scaffold generator
pub struct ScaffoldGenerator {
    config: LaragenConfig,
    templates: TemplateRegistry,
    dry_run: bool,
}

impl ScaffoldGenerator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Returns an error if the inline templates fail to register.
    pub fn new(config: LaragenConfig) -> Result<Self> {
        Ok(Self {
            config,
            templates: TemplateRegistry::new()?,
            dry_run: false,
        })
    }

    /// Render and report artifacts without writing them
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fail unless the model file exists
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ModelNotFound`] naming the expected path.
    pub fn check_model(&self, request: &GenerationRequest) -> Result<()> {
        let path = request.model_path(&self.config.extension);
        if path.exists() {
            tracing::debug!(path = %path.display(), "model found");
            Ok(())
        } else {
            tracing::debug!(path = %path.display(), "model not found");
            Err(ScaffoldError::ModelNotFound {
                class_name: request.class_name.clone(),
                path,
            })
        }
    }

    /// Resolve the path, template and placeholders for one artifact
    #[must_use]
    pub fn spec_for(&self, request: &GenerationRequest, kind: ArtifactKind) -> ArtifactSpec {
        let class_name = &request.class_name;
        let output_path = kind.output_path(&request.base_dir, class_name, &self.config.extension);

        let (source, placeholders) = match kind.template_name() {
            Some(name) => (
                TemplateSource::Inline(name),
                BTreeMap::from([
                    ("class_name".to_string(), class_name.clone()),
                    (
                        "repository_param".to_string(),
                        TemplateHelpers::repository_param(class_name),
                    ),
                    (
                        "model_import".to_string(),
                        TemplateHelpers::model_import(class_name),
                    ),
                ]),
            ),
            None => (
                TemplateSource::Stub(self.config.resolve_stub_path(&request.base_dir)),
                BTreeMap::from([
                    (
                        "namespace".to_string(),
                        self.config.controller_namespace.clone(),
                    ),
                    (
                        "rootNamespace".to_string(),
                        self.config.root_namespace.clone(),
                    ),
                    ("class".to_string(), class_name.clone()),
                ]),
            ),
        };

        ArtifactSpec {
            kind,
            output_path,
            source,
            placeholders,
        }
    }

    /// Render an inline artifact without touching the filesystem
    ///
    /// Returns `Ok(None)` for stub-backed specs.
    ///
    /// # Errors
    ///
    /// Returns an error if the template references a missing placeholder.
    pub fn render_inline(&self, spec: &ArtifactSpec) -> Result<Option<String>> {
        match spec.source {
            TemplateSource::Inline(name) => {
                self.templates.render(name, &spec.placeholders).map(Some)
            }
            TemplateSource::Stub(_) => Ok(None),
        }
    }

    /// Render an artifact's content
    ///
    /// Returns `Ok(None)` when the spec points at a stub that does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the stub cannot be read or a template fails to render.
    pub fn render(&self, spec: &ArtifactSpec) -> Result<Option<String>> {
        match &spec.source {
            TemplateSource::Inline(_) => self.render_inline(spec),
            TemplateSource::Stub(stub) => match fs::read_to_string(stub) {
                Ok(content) => Ok(Some(render_stub(&content, &spec.placeholders))),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(ScaffoldError::io(stub, e)),
            },
        }
    }

    /// Generate a single artifact
    ///
    /// # Errors
    ///
    /// Returns an error for unexpected I/O or template failures.
    pub fn generate_artifact(
        &self,
        request: &GenerationRequest,
        kind: ArtifactKind,
    ) -> Result<ArtifactOutcome> {
        let spec = self.spec_for(request, kind);
        let path = spec.output_path.clone();

        if path.exists() {
            tracing::info!(artifact = %kind, path = %path.display(), "already exists, skipping");
            return Ok(ArtifactOutcome::Skipped(path));
        }

        let Some(content) = self.render(&spec)? else {
            let stub = self.config.resolve_stub_path(&request.base_dir);
            tracing::warn!(artifact = %kind, stub = %stub.display(), "stub not found, skipping");
            return Ok(ArtifactOutcome::MissingStub { output: path, stub });
        };

        if self.dry_run {
            tracing::info!(artifact = %kind, path = %path.display(), "dry run, not writing");
            return Ok(ArtifactOutcome::Planned(path));
        }

        if write_if_absent(&path, &content)? {
            tracing::info!(artifact = %kind, path = %path.display(), bytes = content.len(), "generated");
            Ok(ArtifactOutcome::Generated(path))
        } else {
            tracing::info!(artifact = %kind, path = %path.display(), "created concurrently, skipping");
            Ok(ArtifactOutcome::Skipped(path))
        }
    }

    /// Generate all artifacts, reporting each outcome as it happens
    ///
    /// Stops at the first unexpected error; artifacts already written stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is missing or an artifact fails unexpectedly.
    pub fn generate_with(
        &self,
        request: &GenerationRequest,
        mut on_outcome: impl FnMut(ArtifactKind, &ArtifactOutcome),
    ) -> Result<GenerationReport> {
        self.check_model(request)?;

        let mut outcomes = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let outcome = self.generate_artifact(request, kind)?;
            on_outcome(kind, &outcome);
            outcomes.push((kind, outcome));
        }

        Ok(GenerationReport {
            class_name: request.class_name.clone(),
            outcomes,
        })
    }

    /// Generate all artifacts
    ///
    /// # Errors
    ///
    /// See [`ScaffoldGenerator::generate_with`].
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport> {
        self.generate_with(request, |_, _| {})
    }
}

/// Write `content` to `path` unless a file is already there
///
/// Parent directories are created as needed. The file is opened with
/// exclusive creation, so a file appearing after the existence check is
/// never overwritten. Returns whether the file was written.
///
/// # Errors
///
/// Returns an error if directory creation or the write fails.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(ScaffoldError::io(path, e)),
    };

    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(path, e))?;

    Ok(true)
}
