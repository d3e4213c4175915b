//! laragen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use config::LaragenConfig;
pub use error::ScaffoldError;
pub use scaffold::{
    ArtifactKind, ArtifactOutcome, GenerationReport, GenerationRequest, ScaffoldGenerator,
    TemplateHelpers,
};
pub use templates::TemplateRegistry;
