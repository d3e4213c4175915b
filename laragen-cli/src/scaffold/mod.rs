//! Repository, service and controller scaffolding
//!
//! Given a model class name, produces five PHP artifacts under the
//! conventional Laravel directories:
//! - `app/Interface/IRepo/I{Class}Repo.php`
//! - `app/Repo/{Class}Repo.php`
//! - `app/Interface/IService/I{Class}Service.php`
//! - `app/Service/{Class}Service.php`
//! - `app/Http/Controllers/{Class}Controller.php` (from a stub)

pub mod artifact;
pub mod generator;
pub mod helpers;

pub use artifact::ArtifactKind;
pub use generator::{
    write_if_absent, ArtifactOutcome, ArtifactSpec, GenerationReport, GenerationRequest,
    ScaffoldGenerator, TemplateSource,
};
pub use helpers::TemplateHelpers;
