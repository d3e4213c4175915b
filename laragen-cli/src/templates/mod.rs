//! Artifact templates
//!
//! Repository, service and interface files come from inline handlebars
//! templates. The controller comes from an external stub whose placeholders
//! are replaced literally, so any other braces in the stub are left alone.

use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;

pub mod files;
pub use files::*;

/// Placeholders recognised in controller stubs
pub const STUB_PLACEHOLDERS: [&str; 3] = ["namespace", "rootNamespace", "class"];

/// Registry of inline artifact templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Create a registry with all inline templates registered
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for (name, template) in [
            ("repository_interface", REPOSITORY_INTERFACE),
            ("repository", REPOSITORY),
            ("service_interface", SERVICE_INTERFACE),
            ("service", SERVICE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(Box::new)?;
        }

        Ok(Self { handlebars })
    }

    /// Render a registered template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or references a missing value.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(name, data)?)
    }

    /// Whether a template with this name is registered
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

/// Replace stub placeholders with their values
///
/// Both `{{ name }}` and `{{name}}` spellings are substituted. Tokens not in
/// `values` are left untouched.
#[must_use]
pub fn render_stub(stub: &str, values: &BTreeMap<String, String>) -> String {
    values.iter().fold(stub.to_string(), |content, (name, value)| {
        content
            .replace(&format!("{{{{ {name} }}}}"), value)
            .replace(&format!("{{{{{name}}}}}"), value)
    })
}

/// Find stub placeholders that are still present in rendered content
#[must_use]
pub fn unresolved_placeholders(content: &str) -> Vec<&'static str> {
    STUB_PLACEHOLDERS
        .into_iter()
        .filter(|name| {
            content.contains(&format!("{{{{ {name} }}}}"))
                || content.contains(&format!("{{{{{name}}}}}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course_data() -> serde_json::Value {
        json!({
            "class_name": "Course",
            "repository_param": "courseRepository",
            "model_import": "App\\Models\\Course",
        })
    }

    #[test]
    fn test_all_templates_registered() {
        let registry = TemplateRegistry::new().unwrap();
        for name in ["repository_interface", "repository", "service_interface", "service"] {
            assert!(registry.has_template(name), "missing template: {name}");
        }
    }

    #[test]
    fn test_render_repository() {
        let registry = TemplateRegistry::new().unwrap();
        let content = registry.render("repository", &course_data()).unwrap();

        assert!(content.starts_with("<?php\n"));
        assert!(content.contains("use App\\Interface\\IRepo\\ICourseRepo;"));
        assert!(content.contains("use App\\Models\\Course;"));
        assert!(content.contains("class CourseRepo extends GenericRepo implements ICourseRepo"));
        assert!(content.contains("parent::__construct(Course::class);"));
        assert!(content.contains("protected function getAllowedFilters(): array"));
        assert!(content.contains("protected function getAllowedSorts(): array"));
        assert!(content.contains("protected function getAllowedIncludes(): array"));
        assert!(content.contains("'created_at',"));
    }

    #[test]
    fn test_render_service() {
        let registry = TemplateRegistry::new().unwrap();
        let content = registry.render("service", &course_data()).unwrap();

        assert!(content.contains("class CourseService extends GenericService implements ICourseService"));
        assert!(content.contains("public function __construct(ICourseRepo $courseRepository)"));
        assert!(content.contains("parent::__construct($courseRepository);"));
    }

    #[test]
    fn test_render_interfaces() {
        let registry = TemplateRegistry::new().unwrap();

        let repo = registry.render("repository_interface", &course_data()).unwrap();
        assert!(repo.contains("namespace App\\Interface\\IRepo;"));
        assert!(repo.contains("interface ICourseRepo extends IGenericRepo"));

        let service = registry.render("service_interface", &course_data()).unwrap();
        assert!(service.contains("namespace App\\Interface\\IService;"));
        assert!(service.contains("interface ICourseService extends IGenericService"));
    }

    #[test]
    fn test_missing_value_is_error() {
        let registry = TemplateRegistry::new().unwrap();
        let result = registry.render("service", &json!({ "class_name": "Course" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_stub_replaces_both_spellings() {
        let values = BTreeMap::from([
            ("namespace".to_string(), "App\\Http\\Controllers".to_string()),
            ("rootNamespace".to_string(), "App\\".to_string()),
            ("class".to_string(), "Course".to_string()),
        ]);
        let stub = "namespace {{ namespace }};\nuse {{rootNamespace}}Http\\Controllers\\Controller;\nclass {{ class }} extends Controller\n// {{class}}\n";

        let content = render_stub(stub, &values);
        assert_eq!(
            content,
            "namespace App\\Http\\Controllers;\nuse App\\Http\\Controllers\\Controller;\nclass Course extends Controller\n// Course\n"
        );
        assert!(unresolved_placeholders(&content).is_empty());
    }

    #[test]
    fn test_render_stub_leaves_other_braces() {
        let values = BTreeMap::from([("class".to_string(), "Room".to_string())]);
        let content = render_stub("{{ class }} {{ other }} { }", &values);
        assert_eq!(content, "Room {{ other }} { }");
    }

    #[test]
    fn test_unresolved_placeholders() {
        assert_eq!(
            unresolved_placeholders("{{ namespace }} {{class}}"),
            vec!["namespace", "class"]
        );
    }
}
