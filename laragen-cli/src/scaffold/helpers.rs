//! Identifier helpers for generated code

/// Case and naming helpers used when filling templates
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Lower-case only the first character, leaving the rest untouched
    ///
    /// `Course` becomes `course` and `XRay` becomes `xRay`.
    #[must_use]
    pub fn lower_first(s: &str) -> String {
        let mut chars = s.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }

    /// Name of the constructor parameter holding the repository
    #[must_use]
    pub fn repository_param(class_name: &str) -> String {
        format!("{}Repository", Self::lower_first(class_name))
    }

    /// Fully-qualified model class, e.g. `App\Models\Course`
    #[must_use]
    pub fn model_import(class_name: &str) -> String {
        format!("App\\Models\\{class_name}")
    }
}
