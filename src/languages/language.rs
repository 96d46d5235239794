//! Language type: a validated member of the supported language set.

use std::fmt;

use crate::error::ValidationError;
use crate::languages::{BoilerplateTemplate, LanguageConfig, LanguageRegistry};

/// A validated language.
///
/// Only languages present in the registry can be constructed, so holding a
/// `Language` is proof the name was supported. Two values are equal iff
/// their canonical names match; case differences are normalized away by
/// [`Language::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Canonical name as registered (e.g. "Python", "C++").
    name: &'static str,
}

impl Language {
    pub const PYTHON: Language = Language { name: "Python" };
    pub const JAVASCRIPT: Language = Language { name: "JavaScript" };
    pub const JAVA: Language = Language { name: "Java" };
    pub const CPP: Language = Language { name: "C++" };
    pub const CSHARP: Language = Language { name: "C#" };
    pub const RUBY: Language = Language { name: "Ruby" };

    /// Resolve a user-supplied name against the registry.
    ///
    /// Matching is case-insensitive and accepts registered aliases
    /// ("cpp", "js", ...). An unknown name is a [`ValidationError`] with
    /// the `UNSUPPORTED_LANGUAGE` reason code.
    pub fn from_name(name: &str) -> Result<Language, ValidationError> {
        match LanguageRegistry::get().get_by_name(name) {
            Some(config) => Ok(Language { name: config.name }),
            None => Err(ValidationError::UnsupportedLanguage {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Full registry entry for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_name(self.name)
            .expect("language name should always be valid")
    }

    /// Line-comment leader (e.g. "#" for Python, "//" for JavaScript).
    pub fn line_comment(&self) -> &'static str {
        self.config().line_comment
    }

    /// Compilation-unit template, for languages that require one.
    pub fn boilerplate(&self) -> Option<&'static BoilerplateTemplate> {
        self.config().boilerplate.as_ref()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
