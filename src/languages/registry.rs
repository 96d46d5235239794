//! Language registry: single source of truth for the supported language set.
//!
//! The set is fixed at configuration time and read-only for the life of the
//! process. It uses a singleton pattern with `OnceLock` for thread-safe
//! initialization; adding a language means editing `default_languages`, not
//! calling a runtime API.

use std::sync::OnceLock;

use crate::languages::BoilerplateTemplate;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Canonical display name (e.g. "Python", "C++"). Lookup is
    /// case-insensitive against this name and the aliases.
    pub name: &'static str,

    /// Alternative spellings accepted on input (e.g. "cpp" for C++).
    pub aliases: &'static [&'static str],

    /// Line-comment leader, used for passthrough annotations.
    pub line_comment: &'static str,

    /// Compilation-unit scaffolding, for languages that require one.
    pub boilerplate: Option<BoilerplateTemplate>,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry, initializing it on first access.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by name or alias, case-insensitively.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| {
            lang.name.eq_ignore_ascii_case(name)
                || lang.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// All supported languages, in registration order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Whether a name resolves to a supported language.
    pub fn is_supported(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }
}

/// The built-in language set.
///
/// Ruby is deliberately present with no rule sets registered for it: it
/// exercises the passthrough fallback while still being a valid request
/// language.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            name: "Python",
            aliases: &["py"],
            line_comment: "#",
            boilerplate: None,
        },
        LanguageConfig {
            name: "JavaScript",
            aliases: &["js"],
            line_comment: "//",
            boilerplate: None,
        },
        LanguageConfig {
            name: "Java",
            aliases: &[],
            line_comment: "//",
            boilerplate: Some(BoilerplateTemplate {
                prologue: &[
                    "public class CodeTranslation {",
                    "    public static void main(String[] args) {",
                ],
                epilogue: &["    }", "}"],
                body_indent: "        ",
                strip_prefixes: &["public class", "public static void main"],
            }),
        },
        LanguageConfig {
            name: "C++",
            aliases: &["cpp"],
            line_comment: "//",
            boilerplate: Some(BoilerplateTemplate {
                prologue: &[
                    "#include <iostream>",
                    "#include <string>",
                    "using namespace std;",
                    "",
                    "int main() {",
                ],
                epilogue: &["    return 0;", "}"],
                body_indent: "    ",
                strip_prefixes: &["#include", "using namespace", "int main(", "return 0;"],
            }),
        },
        LanguageConfig {
            name: "C#",
            aliases: &["csharp"],
            line_comment: "//",
            boilerplate: Some(BoilerplateTemplate {
                prologue: &["using System;", "", "class Program {", "    static void Main() {"],
                epilogue: &["    }", "}"],
                body_indent: "        ",
                strip_prefixes: &["using System;", "class Program", "static void Main"],
            }),
        },
        LanguageConfig {
            name: "Ruby",
            aliases: &["rb"],
            line_comment: "#",
            boilerplate: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_name_exact() {
        let config = LanguageRegistry::get().get_by_name("Python");
        assert!(config.is_some());
        assert_eq!(config.unwrap().name, "Python");
    }

    #[test]
    fn test_get_by_name_is_case_insensitive() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_name("python").unwrap().name, "Python");
        assert_eq!(registry.get_by_name("JAVASCRIPT").unwrap().name, "JavaScript");
        assert_eq!(registry.get_by_name("c++").unwrap().name, "C++");
    }

    #[test]
    fn test_get_by_name_accepts_aliases() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_name("cpp").unwrap().name, "C++");
        assert_eq!(registry.get_by_name("csharp").unwrap().name, "C#");
        assert_eq!(registry.get_by_name("js").unwrap().name, "JavaScript");
        assert_eq!(registry.get_by_name("PY").unwrap().name, "Python");
    }

    #[test]
    fn test_get_by_name_nonexistent() {
        assert!(LanguageRegistry::get().get_by_name("Fortran").is_none());
        assert!(LanguageRegistry::get().get_by_name("").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("Ruby"));
        assert!(!registry.is_supported("Go"));
    }

    // ==================== Language Set Tests ====================

    #[test]
    fn test_list_contains_all_six_languages() {
        let names: Vec<_> = LanguageRegistry::get().list().iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec!["Python", "JavaScript", "Java", "C++", "C#", "Ruby"]
        );
    }

    #[test]
    fn test_comment_leaders() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_name("Python").unwrap().line_comment, "#");
        assert_eq!(registry.get_by_name("Ruby").unwrap().line_comment, "#");
        assert_eq!(registry.get_by_name("JavaScript").unwrap().line_comment, "//");
        assert_eq!(registry.get_by_name("Java").unwrap().line_comment, "//");
    }

    #[test]
    fn test_compiled_languages_carry_boilerplate() {
        let registry = LanguageRegistry::get();
        for name in ["Java", "C++", "C#"] {
            assert!(
                registry.get_by_name(name).unwrap().boilerplate.is_some(),
                "{name} should carry boilerplate"
            );
        }
        for name in ["Python", "JavaScript", "Ruby"] {
            assert!(
                registry.get_by_name(name).unwrap().boilerplate.is_none(),
                "{name} should not carry boilerplate"
            );
        }
    }
}
