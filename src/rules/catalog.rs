//! The built-in rule catalog.
//!
//! One function per ordered language pair, each returning its rules in
//! application order. Ordering is load-bearing throughout: a rule that
//! rewrites a keyword into a construct another rule could match must run
//! first (e.g. the `def ...:` rule consumes the trailing colon before the
//! generic colon-to-brace rule sees it), and indentation-width conversion
//! runs after the structural rewrites it depends on.
//!
//! The catalog is deliberately directional and incomplete: some pairs exist
//! in one direction only, and some rules lose information. That asymmetry is
//! a property of best-effort syntactic mimicry, not something to repair with
//! a smarter matcher.

use crate::languages::Language;
use crate::rules::{Rule, RuleSet};

/// All built-in rule sets, keyed by their ordered language pair.
pub(crate) fn default_rule_sets() -> Vec<RuleSet> {
    vec![
        python_to_javascript(),
        python_to_java(),
        python_to_cpp(),
        python_to_csharp(),
        javascript_to_python(),
        javascript_to_java(),
        java_to_python(),
        java_to_javascript(),
        cpp_to_python(),
        csharp_to_python(),
    ]
}

fn python_to_javascript() -> RuleSet {
    RuleSet::new(
        Language::PYTHON,
        Language::JAVASCRIPT,
        vec![
            Rule::text(r"def\s+(\w+)\s*\((.*?)\):", "function ${1}(${2}) {"),
            Rule::text(r"print\s*\((.*?)\)", "console.log(${1});"),
            Rule::text("True", "true"),
            Rule::text("False", "false"),
            Rule::text("None", "null"),
            Rule::text("elif", "else if"),
            Rule::line(r"^\s*#(.*)$", "//${1}"),
            Rule::line(r":\s*$", " {"),
            Rule::line(r"^\s{4}", "  "),
            // Close the block opened by the function header.
            Rule::text(r"\z", "\n}"),
        ],
    )
}

fn python_to_java() -> RuleSet {
    RuleSet::new(
        Language::PYTHON,
        Language::JAVA,
        vec![
            Rule::text(r"def\s+(\w+)\s*\((.*?)\):", "public static void ${1}(${2}) {"),
            Rule::text(r"print\s*\((.*?)\)", "System.out.println(${1});"),
            Rule::text("True", "true"),
            Rule::text("False", "false"),
            Rule::text("None", "null"),
            Rule::line(r"^\s*#(.*)$", "//${1}"),
        ],
    )
}

fn python_to_cpp() -> RuleSet {
    RuleSet::new(
        Language::PYTHON,
        Language::CPP,
        vec![
            Rule::text(r"def\s+(\w+)\s*\((.*?)\):", "void ${1}(${2}) {"),
            Rule::text(r"print\s*\((.*?)\)", "cout << ${1} << endl;"),
            Rule::text("True", "true"),
            Rule::text("False", "false"),
            Rule::text("None", "NULL"),
            Rule::line(r"^\s*#(.*)$", "//${1}"),
        ],
    )
}

fn python_to_csharp() -> RuleSet {
    RuleSet::new(
        Language::PYTHON,
        Language::CSHARP,
        vec![
            Rule::text(r"def\s+(\w+)\s*\((.*?)\):", "static void ${1}(${2}) {"),
            Rule::text(r"print\s*\((.*?)\)", "Console.WriteLine(${1});"),
            Rule::text("True", "true"),
            Rule::text("False", "false"),
            Rule::text("None", "null"),
            Rule::line(r"^\s*#(.*)$", "//${1}"),
        ],
    )
}

fn javascript_to_python() -> RuleSet {
    RuleSet::new(
        Language::JAVASCRIPT,
        Language::PYTHON,
        vec![
            Rule::text(r"function\s+(\w+)\s*\((.*?)\)\s*\{", "def ${1}(${2}):"),
            Rule::text(r"console\.log\s*\((.*?)\);?", "print(${1})"),
            Rule::text("true", "True"),
            Rule::text("false", "False"),
            Rule::text("null", "None"),
            Rule::text("else if", "elif"),
            Rule::line(r"^\s*//(.*)$", "#${1}"),
            Rule::line(r"\s*\{\s*$", ":"),
            Rule::line(r"^\s*\}\s*$", ""),
            Rule::line(r"^\s{2}", "    "),
        ],
    )
}

fn javascript_to_java() -> RuleSet {
    RuleSet::new(
        Language::JAVASCRIPT,
        Language::JAVA,
        vec![
            Rule::text(
                r"function\s+(\w+)\s*\((.*?)\)\s*\{",
                "public static void ${1}(${2}) {",
            ),
            Rule::text(r"console\.log\s*\((.*?)\);?", "System.out.println(${1});"),
        ],
    )
}

fn java_to_python() -> RuleSet {
    RuleSet::new(
        Language::JAVA,
        Language::PYTHON,
        vec![
            Rule::text(
                r"public\s+static\s+void\s+(\w+)\s*\((.*?)\)\s*\{",
                "def ${1}(${2}):",
            ),
            Rule::text(r"System\.out\.println\s*\((.*?)\);?", "print(${1})"),
            Rule::line(r"^\s*//(.*)$", "#${1}"),
            Rule::line(r"^[ \t]*\n", ""),
            Rule::line(r"^\s{8}", "    "),
            Rule::line(r"^\s{4}", ""),
        ],
    )
}

fn java_to_javascript() -> RuleSet {
    RuleSet::new(
        Language::JAVA,
        Language::JAVASCRIPT,
        vec![
            Rule::text(
                r"public\s+static\s+void\s+(\w+)\s*\((.*?)\)\s*\{",
                "function ${1}(${2}) {",
            ),
            Rule::text(r"System\.out\.println\s*\((.*?)\);?", "console.log(${1});"),
            Rule::line(r"^[ \t]*\n", ""),
            Rule::line(r"^\s{8}", "  "),
            Rule::line(r"^\s{4}", ""),
        ],
    )
}

fn cpp_to_python() -> RuleSet {
    RuleSet::new(
        Language::CPP,
        Language::PYTHON,
        vec![
            Rule::text(r"void\s+(\w+)\s*\((.*?)\)\s*\{", "def ${1}(${2}):"),
            Rule::text(r"cout\s*<<\s*(.*?)\s*<<\s*endl;", "print(${1})"),
            Rule::text(r"cout\s*<<\s*(.*?);", "print(${1})"),
            Rule::text("true", "True"),
            Rule::text("false", "False"),
            Rule::text("NULL", "None"),
            Rule::line(r"^\s*//(.*)$", "#${1}"),
            Rule::line(r"^[ \t]*\n", ""),
            Rule::line(r"^\s{4}", ""),
        ],
    )
}

fn csharp_to_python() -> RuleSet {
    RuleSet::new(
        Language::CSHARP,
        Language::PYTHON,
        vec![
            Rule::text(r"static\s+void\s+(\w+)\s*\((.*?)\)\s*\{", "def ${1}(${2}):"),
            Rule::text(r"Console\.WriteLine\s*\((.*?)\);?", "print(${1})"),
            Rule::text("true", "True"),
            Rule::text("false", "False"),
            Rule::text("null", "None"),
            Rule::line(r"^\s*//(.*)$", "#${1}"),
            Rule::line(r"^[ \t]*\n", ""),
            Rule::line(r"^\s{8}", "    "),
            Rule::line(r"^\s{4}", ""),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_in_catalog_compiles() {
        for set in default_rule_sets() {
            for rule in set.rules() {
                assert!(
                    rule.apply("probe").is_ok(),
                    "pattern '{}' in {} -> {} failed to compile",
                    rule.pattern(),
                    set.source(),
                    set.target(),
                );
            }
        }
    }

    #[test]
    fn test_catalog_has_ten_directional_pairs() {
        let sets = default_rule_sets();
        assert_eq!(sets.len(), 10);
    }

    #[test]
    fn test_catalog_pairs_are_unique() {
        let sets = default_rule_sets();
        let mut pairs: Vec<_> = sets.iter().map(|s| (s.source(), s.target())).collect();
        pairs.sort_by_key(|(s, t)| (s.name(), t.name()));
        pairs.dedup();
        assert_eq!(pairs.len(), sets.len());
    }

    #[test]
    fn test_catalog_never_maps_a_language_to_itself() {
        for set in default_rule_sets() {
            assert_ne!(set.source(), set.target());
        }
    }
}
