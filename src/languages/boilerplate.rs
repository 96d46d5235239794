//! Compilation-unit boilerplate for compiled target languages.
//!
//! Java, C++ and C# snippets only make sense inside a wrapper class or entry
//! point. A `BoilerplateTemplate` describes that scaffolding in both
//! directions: wrapping a translated body into it, and stripping it from a
//! source snippet before any substitution rule runs.

/// Fixed scaffolding around a translated body.
///
/// Wrapping emits the prologue lines, every body line indented by
/// `body_indent`, then the epilogue lines. Stripping drops prologue/epilogue
/// lines recognized by `strip_prefixes` plus brace-only closing lines; the
/// surviving lines are the body handed to the substitution rules.
#[derive(Debug, Clone)]
pub struct BoilerplateTemplate {
    /// Lines emitted verbatim before the body.
    pub prologue: &'static [&'static str],

    /// Lines emitted verbatim after the body.
    pub epilogue: &'static [&'static str],

    /// Indentation prepended to every non-empty body line on wrap.
    pub body_indent: &'static str,

    /// A source line whose trimmed form starts with one of these prefixes is
    /// boilerplate and is dropped on strip.
    pub strip_prefixes: &'static [&'static str],
}

impl BoilerplateTemplate {
    /// Wrap a translated body into the compilation unit.
    ///
    /// An empty body still wraps normally: the prologue is followed
    /// immediately by the epilogue.
    pub fn wrap(&self, body: &str) -> String {
        let mut lines: Vec<String> = self.prologue.iter().map(|l| l.to_string()).collect();
        for line in body.lines() {
            if line.trim().is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{}", self.body_indent, line));
            }
        }
        lines.extend(self.epilogue.iter().map(|l| l.to_string()));
        lines.join("\n")
    }

    /// Strip the compilation unit from a source snippet.
    ///
    /// Drops every line recognized as boilerplate (prologue prefixes, the
    /// wrapper's closing braces) and keeps everything else, indentation
    /// included. De-indenting the survivors is the rule set's job.
    pub fn strip(&self, source: &str) -> String {
        source
            .lines()
            .filter(|line| !self.is_boilerplate_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_boilerplate_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed == "}" || trimmed == "};" {
            return true;
        }
        self.strip_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
    }
}
