//! Supported languages and their per-language metadata.
//!
//! All language-related knowledge lives here: the closed set of supported
//! languages, their comment syntax, and the compilation-unit boilerplate
//! some of them require around a translated body.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for the supported language set
//! - `language`: type-safe `Language` value validated against the registry
//! - `boilerplate`: compilation-unit templates for compiled targets
//!
//! # Example
//!
//! ```rust,ignore
//! use code_translator::languages::{Language, LanguageRegistry};
//!
//! let python = Language::from_name("python")?;
//! assert_eq!(python.name(), "Python");
//!
//! for config in LanguageRegistry::get().list() {
//!     println!("{} (comment leader: {})", config.name, config.line_comment);
//! }
//! ```

mod boilerplate;
mod language;
mod registry;

pub use boilerplate::BoilerplateTemplate;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
