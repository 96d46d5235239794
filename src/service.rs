//! Translation service: validation, rule set resolution, fallback, metadata.
//!
//! The single synchronous boundary the engine is consumed through. The
//! service is the only layer that turns internal inconsistency into a typed
//! error; the registry and transformer below it only return structured
//! failure signals. A missing rule set is never an error — only malformed
//! input is.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{TranslateError, ValidationError};
use crate::languages::{Language, LanguageRegistry};
use crate::rules::RuleSetRegistry;
use crate::transformer;

/// A translation request as it arrives on the wire.
///
/// Every field is optional so that a missing field reaches the validator
/// (and gets a `MISSING_FIELD` reason code) instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationRequest {
    pub source_code: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
}

/// Metadata attached to every successful translation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadata {
    pub source_language: String,
    pub target_language: String,
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// The outcome of a successful translation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_code: String,
    pub metadata: TranslationMetadata,
}

/// Translate a request, or fail with a typed validation/engine error.
///
/// On a valid request: resolve the rule set for the ordered pair and run it
/// through the transformer; when no rule set exists, degrade to an annotated
/// passthrough. Elapsed processing time is measured here, with no artificial
/// delay — simulated latency belongs to the transport layer.
pub fn translate(request: &TranslationRequest) -> Result<TranslationResult, TranslateError> {
    let started = Instant::now();
    let (source, target, code) = validate(request)?;

    let translated_code = match RuleSetRegistry::get().lookup(source, target) {
        Some(rule_set) => transformer::apply(rule_set, code).map_err(|fault| {
            error!(%source, %target, %fault, "rule application failed");
            fault
        })?,
        None => {
            debug!(%source, %target, "no rule set for pair, returning passthrough");
            passthrough(source, target, code)
        }
    };

    Ok(TranslationResult {
        translated_code,
        metadata: TranslationMetadata {
            source_language: source.name().to_string(),
            target_language: target.name().to_string(),
            processing_time_ms: started.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        },
    })
}

/// Languages the engine accepts in requests.
pub fn supported_languages() -> Vec<Language> {
    LanguageRegistry::get()
        .list()
        .iter()
        .map(|config| Language::from_name(config.name).expect("registry names are valid"))
        .collect()
}

/// Ordered pairs with a registered rule set.
pub fn supported_pairs() -> Vec<(Language, Language)> {
    RuleSetRegistry::get().supported_pairs()
}

fn validate(
    request: &TranslationRequest,
) -> Result<(Language, Language, &str), ValidationError> {
    let code = non_empty(request.source_code.as_deref(), "sourceCode")?;
    let source_name = non_empty(request.source_language.as_deref(), "sourceLanguage")?;
    let target_name = non_empty(request.target_language.as_deref(), "targetLanguage")?;

    let source = Language::from_name(source_name)?;
    let target = Language::from_name(target_name)?;
    if source == target {
        return Err(ValidationError::SameLanguage);
    }

    Ok((source, target, code))
}

fn non_empty<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Annotated passthrough for pairs with no rule set.
///
/// Exactly one prepended line comment, in the *target* language's comment
/// syntax, over the byte-for-byte unmodified source.
fn passthrough(source: Language, target: Language, code: &str) -> String {
    format!(
        "{} Translated from {} to {}\n{}",
        target.line_comment(),
        source.name(),
        target.name(),
        code
    )
}
