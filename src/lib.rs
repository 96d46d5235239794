//! Best-effort, syntax-level code snippet translation.
//!
//! The engine translates short snippets between a fixed set of languages by
//! applying ordered pattern-substitution rules. It performs no parsing or
//! semantic analysis and makes no promise that its output compiles.
//!
//! Layering, inside out:
//!
//! - [`languages`]: the supported language set and per-language metadata
//!   (comment syntax, compilation-unit boilerplate)
//! - [`rules`]: the per-language-pair rule catalog and its registry
//! - [`transformer`]: applies one rule set to one input text
//! - [`service`]: request validation, rule set resolution, passthrough
//!   fallback, and result metadata
//! - [`server`]: the thin HTTP transport over the service
//!
//! Everything above the transport is synchronous and free of shared mutable
//! state; registries are built once and read-only for the life of the
//! process, so `translate` calls may run concurrently without coordination.

pub mod config;
pub mod error;
pub mod languages;
pub mod rules;
pub mod server;
pub mod service;
pub mod transformer;
