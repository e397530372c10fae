//! Shared code-building primitives for the Weld class composer.
//!
//! Provides the language-agnostic pieces used when assembling generated
//! source text:
//!
//! - [`CodeBuilder`] - fluent API for building indented code
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
