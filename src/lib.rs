//! # Introduction
//!
//! astlens lines up a Clang JSON AST dump with the text of the file it was
//! produced from. Every source line is annotated with the node kinds that
//! begin or end on it, followed by a short plain-English explanation of what
//! those kinds mean together.
//!
//! ## Pipeline
//!
//! ```text
//! clang -ast-dump=json → dump → correlate → explain → render
//! ```
//!
//! 1. [`dump`]: runs the parser (or loads a saved dump) into a
//!    [`dump::AstDocument`] wrapping a [`serde_json::Value`].
//! 2. [`correlate`]: walks the tree and builds a [`correlate::LineTagMap`],
//!    keeping only the kinds the active [`filter::FilterProfile`] allows.
//! 3. [`explain`]: turns each line's kinds into a sentence using the
//!    [`catalog`] of descriptions and pattern rules.
//! 4. [`render`]: prints the numbered, annotated listing.
//!
//! [`annotate::annotate`] runs steps 2 and 3 in one call.
//!
//! Explanations are heuristic. astlens does not parse or check C/C++ itself.

pub mod annotate;
pub mod catalog;
pub mod correlate;
pub mod dump;
pub mod errors;
pub mod explain;
pub mod filter;
pub mod render;
pub mod source;

pub use annotate::{annotate, AnnotatedSource};
pub use errors::AnnotateError;
pub use filter::FilterProfile;
