//! Static knowledge about Clang AST node kinds
//!
//! - [`kinds`]: the closed [`NodeKind`] enumeration with one-line descriptions
//! - [`patterns`]: ordered multi-kind [`PatternRule`]s with canned explanations
//!
//! Everything here is immutable data. The only runtime structure is the
//! tag-text index used by [`NodeKind::from_tag`], built on first use.

pub mod kinds;
pub mod patterns;

pub use kinds::NodeKind;
pub use patterns::{PatternRule, PATTERN_RULES};
