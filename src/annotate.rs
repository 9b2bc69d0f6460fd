//! End-to-end annotation of one source file
//!
//! ```text
//! AST dump → correlate (filter) → LineTagMap → explain (per line) → render
//! ```

use crate::correlate::{correlate, LineTagMap};
use crate::explain::explain_lines;
use crate::filter::FilterProfile;
use crate::render::{render, RenderOptions};
use crate::source::SourceFile;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::debug;

/// A source file with its per-line kinds and explanations
#[derive(Debug, Clone)]
pub struct AnnotatedSource {
    pub source: SourceFile,
    pub tags: LineTagMap,
    pub explanations: BTreeMap<usize, String>,
}

impl AnnotatedSource {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Write the annotated listing
    pub fn render<W: Write>(&self, out: &mut W, options: &RenderOptions) -> io::Result<()> {
        render(out, &self.source, &self.tags, &self.explanations, options)
    }
}

/// Correlate `tree` with `source` and explain every tagged line
pub fn annotate(
    source: SourceFile,
    tree: &Value,
    profile: FilterProfile,
    detailed: bool,
) -> AnnotatedSource {
    let tags = correlate(tree, &source.path, profile);
    if tags.is_empty() {
        debug!("no AST annotations found for {}", source.path.display());
    }

    let explanations = explain_lines(&tags, &source, detailed);
    debug!(explained = explanations.len(), "explanations ready");

    AnnotatedSource {
        source,
        tags,
        explanations,
    }
}
