//! Annotated source listing
//!
//! [`render`] prints every source line behind a right-aligned line number. A
//! line with node kinds gets a trailing `// Kind, Kind, ... +K more` comment,
//! moved to its own continuation line when code and comment together would
//! pass [`WRAP_COLUMN`], and is followed by an indented explanation line.
//!
//! - [`theme`]: colour palette for code and kind classes
//! - [`highlight`]: per-line C/C++ token highlighting

pub mod highlight;
pub mod theme;

use crate::catalog::NodeKind;
use crate::correlate::LineTagMap;
use crate::source::SourceFile;
use crossterm::style::Stylize;
use highlight::highlight_source_code;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use theme::DEFAULT_THEME;

/// Visible width past which the annotation moves to its own line
pub const WRAP_COLUMN: usize = 120;

const EXPLANATION_MARKER: &str = "💡 ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Most kinds listed per line before the "+K more" sentinel
    pub max_annotations: usize,
    /// Skip blank lines that carry no kinds
    pub compact: bool,
    pub use_colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_annotations: 5,
            compact: false,
            use_colors: true,
        }
    }
}

/// One entry of a line's annotation list
#[derive(Debug, Clone, PartialEq, Eq)]
enum Annotation<'a> {
    Kind(&'a NodeKind),
    More(usize),
}

impl Annotation<'_> {
    fn text(&self) -> String {
        match self {
            Annotation::Kind(kind) => kind.as_str().to_string(),
            Annotation::More(hidden) => format!("... +{} more", hidden),
        }
    }
}

/// Kinds to show for a line, already in tag order, truncated to `max`
fn displayed(kinds: &BTreeSet<NodeKind>, max: usize) -> Vec<Annotation<'_>> {
    let mut shown: Vec<Annotation<'_>> = kinds.iter().take(max).map(Annotation::Kind).collect();
    if kinds.len() > max {
        shown.push(Annotation::More(kinds.len() - max));
    }
    shown
}

/// Plain annotation comment, as counted for wrapping
fn annotation_text(annotations: &[Annotation<'_>]) -> String {
    let parts: Vec<String> = annotations.iter().map(Annotation::text).collect();
    format!(" // {}", parts.join(", "))
}

/// Write the annotated listing of `source`
pub fn render<W: Write>(
    out: &mut W,
    source: &SourceFile,
    tags: &LineTagMap,
    explanations: &BTreeMap<usize, String>,
    options: &RenderOptions,
) -> io::Result<()> {
    let width = source.line_count().to_string().len();
    let indent = " ".repeat(width + 1);

    for (idx, code) in source.lines.iter().enumerate() {
        let line_num = idx + 1;
        let kinds = tags.get(line_num);

        if options.compact && code.trim().is_empty() && kinds.is_none() {
            continue;
        }

        let line_num_str = format!("{:>width$} ", line_num, width = width);
        if options.use_colors {
            write!(out, "{}", line_num_str.with(DEFAULT_THEME.comment))?;
            for span in highlight_source_code(code) {
                write!(out, "{}", span)?;
            }
        } else {
            write!(out, "{}{}", line_num_str, code)?;
        }

        if let Some(kinds) = kinds {
            let annotations = displayed(kinds, options.max_annotations);
            let plain = annotation_text(&annotations);

            if code.chars().count() + plain.chars().count() > WRAP_COLUMN {
                writeln!(out)?;
                write!(out, "{}", indent)?;
            }

            if options.use_colors {
                write_colored_annotation(out, &annotations)?;
            } else {
                write!(out, "{}", plain)?;
            }
        }
        writeln!(out)?;

        if let Some(explanation) = explanations.get(&line_num).filter(|e| !e.is_empty()) {
            let text = format!("{}{}", EXPLANATION_MARKER, explanation);
            if options.use_colors {
                writeln!(out, "{}{}", indent, text.dim().italic())?;
            } else {
                writeln!(out, "{}{}", indent, text)?;
            }
        }
    }

    out.flush()
}

fn write_colored_annotation<W: Write>(out: &mut W, annotations: &[Annotation<'_>]) -> io::Result<()> {
    write!(out, "{}", " // ".with(DEFAULT_THEME.comment))?;
    for (i, annotation) in annotations.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", ", ".with(DEFAULT_THEME.comment))?;
        }
        match annotation {
            Annotation::Kind(kind) => {
                write!(out, "{}", kind.as_str().with(DEFAULT_THEME.kind_color(kind)))?
            }
            Annotation::More(_) => write!(out, "{}", annotation.text().dim())?,
        }
    }
    Ok(())
}
