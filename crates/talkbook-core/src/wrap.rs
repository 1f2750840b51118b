//! Paragraph reflow for typeset abstracts.
//!
//! Abstracts arrive as free text with arbitrary line breaks. For the booklet
//! they are reflowed to a fixed width with a two-space indent so the LaTeX
//! source stays readable next to the surrounding markup.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Maximum line width of a wrapped abstract, excluding the indent.
pub const WRAP_WIDTH: usize = 98;

/// A newline preceded by a non-newline character. Such lone newlines carry no
/// meaning in the export and are promoted to full paragraph breaks before
/// wrapping.
static SINGLE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n])\n").expect("valid single newline regex"));

/// Any run of two or more consecutive newlines.
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid newline run regex"));

fn wrap_options() -> Options<'static> {
    // Greedy wrapping on whitespace only; hyphenated compounds stay on one
    // line even past the wrap point.
    Options::new(WRAP_WIDTH)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
}

/// Reflows free text into an indented, fixed-width block.
///
/// Line endings are normalized, lone newlines are promoted to paragraph
/// breaks, every paragraph is wrapped at [`WRAP_WIDTH`] without breaking on
/// hyphens, and each non-empty line gets a two-space indent. Newline runs are
/// collapsed in a single pass at the end.
pub fn break_long_lines(source: &str) -> String {
    let unified = source.replace("\r\n", "\n");
    let promoted = SINGLE_NEWLINE.replace_all(&unified, "${1}\n\n");

    let mut lines: Vec<String> = Vec::new();
    for paragraph in promoted.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        for line in textwrap::wrap(paragraph, wrap_options()) {
            if line.is_empty() {
                continue;
            }
            lines.push(format!("  {line}"));
        }
    }

    NEWLINE_RUN.replace_all(&lines.join("\n"), "\n").into_owned()
}
