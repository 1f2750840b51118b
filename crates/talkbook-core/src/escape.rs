//! LaTeX escaping for schedule text.
//!
//! Titles, abstracts, and speaker names arrive as plain UTF-8 and have to be
//! rewritten before they can be dropped into the booklet template. The rules
//! form an ordered rewrite chain: later rules operate on the output of
//! earlier ones, so tildes inserted by the dash rule stay unescaped while
//! tildes from the source text become `\~{}`.
//!
//! # Example
//!
//! ```
//! use talkbook_core::escape::escape_latex;
//!
//! assert_eq!(escape_latex("100% & {x}"), r"100\% \& \{x\}");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// The ordered rewrite chain applied by [`escape_latex`].
static LATEX_REWRITES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Gendered suffixes: "Nutzer*innen" reads badly in print, typeset as "Nutzer(innen)".
        (
            Regex::new(r"([a-z])\*(innen|r|n)").expect("valid gender suffix regex"),
            "${1}(${2})",
        ),
        // Curly opening quotes are normalized first so the quote rules below see `"`.
        (Regex::new("[„“]").expect("valid curly quote regex"), "\""),
        (
            Regex::new(r"\\").expect("valid backslash regex"),
            r"\textbackslash",
        ),
        (
            Regex::new(r"([{}_#%&$])").expect("valid reserved char regex"),
            r"\${1}",
        ),
        (Regex::new(r"~").expect("valid tilde regex"), r"\~{}"),
        (Regex::new(r"\^").expect("valid caret regex"), r"\^{}"),
        // German babel quote pairs: "` opens, "' closes.
        (Regex::new(r#" ""#).expect("valid open quote regex"), " \"`"),
        (
            Regex::new(r#""([ .,;:])"#).expect("valid close quote regex"),
            "\"'${1}",
        ),
        (Regex::new(r#"^""#).expect("valid leading quote regex"), "\"`"),
        (Regex::new(r#""$"#).expect("valid trailing quote regex"), "\"'"),
        // Tie a free-standing dash to the preceding word so it cannot start a line.
        (
            Regex::new(r"([^ ]) (–|-) ").expect("valid dash regex"),
            "${1}~-- ",
        ),
    ]
});

/// Escapes raw text for the LaTeX booklet.
///
/// Pure text-to-text rewrite; any input is accepted. Escaping is not
/// idempotent: running it over already-escaped text double-escapes the
/// inserted backslashes.
pub fn escape_latex(source: &str) -> String {
    let mut result = source.to_string();
    for (pattern, replacement) in LATEX_REWRITES.iter() {
        result = pattern.replace_all(&result, *replacement).into_owned();
    }
    result
}
