use std::fmt;
use std::ops::Range;

use gradease_syntax::{find_gradients, parse_stylesheet, ParseError};
use log::debug;

use crate::policy::{Outcome, Transformer};

/// A non-fatal problem tied to a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.col, self.message)
    }
}

/// Result of transforming a whole stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformReport {
    pub css: String,
    pub rewritten: usize,
    pub stripped: usize,
    pub unchanged: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl TransformReport {
    /// Gradient occurrences looked at, keyframes excluded.
    pub fn total(&self) -> usize {
        self.rewritten + self.stripped + self.unchanged
    }
}

impl Transformer<'_> {
    /// Rewrite every eligible gradient in `src`.
    ///
    /// Declarations inside `@keyframes` (prefixed or not, at any depth) are
    /// never touched. Bytes outside the rewritten argument lists are copied
    /// through unchanged, comments and formatting included.
    pub fn transform_stylesheet(&self, src: &str) -> Result<TransformReport, ParseError> {
        let sheet = parse_stylesheet(src)?;
        let mut report = TransformReport::default();
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();

        for item in sheet.declarations() {
            let decl = item.declaration;
            let calls = find_gradients(&decl.value);
            if calls.is_empty() {
                continue;
            }
            if item.in_keyframes {
                debug!("{}:{}: inside keyframes, skipping {}", decl.line, decl.col, decl.property);
                continue;
            }

            for call in calls {
                let args = &decl.value[call.args_span.clone()];
                match self.transform_gradient(call.kind, args) {
                    Outcome::Unchanged(err) => {
                        report.unchanged += 1;
                        if err.is_diagnostic() {
                            report.diagnostics.push(Diagnostic {
                                line: decl.line,
                                col: decl.col,
                                message: err.to_string(),
                            });
                        }
                    }
                    outcome => {
                        if matches!(outcome, Outcome::Rewritten(_)) {
                            report.rewritten += 1;
                        } else {
                            report.stripped += 1;
                        }
                        let base = decl.value_span.start;
                        let range = base + call.args_span.start..base + call.args_span.end;
                        if let Some(text) = outcome.replacement() {
                            edits.push((range, text.to_string()));
                        }
                    }
                }
            }
        }

        report.css = splice(src, edits);
        Ok(report)
    }
}

/// Apply non-overlapping replacements to `src`.
fn splice(src: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    let mut out = src.to_string();
    // Back to front so earlier offsets stay valid.
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    for (range, text) in edits {
        out.replace_range(range, &text);
    }
    out
}
