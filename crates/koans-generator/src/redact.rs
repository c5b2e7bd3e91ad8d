//! Redaction of answer-revealing comments.
//!
//! Lesson sources carry a hint comment above each blank, phrased as a
//! question: `// What is 2 + 2? 4`. Each rule in [`REDACTION_RULES`] matches
//! a `//` comment that opens with one interrogative and asks a question, and
//! the whole comment is replaced with [`FILL_IN_THE_BLANK`]. Comments are
//! found by a small lexer, so `//` inside a string or char literal is code
//! and stays untouched. Doc comments (`///`, `//!`) are never redacted. Line
//! endings are kept.
//!
//! The replacement opens with none of the interrogatives, so redacting twice
//! gives the same text as redacting once.

use std::ops::Range;

use regex::Regex;

use crate::error::{GeneratorError, Result};

/// The comment every redacted question becomes.
pub const FILL_IN_THE_BLANK: &str = "// Fill in the blank";

/// One rhetorical-question form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedactionRule {
    /// The interrogative, for log lines and errors.
    pub label: &'static str,
    /// Pattern matched against a single comment, from its `//` to the end of
    /// the line.
    pub pattern: &'static str,
}

/// Applied in order; the first matching rule wins.
pub const REDACTION_RULES: &[RedactionRule] = &[
    RedactionRule {
        label: "What is",
        pattern: r"^//[ \t]*What is\b.*\?",
    },
    RedactionRule {
        label: "What does",
        pattern: r"^//[ \t]*What does\b.*\?",
    },
    RedactionRule {
        label: "How many",
        pattern: r"^//[ \t]*How many\b.*\?",
    },
    RedactionRule {
        label: "Which",
        pattern: r"^//[ \t]*Which\b.*\?",
    },
    RedactionRule {
        label: "Does",
        pattern: r"^//[ \t]*Does\b.*\?",
    },
    RedactionRule {
        label: "Where",
        pattern: r"^//[ \t]*Where\b.*\?",
    },
    RedactionRule {
        label: "Contains",
        pattern: r"^//[ \t]*Contains\b.*\?",
    },
    RedactionRule {
        label: "Is",
        pattern: r"^//[ \t]*Is\b.*\?",
    },
];

/// A comment that still asks a question after redaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnredactedQuestion {
    /// 1-based line number.
    pub line: usize,
    /// The comment, from `//` to the end of the line.
    pub comment: String,
}

/// Compiled [`REDACTION_RULES`].
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<(&'static str, Regex)>,
}

impl Redactor {
    /// Compiles the default rule table.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Pattern` if a rule does not compile.
    pub fn new() -> Result<Self> {
        Self::with_rules(REDACTION_RULES)
    }

    /// Compiles a custom rule table.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Pattern` if a rule does not compile.
    pub fn with_rules(rules: &[RedactionRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern)
                    .map(|re| (rule.label, re))
                    .map_err(|e| GeneratorError::pattern(rule.label, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Replaces every matching question comment with [`FILL_IN_THE_BLANK`].
    pub fn redact(&self, source: &str) -> String {
        let mut text = String::with_capacity(source.len());
        let mut copied = 0;

        for span in plain_comments(source) {
            let comment = &source[span.clone()];
            let Some((label, _)) = self.rules.iter().find(|(_, re)| re.is_match(comment)) else {
                continue;
            };

            tracing::trace!(rule = label, "Redaction rule applied");
            text.push_str(&source[copied..span.start]);
            text.push_str(FILL_IN_THE_BLANK);
            copied = span.end;
        }

        text.push_str(&source[copied..]);
        text
    }

    /// Lists comments in `text` that still contain a question mark.
    pub fn audit(&self, text: &str) -> Vec<UnredactedQuestion> {
        plain_comments(text)
            .into_iter()
            .filter(|span| text[span.clone()].contains('?'))
            .map(|span| UnredactedQuestion {
                line: text[..span.start].matches('\n').count() + 1,
                comment: text[span].trim_end().to_string(),
            })
            .collect()
    }
}

/// `//` comments that are not doc comments.
fn plain_comments(source: &str) -> Vec<Range<usize>> {
    line_comments(source)
        .into_iter()
        .filter(|span| !is_doc_comment(&source[span.clone()]))
        .collect()
}

fn is_doc_comment(comment: &str) -> bool {
    comment.starts_with("//!") || (comment.starts_with("///") && !comment.starts_with("////"))
}

/// Byte ranges of every `//` comment outside string, char and block
/// comment literals. Each range stops before the line break.
fn line_comments(source: &str) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let mut end = source[i..].find('\n').map_or(bytes.len(), |n| i + n);
                if bytes[end - 1] == b'\r' {
                    end -= 1;
                }
                comments.push(i..end);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i + 2),
            b'"' => i = skip_string(bytes, i + 1),
            b'r' if starts_raw_string(bytes, i) => i = skip_raw_string(bytes, i + 1),
            b'\'' => i = skip_char_or_lifetime(source, i),
            _ => i += 1,
        }
    }
    comments
}

const fn is_ident(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// `r"`, `r#"`, `br"` and friends, but not an identifier ending in `r`.
fn starts_raw_string(bytes: &[u8], i: usize) -> bool {
    let starts_token = match i.checked_sub(1).map(|p| bytes[p]) {
        None => true,
        Some(b'b') => i < 2 || !is_ident(bytes[i - 2]),
        Some(prev) => !is_ident(prev),
    };
    if !starts_token {
        return false;
    }

    let hashes = bytes[i + 1..].iter().take_while(|b| **b == b'#').count();
    bytes.get(i + 1 + hashes) == Some(&b'"')
}

fn skip_raw_string(bytes: &[u8], start: usize) -> usize {
    let hashes = bytes[start..].iter().take_while(|b| **b == b'#').count();
    let mut i = start + hashes + 1;

    while i < bytes.len() {
        if bytes[i] == b'"'
            && bytes[i + 1..].iter().take_while(|b| **b == b'#').count() >= hashes
        {
            return i + 1 + hashes;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// `'a'`, `'\n'` and `'é'` are skipped whole; a lifetime only loses its tick.
fn skip_char_or_lifetime(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();

    if bytes.get(start + 1) == Some(&b'\\') {
        return source
            .get(start + 3..)
            .and_then(|rest| rest.find('\''))
            .map_or(bytes.len(), |n| start + 3 + n + 1);
    }

    match source[start + 1..].chars().next() {
        Some(c) if bytes.get(start + 1 + c.len_utf8()) == Some(&b'\'') => {
            start + 2 + c.len_utf8()
        }
        _ => start + 1,
    }
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut depth = 1;
    let mut i = start;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    bytes.len()
}
