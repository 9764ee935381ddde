//! Identifier hygiene for sitemap inputs.
//!
//! The builder trusts its inputs. This pass reports what it would silently
//! pass through: empty identifiers, identifiers that are not valid URL path
//! segments, and repeats that would produce duplicate `<loc>` values.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rustc_hash::FxHashSet;
use std::fmt;

/// Characters that must be escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Question,
    Wiki,
}

impl IdentifierKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Wiki => "wiki slug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Empty,
    NotUrlSafe,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierIssue {
    pub kind: IdentifierKind,
    pub id: String,
    pub problem: Problem,
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.label();
        match self.problem {
            Problem::Empty => write!(f, "empty {kind} identifier"),
            Problem::NotUrlSafe => write!(
                f,
                "{kind} `{}` is not a URL-safe path segment (would encode as `{}`)",
                self.id,
                encode_segment(&self.id)
            ),
            Problem::Duplicate => write!(f, "{kind} `{}` is listed more than once", self.id),
        }
    }
}

/// Percent-encode a value as a single URL path segment.
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Check whether an identifier survives path-segment encoding unchanged.
pub fn is_url_safe(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && encode_segment(id) == id
}

/// Report problems in input order.
///
/// A value repeated `n` times yields `n - 1` duplicate issues.
pub fn check_identifiers<I: AsRef<str>>(kind: IdentifierKind, ids: &[I]) -> Vec<IdentifierIssue> {
    let mut seen = FxHashSet::default();
    let mut issues = Vec::new();

    for id in ids {
        let id = id.as_ref();
        let issue = |problem| IdentifierIssue {
            kind,
            id: id.to_owned(),
            problem,
        };

        if id.is_empty() {
            issues.push(issue(Problem::Empty));
        } else if !is_url_safe(id) {
            issues.push(issue(Problem::NotUrlSafe));
        }

        if !seen.insert(id) {
            issues.push(issue(Problem::Duplicate));
        }
    }

    issues
}
