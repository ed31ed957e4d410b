//! Ant-style path pattern matching.
//!
//! Patterns are split on `/` into segments:
//! - `?` matches exactly one character within a segment
//! - `*` matches zero or more characters within a segment
//! - `**` (a whole segment) matches zero or more entire segments
//!
//! A pattern that starts with `/` is anchored and only matches absolute
//! paths; every other pattern only matches relative paths.

use std::borrow::Cow;

use smallvec::SmallVec;

pub const SEPARATOR: char = '/';

const GLOBSTAR: &str = "**";

/// Segment lists for typical paths stay on the stack.
type Segments<'a> = SmallVec<[&'a str; 16]>;

/// Which form of a visited path a pattern is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Pattern starts with a separator: compare against the absolute path.
    Absolute,
    /// Compare against the path relative to the walk root.
    Relative,
}

impl Anchoring {
    #[inline]
    pub fn of(pattern: &str) -> Self {
        if pattern.starts_with(SEPARATOR) {
            Anchoring::Absolute
        } else {
            Anchoring::Relative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare literals exactly. When false, both sides are Unicode-lowercased.
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Globstar,
    Literal(String),
    Wildcard(Box<[char]>),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw == GLOBSTAR {
            Segment::Globstar
        } else if raw.contains(['*', '?']) {
            Segment::Wildcard(raw.chars().collect())
        } else {
            Segment::Literal(raw.to_owned())
        }
    }

    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        match self {
            Segment::Globstar => true,
            Segment::Literal(lit) => lit == candidate,
            Segment::Wildcard(chars) => wildcard_match(chars, candidate),
        }
    }
}

/// A pattern parsed once and matched against many paths.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    anchoring: Anchoring,
    segments: Vec<Segment>,
    has_globstar: bool,
    options: MatchOptions,
}

impl Pattern {
    pub fn new(raw: &str, options: MatchOptions) -> Self {
        let folded = fold_case(raw, options);
        let body = folded.strip_prefix(SEPARATOR).unwrap_or(&folded);

        let segments: Vec<Segment> = if raw.is_empty() {
            Vec::new()
        } else {
            body.split(SEPARATOR).map(Segment::parse).collect()
        };
        let has_globstar = segments.iter().any(|s| *s == Segment::Globstar);

        Pattern {
            raw: raw.to_owned(),
            anchoring: Anchoring::of(raw),
            segments,
            has_globstar,
            options,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// An empty pattern matches nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if self.is_empty() || Anchoring::of(path) != self.anchoring {
            return false;
        }

        let folded = fold_case(path, self.options);
        let body = folded.strip_prefix(SEPARATOR).unwrap_or(&folded);
        let candidate: Segments<'_> = body.split(SEPARATOR).collect();

        let mut failed = if self.has_globstar {
            FailedPairs::new(self.segments.len(), candidate.len())
        } else {
            FailedPairs::default()
        };

        self.match_from(0, &candidate, 0, &mut failed)
    }

    /// Lockstep walk over pattern and candidate segments, branching on `**`.
    fn match_from(&self, pi: usize, path: &[&str], si: usize, failed: &mut FailedPairs) -> bool {
        let (mut pi, mut si) = (pi, si);

        while pi < self.segments.len() {
            if self.segments[pi] == Segment::Globstar {
                let mut next = pi + 1;
                while next < self.segments.len() && self.segments[next] == Segment::Globstar {
                    next += 1;
                }

                // Trailing `**` swallows whatever is left, including nothing.
                if next == self.segments.len() {
                    return true;
                }

                if failed.contains(pi, si) {
                    return false;
                }
                for start in si..=path.len() {
                    if self.match_from(next, path, start, failed) {
                        return true;
                    }
                }
                failed.insert(pi, si);
                return false;
            }

            if si >= path.len() || !self.segments[pi].matches(path[si]) {
                return false;
            }
            pi += 1;
            si += 1;
        }

        si == path.len()
    }
}

/// Returns whether `path` matches the Ant-style `pattern`.
///
/// An empty pattern never matches. Matching is case-sensitive; use
/// [`Pattern::new`] with [`MatchOptions`] for other behaviour.
#[must_use]
pub fn matches(pattern: &str, path: &str) -> bool {
    Pattern::new(pattern, MatchOptions::default()).matches(path)
}

/// (pattern index, path index) pairs already known not to match.
#[derive(Default)]
struct FailedPairs {
    width: usize,
    seen: Vec<bool>,
}

impl FailedPairs {
    fn new(pattern_len: usize, path_len: usize) -> Self {
        let width = path_len + 1;
        FailedPairs {
            width,
            seen: vec![false; (pattern_len + 1) * width],
        }
    }

    #[inline]
    fn contains(&self, pi: usize, si: usize) -> bool {
        self.seen.get(pi * self.width + si).copied().unwrap_or(false)
    }

    #[inline]
    fn insert(&mut self, pi: usize, si: usize) {
        if let Some(slot) = self.seen.get_mut(pi * self.width + si) {
            *slot = true;
        }
    }
}

fn fold_case(s: &str, options: MatchOptions) -> Cow<'_, str> {
    if options.case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Single-segment match: greedy `*` with backtracking, `?` for one char.
fn wildcard_match(pattern: &[char], text: &str) -> bool {
    let text: SmallVec<[char; 64]> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            resume = t;
            p += 1;
        } else if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if let Some(s) = star {
            // Let the last `*` absorb one more character and retry.
            p = s + 1;
            resume += 1;
            t = resume;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
