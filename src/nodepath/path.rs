//! Slash-delimited node paths.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered list of segments addressing a node, e.g. `MapB/3/S`.
///
/// Parsing never fails: segments are not trimmed or validated, so an empty
/// string yields one empty segment. Whether a segment makes sense is only
/// known once it meets a node during [`Path::set`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates a path from already-split segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Splits `text` on `/`.
    ///
    /// ```
    /// use slotpath::nodepath::Path;
    ///
    /// assert_eq!(Path::parse("MapB/3/S").segments(), ["MapB", "3", "S"]);
    /// assert_eq!(Path::parse("").segments(), [""]);
    /// assert_eq!(Path::parse("a//b").len(), 3);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::new(text.split('/').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Joins the first `count` segments, clamped to the path length.
    pub fn through(&self, count: usize) -> String {
        self.segments[..count.min(self.segments.len())].join("/")
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
