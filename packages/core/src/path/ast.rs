//! Compiled path representation

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One step of a compiled path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key access (`name`, `.name`)
    Field(String),
    /// Sequence index (`[N]`); negative values count from the end
    Index(i64),
    /// Expand a sequence into independent traversal targets (`[*]`)
    Wildcard,
    /// Project several sibling keys into a sequence (`[a,b]`, `.[a,b.c]`)
    ///
    /// A key may be a dotted chain naming a nested field.
    MultiKey(Vec<String>),
    /// Half-open slice (`[start:end]`) with optional bounds
    Slice {
        /// Inclusive start; negative counts from the end
        start: Option<i64>,
        /// Exclusive end; negative counts from the end
        end: Option<i64>,
    },
}

impl PathSegment {
    /// Whether this segment may fan out into several values
    #[inline]
    #[must_use]
    pub fn is_projection(&self) -> bool {
        matches!(
            self,
            PathSegment::Wildcard | PathSegment::MultiKey(_) | PathSegment::Slice { .. }
        )
    }
}

/// An ordered, non-empty sequence of [`PathSegment`]s
///
/// Obtained from [`parse`](crate::path::parse), [`compile`](crate::path::compile)
/// or `str::parse`. `Display` renders the canonical form, which parses back to
/// an equal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// The empty path addressing the value under test itself
    ///
    /// Only used to qualify validation errors raised at the root; the parser
    /// never produces it.
    #[inline]
    pub(crate) fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// A single-field path holding `raw` verbatim
    ///
    /// Used to report errors against a rule whose path failed to compile.
    pub(crate) fn verbatim(raw: &str) -> Self {
        Self {
            segments: vec![PathSegment::Field(raw.to_string())],
        }
    }

    /// Segments in traversal order
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenate two paths
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Path { segments }
    }

    /// This path extended by one segment
    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Path { segments }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "[{index}]"),
            PathSegment::Wildcard => f.write_str("[*]"),
            PathSegment::MultiKey(keys) => write!(f, "[{}]", keys.join(",")),
            PathSegment::Slice { start, end } => {
                f.write_str("[")?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                f.write_str(":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::path::parse(s)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
