use std::collections::VecDeque;
use std::fmt;

///
/// PropPath
/// Ordered property-name segments, consumed front to back. Every path
/// representation (dotted string, explicit segments) normalizes to this
/// one traversal order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropPath {
    segments: VecDeque<String>,
}

impl PropPath {
    /// Split a dot-delimited path; empty segments are dropped, so `""`
    /// parses to the empty path.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        path.split('.').filter(|s| !s.is_empty()).collect()
    }

    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Consume the next segment to resolve.
    pub fn pop_front(&mut self) -> Option<String> {
        self.segments.pop_front()
    }

    pub fn push_back(&mut self, segment: impl Into<String>) {
        self.segments.push_back(segment.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }

        Ok(())
    }
}

impl From<&str> for PropPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl<S: Into<String>> FromIterator<S> for PropPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}
