//! Dotted pile paths.
//!
//! `a.b.c` names the pile `c` inside namespace `b` inside namespace `a`.
//! Segments may be empty: `a..b` walks through a namespace keyed `""`.

use smallvec::SmallVec;

/// A parsed dotted path, borrowing from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PilePath<'a> {
    raw: &'a str,
    /// Most paths are one to three segments deep.
    segments: SmallVec<[&'a str; 4]>,
}

impl<'a> PilePath<'a> {
    /// Split a path on `.`.
    ///
    /// ```
    /// use dvorak_table::piles::PilePath;
    ///
    /// let path = PilePath::parse("hands.alice");
    /// assert_eq!(path.parents(), &["hands"]);
    /// assert_eq!(path.leaf(), "alice");
    ///
    /// assert_eq!(PilePath::parse("hands..alice").segments(), &["hands", "", "alice"]);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            segments: raw.split('.').collect(),
        }
    }

    /// The path as written.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Namespace segments leading to the leaf.
    #[must_use]
    pub fn parents(&self) -> &[&'a str] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Final segment: the pile's key in its namespace.
    #[must_use]
    pub fn leaf(&self) -> &'a str {
        // `split` always yields at least one segment
        self.segments[self.segments.len() - 1]
    }

    /// Does `other` run through the pile this path names?
    ///
    /// `a.b` is a strict prefix of `a.b.c`, so both cannot be piles.
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &PilePath<'_>) -> bool {
        self.segments.len() < other.segments.len()
            && self.segments.iter().zip(other.segments.iter()).all(|(a, b)| a == b)
    }
}
