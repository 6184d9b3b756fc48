use core::fmt::{self, Display, Formatter};

/// How many more levels of the graph a clone may copy.
///
/// Each descent into a child costs exactly one level. At depth zero the
/// value is handed back as-is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Copy the whole reachable graph.
    #[default]
    Unbounded,
    /// Copy at most this many levels.
    Limited(usize),
}

impl Depth {
    /// No copying at all.
    pub const ZERO: Depth = Depth::Limited(0);

    /// True when no levels remain.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// The depth a child of a value at this depth is cloned with.
    #[must_use]
    pub const fn descend(self) -> Depth {
        match self {
            Depth::Unbounded => Depth::Unbounded,
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
        }
    }
}

impl From<usize> for Depth {
    fn from(n: usize) -> Self {
        Depth::Limited(n)
    }
}

impl From<Option<usize>> for Depth {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Depth::Unbounded, Depth::Limited)
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Unbounded => f.write_str("unbounded"),
            Depth::Limited(n) => write!(f, "{n}"),
        }
    }
}
