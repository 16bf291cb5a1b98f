/// Which end of the interval a traversal starts from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// `true` means reverse, matching the inverted flag on [`crate::Range::set_inverted`].
    pub fn from_inverted(is_inverted: bool) -> Self {
        if is_inverted {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    pub fn is_inverted(self) -> bool {
        self == Self::Reverse
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Signed distance between consecutive values produced in this direction.
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}
