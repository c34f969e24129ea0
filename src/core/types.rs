use serde::{Deserialize, Serialize};

/// Kind of a single edit-script entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTag {
    /// Token present on both sides
    Match,
    /// Token present only in the hypothesis (transcript)
    Insert,
    /// Token present only in the reference (prompt)
    Delete,
}

impl EditTag {
    /// The tag that, adjacent to this one, forms a substitution pair.
    ///
    /// `Match` has no opposite.
    #[must_use]
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::Match => None,
            Self::Insert => Some(Self::Delete),
            Self::Delete => Some(Self::Insert),
        }
    }

    /// Diff-style marker used when rendering an edit script
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Match => ' ',
            Self::Insert => '+',
            Self::Delete => '-',
        }
    }
}

impl std::fmt::Display for EditTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Insert => write!(f, "insert"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// One entry of an edit script, borrowing its token from the aligned sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditOp<'a> {
    pub tag: EditTag,
    pub token: &'a str,
}

impl<'a> EditOp<'a> {
    #[must_use]
    pub fn matched(token: &'a str) -> Self {
        Self {
            tag: EditTag::Match,
            token,
        }
    }

    #[must_use]
    pub fn insert(token: &'a str) -> Self {
        Self {
            tag: EditTag::Insert,
            token,
        }
    }

    #[must_use]
    pub fn delete(token: &'a str) -> Self {
        Self {
            tag: EditTag::Delete,
            token,
        }
    }

    /// True if the token came from the reference sequence
    #[must_use]
    pub fn from_reference(&self) -> bool {
        matches!(self.tag, EditTag::Match | EditTag::Delete)
    }

    /// True if the token came from the hypothesis sequence
    #[must_use]
    pub fn from_hypothesis(&self) -> bool {
        matches!(self.tag, EditTag::Match | EditTag::Insert)
    }
}

impl std::fmt::Display for EditOp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tag.symbol(), self.token)
    }
}

/// A reference word read as a different hypothesis word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPair {
    /// Word from the prompt
    pub reference: String,
    /// Word the reader (or recognizer) produced instead
    pub hypothesis: String,
}

impl ErrorPair {
    pub fn new(reference: impl Into<String>, hypothesis: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            hypothesis: hypothesis.into(),
        }
    }
}

/// Word counts from one classified edit script.
///
/// `replaced` is not stored: it is always the number of error pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub correct: usize,
    pub added: usize,
    pub removed: usize,
    pub error_pairs: Vec<ErrorPair>,
}

impl ClassificationResult {
    #[must_use]
    pub fn replaced(&self) -> usize {
        self.error_pairs.len()
    }

    /// Total number of classified words (each error pair counts once)
    #[must_use]
    pub fn total(&self) -> usize {
        self.correct + self.added + self.removed + self.replaced()
    }
}
