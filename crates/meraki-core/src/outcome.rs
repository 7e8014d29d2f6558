// ── Fetch outcome ──
//
// What a single upstream list call produced, with transport and HTTP
// failures already folded into `Unavailable`.

/// Result of one upstream list fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The call succeeded and returned at least one item.
    Data(Vec<T>),
    /// The call succeeded and returned an empty list.
    Empty,
    /// The call failed (transport error, 4xx/5xx, undecodable body).
    Unavailable,
}

impl<T> FetchOutcome<T> {
    /// Classify a successful response body.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Data(items)
        }
    }

    /// Fold a fallible call into an outcome. Errors become `Unavailable`;
    /// logging them is the caller's job.
    pub fn from_result<E>(result: Result<Vec<T>, E>) -> Self {
        result.map_or(Self::Unavailable, Self::from_items)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// First item, if any data came back.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Data(items) => items.first(),
            Self::Empty | Self::Unavailable => None,
        }
    }

    /// The items, with `Empty` and `Unavailable` both degrading to `[]`.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Data(items) => items,
            Self::Empty | Self::Unavailable => Vec::new(),
        }
    }
}
