//! Abstractions for offset pagination over an already ordered sequence.

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// Number of items to skip.
    offset: usize,

    /// Maximum number of items to return.
    limit: usize,
}

impl Arguments {
    /// Creates new [`Arguments`] selecting the provided 1-based `page` of
    /// `per_page` items.
    ///
    /// [`None`] is returned if either value is zero or the page lies beyond
    /// [`usize::MAX`] items.
    #[must_use]
    pub fn new(page: usize, per_page: usize) -> Option<Self> {
        if page == 0 || per_page == 0 {
            return None;
        }
        Some(Self {
            offset: (page - 1).checked_mul(per_page)?,
            limit: per_page,
        })
    }

    /// Returns the number of items skipped by these [`Arguments`].
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the maximum number of items requested by these [`Arguments`].
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the 1-based page number requested by these [`Arguments`].
    #[must_use]
    pub fn page(&self) -> usize {
        self.offset / self.limit + 1
    }
}

/// A page of items cut out of an ordered sequence.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// Total number of items in the sequence this [`Page`] was cut from.
    pub total_count: usize,

    /// [`Arguments`] this [`Page`] was cut with.
    pub arguments: Arguments,
}

impl<T> Page<T> {
    /// Cuts a [`Page`] out of the provided `items` preserving their order.
    #[must_use]
    pub fn slice(items: Vec<T>, arguments: Arguments) -> Self {
        let total_count = items.len();
        let items = items
            .into_iter()
            .skip(arguments.offset)
            .take(arguments.limit)
            .collect();
        Self {
            items,
            total_count,
            arguments,
        }
    }

    /// Indicates whether there are items after this [`Page`].
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.arguments.offset.saturating_add(self.items.len())
            < self.total_count
    }

    /// Indicates whether there are items before this [`Page`].
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.arguments.offset > 0 && self.total_count > 0
    }
}
