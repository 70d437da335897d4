//! JSON views of [`Query`] results.
//!
//! [`Query`]: service::Query

use serde::Serialize;
use service::{domain::Listing, read::listing::list};

/// Page of ranked [`Listing`]s.
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    /// 1-based number of this [`Page`].
    pub page: usize,

    /// Requested number of [`Listing`]s per [`Page`].
    pub per_page: usize,

    /// Total number of [`Listing`]s matching the search.
    pub total_count: usize,

    /// Indicator whether there are [`Listing`]s after this [`Page`].
    pub has_next_page: bool,

    /// Indicator whether there are [`Listing`]s before this [`Page`].
    pub has_previous_page: bool,

    /// [`Listing`]s of this [`Page`].
    pub items: Vec<&'a Listing>,
}

impl<'a> From<&'a list::Page> for Page<'a> {
    fn from(page: &'a list::Page) -> Self {
        Self {
            page: page.arguments.page(),
            per_page: page.arguments.limit(),
            total_count: page.total_count,
            has_next_page: page.has_next_page(),
            has_previous_page: page.has_previous_page(),
            items: page.items.iter().map(|l| &**l).collect(),
        }
    }
}

/// Carousel of featured [`Listing`]s.
#[derive(Debug, Serialize)]
pub struct Featured<'a> {
    /// Featured [`Listing`]s, newest first.
    pub items: Vec<&'a Listing>,
}

impl<'a, L: AsRef<Listing>> From<&'a [L]> for Featured<'a> {
    fn from(listings: &'a [L]) -> Self {
        Self {
            items: listings.iter().map(AsRef::as_ref).collect(),
        }
    }
}

/// Renders the provided view as pretty-printed JSON.
///
/// # Errors
///
/// If the view fails to serialize.
pub fn render(view: &impl Serialize) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
