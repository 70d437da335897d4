//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use std::sync::Arc;

    use common::pagination;

    use crate::domain::Listing;

    pub use common::pagination::Arguments;

    /// Page of ranked [`Listing`]s.
    pub type Page = pagination::Page<Arc<Listing>>;
}
