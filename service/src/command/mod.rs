//! [`Command`] definition.

pub mod create_listing;
pub mod set_listing_featured;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_listing::CreateListing, set_listing_featured::SetListingFeatured,
};
