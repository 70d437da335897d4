//! [`Command`] for switching the featured status of a [`Listing`].

use std::sync::Arc;

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, Listing},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for switching the featured status of a [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct SetListingFeatured {
    /// ID of the [`Listing`] to switch the featured status of.
    pub listing_id: listing::Id,

    /// Indicator whether the [`Listing`] should be featured.
    pub featured: bool,
}

impl<Db> Command<SetListingFeatured> for Service<Db>
where
    Db: Database<
            Select<By<Option<Arc<Listing>>, listing::Id>>,
            Ok = Option<Arc<Listing>>,
            Err = Traced<database::Error>,
        > + Database<Update<Listing>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetListingFeatured,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetListingFeatured {
            listing_id,
            featured,
        } = cmd;

        let mut listing = self
            .database()
            .execute(Select(By::<Option<Arc<Listing>>, _>::new(listing_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .map(Arc::unwrap_or_clone)
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;
        if listing.is_featured == featured {
            return Ok(listing);
        }

        listing.is_featured = featured;
        self.database()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        log::info!(id = %listing_id, featured, "`Listing` featuring changed");

        Ok(listing)
    }
}

/// Error of [`SetListingFeatured`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Listing`] doesn't exist.
    #[display("`Listing(id: {_0})` does not exist")]
    #[from(ignore)]
    ListingNotExists(#[error(not(source))] listing::Id),
}
