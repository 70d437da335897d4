//! [`Command`] for creating a new [`Listing`].

use std::collections::BTreeSet;

use common::{operations::Insert, DateTime};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::listing::{
    Amenity, Area, Location, Price, PropertyKind, RoomCount, Title,
};
use crate::{
    domain::{listing, Listing},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Listing`].
///
/// A new [`Listing`] is never featured.
#[derive(Clone, Debug)]
pub struct CreateListing {
    /// [`Title`] of a new [`Listing`].
    pub title: listing::Title,

    /// [`listing::Kind`] of a new [`Listing`].
    pub kind: listing::Kind,

    /// [`PropertyKind`] of a new [`Listing`].
    pub property: listing::PropertyKind,

    /// [`Price`] of a new [`Listing`].
    pub price: listing::Price,

    /// Number of bedrooms of a new [`Listing`], if applicable.
    pub bedrooms: Option<listing::RoomCount>,

    /// Number of bathrooms of a new [`Listing`], if applicable.
    pub bathrooms: Option<listing::RoomCount>,

    /// [`Area`] of a new [`Listing`].
    pub area: listing::Area,

    /// [`Location`] of a new [`Listing`].
    pub location: listing::Location,

    /// [`Amenity`]s of a new [`Listing`].
    pub amenities: BTreeSet<listing::Amenity>,
}

impl<Db> Command<CreateListing> for Service<Db>
where
    Db: Database<Insert<Listing>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        let CreateListing {
            title,
            kind,
            property,
            price,
            bedrooms,
            bathrooms,
            area,
            location,
            amenities,
        } = cmd;

        let listing = Listing {
            id: listing::Id::new(),
            title,
            kind,
            property,
            price,
            bedrooms,
            bathrooms,
            area,
            location,
            amenities,
            is_featured: false,
            created_at: DateTime::now().coerce(),
        };

        self.database()
            .execute(Insert(listing.clone()))
            .await
            .map_err(tracerr::wrap!())?;
        log::info!(id = %listing.id, "`Listing` created");

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
pub type ExecutionError = database::Error;
