//! In-memory [`Database`] implementation.

use std::{collections::HashSet, io, path::Path, sync::Arc};

use common::operations::{By, Insert, Select, Update};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{database, Database},
};

/// In-memory listing store.
///
/// [`Listing`]s are kept in insertion order and handed out behind [`Arc`]s,
/// so a snapshot taken by a reader stays intact while the store is updated.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored [`Listing`]s in insertion order.
    listings: Arc<RwLock<Vec<Arc<Listing>>>>,
}

impl Memory {
    /// Creates a new [`Memory`] store holding the provided [`Listing`]s.
    ///
    /// # Errors
    ///
    /// If the provided [`Listing`]s contain a duplicate [`listing::Id`].
    pub fn new(
        listings: impl IntoIterator<Item = Listing>,
    ) -> Result<Self, Traced<database::Error>> {
        let mut seen = HashSet::new();
        let listings = listings
            .into_iter()
            .map(|l| {
                if seen.insert(l.id) {
                    Ok(Arc::new(l))
                } else {
                    Err(SnapshotError::DuplicateId(l.id))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(tracerr::wrap!())
            .map_err(tracerr::map_from)?;

        Ok(Self {
            listings: Arc::new(RwLock::new(listings)),
        })
    }

    /// Loads a new [`Memory`] store from the JSON snapshot at the provided
    /// `path`.
    ///
    /// The snapshot is an object with a single `listings` array.
    ///
    /// # Errors
    ///
    /// If the snapshot cannot be read, is malformed, or contains a duplicate
    /// [`listing::Id`].
    pub async fn load(
        path: impl AsRef<Path>,
    ) -> Result<Self, Traced<database::Error>> {
        let raw = tokio::fs::read(path.as_ref())
            .await
            .map_err(tracerr::from_and_wrap!(=> SnapshotError))
            .map_err(tracerr::map_from)?;
        let Snapshot { listings } = serde_json::from_slice(&raw)
            .map_err(tracerr::from_and_wrap!(=> SnapshotError))
            .map_err(tracerr::map_from)?;

        Self::new(listings).map_err(tracerr::wrap!())
    }
}

/// Serialized contents of a [`Memory`] store.
#[derive(Debug, Deserialize)]
struct Snapshot {
    /// Stored [`Listing`]s.
    listings: Vec<Listing>,
}

/// Error of loading a [`Memory`] store.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    /// Snapshot cannot be read.
    #[display("cannot read snapshot: {_0}")]
    Read(io::Error),

    /// Snapshot is not a valid JSON of [`Listing`]s.
    #[display("malformed snapshot: {_0}")]
    Malformed(serde_json::Error),

    /// Snapshot contains the same [`listing::Id`] twice.
    #[display("duplicate `Listing(id: {_0})` in snapshot")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] listing::Id),
}

impl Database<Select<By<Vec<Arc<Listing>>, ()>>> for Memory {
    type Ok = Vec<Arc<Listing>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Arc<Listing>>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.listings.read().await.clone())
    }
}

impl Database<Select<By<Option<Arc<Listing>>, listing::Id>>> for Memory {
    type Ok = Option<Arc<Listing>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Arc<Listing>>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .listings
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }
}

impl Database<Insert<Listing>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut listings = self.listings.write().await;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(tracerr::new!(database::Error::DuplicateId(
                listing.id
            )));
        }
        listings.push(Arc::new(listing));
        Ok(())
    }
}

impl Database<Update<Listing>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(listing): Update<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let listing = Arc::new(listing);
        let mut listings = self.listings.write().await;
        // Insertion order is the ranking tiebreak, so replace in place.
        if let Some(existing) = listings.iter_mut().find(|l| l.id == listing.id)
        {
            *existing = listing;
        } else {
            listings.push(listing);
        }
        Ok(())
    }
}
