//! [`Query`] collection related to the multiple [`Listing`]s.

use std::sync::Arc;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Listing,
    infra::{database, Database},
    read::listing::list,
    search::{self, Criteria},
    Service,
};

use super::Query;

/// Queries a [`list::Page`] of [`Listing`]s matching the provided
/// [`Criteria`], featured first and newest next.
#[derive(Clone, Debug)]
pub struct Search {
    /// [`Criteria`] to narrow [`Listing`]s with.
    pub criteria: Criteria,

    /// [`list::Arguments`] of the requested [`list::Page`].
    pub arguments: list::Arguments,
}

impl<Db> Query<Search> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Arc<Listing>>, ()>>,
        Ok = Vec<Arc<Listing>>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = list::Page;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Search) -> Result<Self::Ok, Self::Err> {
        let Search {
            criteria,
            arguments,
        } = query;

        let listings = self
            .database()
            .execute(Select(By::<Vec<Arc<Listing>>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        let candidates = listings.len();
        let ranked = search::filter_and_rank(listings, &criteria);
        log::debug!(
            candidates,
            matched = ranked.len(),
            page = arguments.page(),
            "`Listing`s searched"
        );

        Ok(list::Page::slice(ranked, arguments))
    }
}

/// Queries up to `limit` featured [`Listing`]s matching the provided
/// [`Criteria`], newest first.
///
/// These are the leading [`Listing`]s of a [`Search`] with the same
/// [`Criteria`].
#[derive(Clone, Debug)]
pub struct Featured {
    /// [`Criteria`] to narrow [`Listing`]s with.
    pub criteria: Criteria,

    /// Maximum number of [`Listing`]s to return.
    pub limit: usize,
}

impl<Db> Query<Featured> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Arc<Listing>>, ()>>,
        Ok = Vec<Arc<Listing>>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Arc<Listing>>;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Featured) -> Result<Self::Ok, Self::Err> {
        let Featured { criteria, limit } = query;

        let listings = self
            .database()
            .execute(Select(By::<Vec<Arc<Listing>>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        // Featured `Listing`s are always ranked first.
        let featured = search::filter_and_rank(listings, &criteria)
            .into_iter()
            .take_while(|l| l.is_featured)
            .take(limit)
            .collect::<Vec<_>>();
        log::debug!(
            found = featured.len(),
            limit,
            "featured `Listing`s selected"
        );

        Ok(featured)
    }
}
