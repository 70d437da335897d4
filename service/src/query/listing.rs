//! [`Query`] collection related to a single [`Listing`].

use std::sync::Arc;

use common::operations::By;

use crate::domain::{listing, Listing};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Listing`] by its [`listing::Id`].
pub type ById = DatabaseQuery<By<Option<Arc<Listing>>, listing::Id>>;
