//! [`Database`]-related implementations.

pub mod memory;

use derive_more::{Display, Error as StdError, From};

use crate::domain::listing;
#[cfg(doc)]
use crate::domain::Listing;

pub use self::memory::Memory;

/// Listing store operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Memory`] snapshot error.
    #[display("`Memory` snapshot error: {_0}")]
    Snapshot(memory::SnapshotError),

    /// [`Listing`] with the same [`listing::Id`] is stored already.
    #[display("`Listing(id: {_0})` already exists")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] listing::Id),
}
