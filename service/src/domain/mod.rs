//! Domain definitions.

pub mod listing;

pub use self::listing::Listing;
