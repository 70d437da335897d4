//! [`Args`] definitions.

use std::collections::BTreeSet;

use clap::Parser;
use rust_decimal::Decimal;
use service::{domain::listing, search::Criteria};

/// Search over real estate listings.
#[derive(Debug, Parser)]
#[command(name = "listings", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the [`Args`].
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Prints a page of listings matching the filters, featured first and
    /// newest next.
    Search {
        /// [`Filter`] to narrow listings with.
        #[command(flatten)]
        filter: Filter,

        /// 1-based number of the page to print.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Number of listings per page, configured one if omitted.
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Prints featured listings matching the filters, newest first.
    Featured {
        /// [`Filter`] to narrow listings with.
        #[command(flatten)]
        filter: Filter,

        /// Maximum number of listings to print, configured one if omitted.
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Filters of a listing search, each one optional.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Filter {
    /// Required listing kind (`SALE` or `RENT`).
    #[arg(long)]
    pub listing_kind: Option<listing::Kind>,

    /// Required property kind (`HOUSE`, `APARTMENT`, `LAND`, ...).
    #[arg(long)]
    pub property_kind: Option<listing::PropertyKind>,

    /// Required province, matched exactly.
    #[arg(long)]
    pub province: Option<listing::Province>,

    /// Required city, matched exactly.
    #[arg(long)]
    pub city: Option<listing::City>,

    /// Inclusive lower bound of the price amount.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Inclusive upper bound of the price amount.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Inclusive lower bound of bedrooms.
    #[arg(long)]
    pub min_bedrooms: Option<listing::RoomCount>,

    /// Inclusive lower bound of bathrooms.
    #[arg(long)]
    pub min_bathrooms: Option<listing::RoomCount>,

    /// Required amenity, may be repeated.
    #[arg(long = "amenity")]
    pub amenities: Vec<listing::Amenity>,
}

impl From<Filter> for Criteria {
    fn from(filter: Filter) -> Self {
        let Filter {
            listing_kind,
            property_kind,
            province,
            city,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            amenities,
        } = filter;

        Self {
            property_kind,
            listing_kind,
            province,
            city,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            required_amenities: amenities.into_iter().collect::<BTreeSet<_>>(),
        }
    }
}
