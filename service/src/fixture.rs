//! [`Listing`] fixtures shared by unit tests.

use std::{borrow::Borrow, collections::BTreeSet};

use common::{money::Currency, DateTime, Money};
use rust_decimal::Decimal;

use crate::domain::{listing, Listing};

/// Returns a non-featured `MZN` apartment for sale in Maputo with a unique
/// [`listing::Id`].
pub(crate) fn listing() -> Listing {
    Listing {
        id: listing::Id::new(),
        title: listing::Title::new("Apartamento T2").unwrap(),
        kind: listing::Kind::Sale,
        property: listing::PropertyKind::Apartment,
        price: price(1_000_000),
        bedrooms: Some(2),
        bathrooms: Some(1),
        area: listing::Area::new(Decimal::from(80)).unwrap(),
        location: location("maputo", "maputo_city"),
        amenities: BTreeSet::new(),
        is_featured: false,
        created_at: at("2023-06-01T00:00:00Z"),
    }
}

/// Returns a [`listing::Price`] of the given `MZN` amount.
pub(crate) fn price(amount: i64) -> listing::Price {
    listing::Price::new(Money {
        amount: Decimal::from(amount),
        currency: Currency::Mzn,
    })
    .unwrap()
}

/// Parses the given RFC 3339 string into a [`listing::CreationDateTime`].
pub(crate) fn at(rfc3339: &str) -> listing::CreationDateTime {
    DateTime::from_rfc3339(rfc3339).unwrap().coerce()
}

/// Returns a [`listing::Location`] in the given province and city.
pub(crate) fn location(province: &str, city: &str) -> listing::Location {
    listing::Location {
        province: listing::Province::new(province).unwrap(),
        city: listing::City::new(city).unwrap(),
        neighborhood: listing::Neighborhood::new("centro").unwrap(),
    }
}

/// Returns the [`listing::Id`]s of the given `listings` in order.
pub(crate) fn ids<L>(listings: &[L]) -> Vec<listing::Id>
where
    L: Borrow<Listing>,
{
    listings
        .iter()
        .map(|l| {
            let listing: &Listing = l.borrow();
            listing.id
        })
        .collect()
}
