//! [`Criteria`] narrowing a [`Listing`] collection.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    listing::{self, Amenity, City, PropertyKind, Province, RoomCount},
    Listing,
};

/// User-chosen constraints narrowing a [`Listing`] collection.
///
/// An absent constraint never excludes a [`Listing`], so
/// [`Criteria::default()`] matches everything. Contradictory constraints
/// (like `min_price` above `max_price`) are not rejected and simply match
/// nothing.
///
/// Deserializes from an object where every field may be omitted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Criteria {
    /// Required [`PropertyKind`].
    pub property_kind: Option<PropertyKind>,

    /// Required [`listing::Kind`].
    pub listing_kind: Option<listing::Kind>,

    /// Required [`Province`], matched exactly.
    pub province: Option<Province>,

    /// Required [`City`], matched exactly.
    pub city: Option<City>,

    /// Inclusive lower bound of the [`listing::Price`] amount.
    pub min_price: Option<Decimal>,

    /// Inclusive upper bound of the [`listing::Price`] amount.
    pub max_price: Option<Decimal>,

    /// Inclusive lower bound of bedrooms.
    ///
    /// A [`Listing`] without bedrooms counts as having zero of them.
    pub min_bedrooms: Option<RoomCount>,

    /// Inclusive lower bound of bathrooms.
    ///
    /// A [`Listing`] without bathrooms counts as having zero of them.
    pub min_bathrooms: Option<RoomCount>,

    /// [`Amenity`]s a [`Listing`] must have all of.
    ///
    /// Empty set imposes no constraint.
    pub required_amenities: BTreeSet<Amenity>,
}

impl Criteria {
    /// Checks whether the provided [`Listing`] satisfies every present
    /// constraint of these [`Criteria`].
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let Self {
            property_kind,
            listing_kind,
            province,
            city,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            required_amenities,
        } = self;
        let price = listing.price.amount();

        property_kind.map_or(true, |k| listing.property == k)
            && listing_kind.map_or(true, |k| listing.kind == k)
            && province
                .as_ref()
                .map_or(true, |p| listing.location.province == *p)
            && city.as_ref().map_or(true, |c| listing.location.city == *c)
            && min_price.map_or(true, |min| price >= min)
            && max_price.map_or(true, |max| price <= max)
            && min_bedrooms
                .map_or(true, |min| listing.bedrooms.unwrap_or(0) >= min)
            && min_bathrooms
                .map_or(true, |min| listing.bathrooms.unwrap_or(0) >= min)
            && required_amenities.is_subset(&listing.amenities)
    }

    /// Returns new [`Criteria`] with the provided [`Toggle`] applied.
    ///
    /// Selecting the value a field already holds clears the field, selecting
    /// any other value replaces it. Any change of the [`Province`] clears the
    /// [`City`] as well, since the held one may not belong to the new
    /// [`Province`].
    #[must_use]
    pub fn toggle(&self, toggle: Toggle) -> Self {
        let mut toggled = self.clone();
        match toggle {
            Toggle::PropertyKind(kind) => flip(&mut toggled.property_kind, kind),
            Toggle::ListingKind(kind) => flip(&mut toggled.listing_kind, kind),
            Toggle::Province(province) => {
                flip(&mut toggled.province, province);
                // Province is either cleared or replaced here.
                toggled.city = None;
            }
            Toggle::City(city) => flip(&mut toggled.city, city),
            Toggle::MinBedrooms(min) => flip(&mut toggled.min_bedrooms, min),
            Toggle::MinBathrooms(min) => flip(&mut toggled.min_bathrooms, min),
            Toggle::Amenity(amenity) => {
                if !toggled.required_amenities.remove(&amenity) {
                    _ = toggled.required_amenities.insert(amenity);
                }
            }
        }
        toggled
    }
}

/// Selection of a single value in a [`Criteria`] field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Toggle {
    /// Selection of [`Criteria::property_kind`].
    PropertyKind(PropertyKind),

    /// Selection of [`Criteria::listing_kind`].
    ListingKind(listing::Kind),

    /// Selection of [`Criteria::province`].
    Province(Province),

    /// Selection of [`Criteria::city`].
    City(City),

    /// Selection of [`Criteria::min_bedrooms`].
    MinBedrooms(RoomCount),

    /// Selection of [`Criteria::min_bathrooms`].
    MinBathrooms(RoomCount),

    /// Selection of a single [`Amenity`] in [`Criteria::required_amenities`].
    Amenity(Amenity),
}

/// Clears the `field` if it holds the `value`, or sets it otherwise.
fn flip<T: PartialEq>(field: &mut Option<T>, value: T) {
    if field.as_ref() == Some(&value) {
        *field = None;
    } else {
        *field = Some(value);
    }
}
