//! [`Listing`] definitions.

use std::{collections::BTreeSet, str::FromStr};

use common::{define_kind, unit, DateTimeOf, Money};
#[cfg(doc)]
use common::{money::Currency, DateTime};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Property advertisement for sale or rent.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Kind`] of this [`Listing`].
    pub kind: Kind,

    /// [`PropertyKind`] advertised by this [`Listing`].
    pub property: PropertyKind,

    /// [`Price`] of this [`Listing`].
    pub price: Price,

    /// Number of bedrooms, if applicable.
    pub bedrooms: Option<RoomCount>,

    /// Number of bathrooms, if applicable.
    pub bathrooms: Option<RoomCount>,

    /// [`Area`] of the advertised property.
    pub area: Area,

    /// [`Location`] of the advertised property.
    pub location: Location,

    /// [`Amenity`]s of the advertised property.
    #[serde(default)]
    pub amenities: BTreeSet<Amenity>,

    /// Indicator whether this [`Listing`] has an active visibility boost.
    #[serde(default)]
    pub is_featured: bool,

    /// [`DateTime`] when this [`Listing`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Defines a validated text newtype of a [`Listing`].
macro_rules! define_text {
    ($(
        #[doc = $doc:literal]
        $name:ident(max = $max:literal)
    ),* $(,)?) => {$(
        #[doc = $doc]
        #[derive(
            AsRef,
            Clone,
            Debug,
            Deserialize,
            Display,
            Eq,
            Hash,
            PartialEq,
            Serialize,
        )]
        #[as_ref(forward)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name), "`].",
            )]
            fn check(value: &str) -> bool {
                value.trim() == value
                    && !value.is_empty()
                    && value.len() <= $max
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }

        impl TryFrom<String> for $name {
            type Error = &'static str;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
                    .ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    )*};
}

define_text! {
    #[doc = "Title of a [`Listing`] shown to users."]
    Title(max = 256),

    #[doc = "Province a [`Listing`] is located in."]
    Province(max = 512),

    #[doc = "City a [`Listing`] is located in."]
    City(max = 512),

    #[doc = "Neighborhood a [`Listing`] is located in."]
    Neighborhood(max = 512),
}

/// Location of a [`Listing`].
///
/// No containment between [`Province`] and [`City`] is enforced.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Location {
    /// [`Province`] of this [`Location`].
    pub province: Province,

    /// [`City`] of this [`Location`].
    pub city: City,

    /// [`Neighborhood`] of this [`Location`].
    pub neighborhood: Neighborhood,
}

/// Non-negative price of a [`Listing`].
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct Price(Money);

impl Price {
    /// Creates a new [`Price`] if the given `money` is non-negative.
    #[must_use]
    pub fn new(money: Money) -> Option<Self> {
        (money.amount >= Decimal::ZERO).then_some(Self(money))
    }

    /// Returns the amount of this [`Price`] regardless of its [`Currency`].
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0.amount
    }

    /// Returns this [`Price`] as [`Money`].
    #[must_use]
    pub fn money(&self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for Price {
    type Error = &'static str;

    fn try_from(money: Money) -> Result<Self, Self::Error> {
        Self::new(money).ok_or("negative `Price`")
    }
}

impl From<Price> for Money {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Positive area of a [`Listing`] in square meters.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the given `square_meters` is positive.
    #[must_use]
    pub fn new(square_meters: Decimal) -> Option<Self> {
        (square_meters > Decimal::ZERO).then_some(Self(square_meters))
    }

    /// Returns this [`Area`] in square meters.
    #[must_use]
    pub fn square_meters(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Area {
    type Error = &'static str;

    fn try_from(square_meters: Decimal) -> Result<Self, Self::Error> {
        Self::new(square_meters).ok_or("non-positive `Area`")
    }
}

impl From<Area> for Decimal {
    fn from(area: Area) -> Self {
        area.0
    }
}

/// Number of rooms of some sort in a [`Listing`].
pub type RoomCount = u16;

define_kind! {
    #[doc = "Kind of a [`Listing`]."]
    enum Kind {
        #[doc = "Property offered for sale."]
        Sale = 1,

        #[doc = "Property offered for rent."]
        Rent = 2,
    }
}

define_kind! {
    #[doc = "Kind of a property advertised by a [`Listing`]."]
    enum PropertyKind {
        #[doc = "A detached house."]
        House = 1,

        #[doc = "An apartment in a building."]
        Apartment = 2,

        #[doc = "A plot of land."]
        Land = 3,

        #[doc = "An office space."]
        Office = 4,

        #[doc = "A shop or other commercial space."]
        Commercial = 5,

        #[doc = "A warehouse."]
        Warehouse = 6,

        #[doc = "A farm."]
        Farm = 7,
    }
}

define_kind! {
    #[doc = "Amenity of a property advertised by a [`Listing`]."]
    enum Amenity {
        #[doc = "A swimming pool."]
        Pool = 1,

        #[doc = "A garage."]
        Garage = 2,

        #[doc = "A garden."]
        Garden = 3,

        #[doc = "Guarded premises."]
        Security = 4,

        #[doc = "Furniture included."]
        Furnished = 5,

        #[doc = "Air conditioning."]
        AirConditioning = 6,

        #[doc = "A balcony."]
        Balcony = 7,

        #[doc = "An elevator in the building."]
        Elevator = 8,
    }
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use super::{Amenity, Area, City, Listing, Price, Title};

    const SNAPSHOT_ITEM: &str = r#"{
        "id": "5f0c7f9e-8a55-4c39-9a61-0d4a3c1b2e10",
        "title": "Apartamento T3 na Polana",
        "kind": "SALE",
        "property": "APARTMENT",
        "price": "12000000MZN",
        "bedrooms": 3,
        "area": "120.5",
        "location": {
            "province": "maputo",
            "city": "maputo_city",
            "neighborhood": "polana"
        },
        "amenities": ["POOL", "AIR_CONDITIONING"],
        "is_featured": true,
        "created_at": "2023-06-10T09:00:00Z"
    }"#;

    #[test]
    fn validates_text() {
        assert!(City::new("maputo_city").is_some());
        assert!(City::new("").is_none());
        assert!(City::new(" matola").is_none());
        assert!(City::from_str("x".repeat(513).as_str()).is_err());
        assert!(Title::new("t".repeat(257)).is_none());
    }

    #[test]
    fn rejects_negative_price() {
        let money = |amount: i64| Money {
            amount: Decimal::from(amount),
            currency: Currency::Mzn,
        };

        assert!(Price::new(money(0)).is_some());
        assert!(Price::new(money(35_000)).is_some());
        assert!(Price::new(money(-1)).is_none());
    }

    #[test]
    fn rejects_non_positive_area() {
        assert!(Area::new(Decimal::ONE).is_some());
        assert!(Area::new(Decimal::ZERO).is_none());
        assert!(Area::new(Decimal::NEGATIVE_ONE).is_none());
    }

    #[test]
    fn deserializes_snapshot_item() {
        let listing = serde_json::from_str::<Listing>(SNAPSHOT_ITEM).unwrap();

        assert_eq!(listing.price.amount(), Decimal::from(12_000_000));
        assert_eq!(listing.bedrooms, Some(3));
        assert_eq!(listing.bathrooms, None);
        assert_eq!(listing.location.city.to_string(), "maputo_city");
        assert!(listing.amenities.contains(&Amenity::AirConditioning));
        assert!(listing.is_featured);
    }

    #[test]
    fn rejects_invalid_snapshot_item() {
        let negative = SNAPSHOT_ITEM.replace("12000000MZN", "-5MZN");
        let blank_city = SNAPSHOT_ITEM.replace("maputo_city", "");

        assert!(serde_json::from_str::<Listing>(&negative).is_err());
        assert!(serde_json::from_str::<Listing>(&blank_city).is_err());
    }
}
