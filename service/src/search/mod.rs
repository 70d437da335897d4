//! Search engine narrowing and ordering [`Listing`]s.
//!
//! Every access path (paged search, featured carousel, CLI) goes through
//! [`filter_and_rank()`], so the predicates and the ordering are defined
//! exactly once. The engine is pure: it never mutates, stores or logs the
//! [`Listing`]s it is given, and calling it twice with the same input yields
//! the same output.

mod criteria;

use std::{borrow::Borrow, cmp::Reverse};

use crate::domain::{listing, Listing};

pub use self::criteria::{Criteria, Toggle};

/// Narrows the provided `listings` to the ones matching the provided
/// [`Criteria`] and [`rank`]s them.
///
/// The whole ranked sequence is returned, so truncation (pagination, a
/// carousel of a few items) is up to the caller.
///
/// Accepts owned [`Listing`]s as well as references or shared pointers to
/// them, so store snapshots don't have to be cloned.
pub fn filter_and_rank<I>(listings: I, criteria: &Criteria) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<Listing>,
{
    let mut matched = listings
        .into_iter()
        .filter(|l| criteria.matches(l.borrow()))
        .collect::<Vec<_>>();
    rank(&mut matched);
    matched
}

/// Orders the provided `listings` featured first, then newest first.
///
/// The sort is stable: [`Listing`]s with equal featured status and creation
/// time keep their relative order.
pub fn rank<L: Borrow<Listing>>(listings: &mut [L]) {
    listings.sort_by_key(|l| Reverse(precedence(l.borrow())));
}

/// Returns the key a [`Listing`] is [`rank`]ed by in ascending order.
fn precedence(listing: &Listing) -> (bool, listing::CreationDateTime) {
    (listing.is_featured, listing.created_at)
}

#[cfg(test)]
mod spec {
    use std::{collections::BTreeSet, sync::Arc};

    use rust_decimal::Decimal;

    use crate::{
        domain::{
            listing::{self, Amenity, City, PropertyKind, Province},
            Listing,
        },
        fixture::{self, at, ids},
    };

    use super::{filter_and_rank, rank, Criteria};

    fn catalog() -> Vec<Listing> {
        vec![
            Listing {
                kind: listing::Kind::Rent,
                price: fixture::price(35_000),
                created_at: at("2023-06-12T00:00:00Z"),
                amenities: BTreeSet::from([Amenity::Furnished]),
                ..fixture::listing()
            },
            Listing {
                property: PropertyKind::House,
                price: fixture::price(25_000_000),
                bedrooms: Some(4),
                is_featured: true,
                created_at: at("2023-06-05T00:00:00Z"),
                amenities: BTreeSet::from([Amenity::Pool, Amenity::Garage]),
                ..fixture::listing()
            },
            Listing {
                property: PropertyKind::Land,
                price: fixture::price(3_000_000),
                bedrooms: None,
                bathrooms: None,
                location: fixture::location("gaza", "xai_xai"),
                created_at: at("2023-06-01T00:00:00Z"),
                ..fixture::listing()
            },
            Listing {
                kind: listing::Kind::Rent,
                property: PropertyKind::Office,
                price: fixture::price(80_000),
                bedrooms: None,
                location: fixture::location("maputo", "matola"),
                created_at: at("2023-06-12T00:00:00Z"),
                ..fixture::listing()
            },
        ]
    }

    fn is_subset(of: &[Listing], subset: &[Listing]) -> bool {
        subset.iter().all(|l| of.contains(l))
    }

    #[test]
    fn empty_criteria_rank_everything() {
        let catalog = catalog();

        let ranked = filter_and_rank(&catalog, &Criteria::default());

        // Featured first, newest next, input order on exact ties.
        assert_eq!(
            ids(&ranked),
            [catalog[1].id, catalog[0].id, catalog[3].id, catalog[2].id],
        );
    }

    #[test]
    fn preserves_input_order_on_ties() {
        let created_at = at("2023-06-10T00:00:00Z");
        let listings = (0..5)
            .map(|_| Listing {
                created_at,
                ..fixture::listing()
            })
            .collect::<Vec<_>>();

        let ranked = filter_and_rank(&listings, &Criteria::default());

        assert_eq!(ids(&ranked), ids(&listings));
    }

    #[test]
    fn featured_precede_newer_listings() {
        let a = Listing {
            is_featured: false,
            created_at: at("2023-06-12T00:00:00Z"),
            ..fixture::listing()
        };
        let b = Listing {
            is_featured: true,
            created_at: at("2023-06-01T00:00:00Z"),
            ..fixture::listing()
        };
        let listings = [a.clone(), b.clone()];

        for criteria in [
            Criteria::default(),
            Criteria {
                listing_kind: Some(listing::Kind::Sale),
                ..Criteria::default()
            },
            Criteria {
                max_price: Some(Decimal::from(2_000_000)),
                ..Criteria::default()
            },
        ] {
            let ranked = filter_and_rank(&listings, &criteria);
            assert_eq!(ids(&ranked), [b.id, a.id], "{criteria:?}");
        }
    }

    /// Combines two [`Criteria`] setting disjoint fields.
    fn both(a: &Criteria, b: &Criteria) -> Criteria {
        Criteria {
            property_kind: a.property_kind.or(b.property_kind),
            listing_kind: a.listing_kind.or(b.listing_kind),
            province: a.province.clone().or_else(|| b.province.clone()),
            city: a.city.clone().or_else(|| b.city.clone()),
            min_price: a.min_price.or(b.min_price),
            max_price: a.max_price.or(b.max_price),
            min_bedrooms: a.min_bedrooms.or(b.min_bedrooms),
            min_bathrooms: a.min_bathrooms.or(b.min_bathrooms),
            required_amenities: a
                .required_amenities
                .union(&b.required_amenities)
                .copied()
                .collect(),
        }
    }

    #[test]
    fn conjunction_narrows_each_criterion() {
        let catalog = catalog();
        let criteria = [
            Criteria {
                property_kind: Some(PropertyKind::House),
                ..Criteria::default()
            },
            Criteria {
                listing_kind: Some(listing::Kind::Rent),
                ..Criteria::default()
            },
            Criteria {
                province: Some(Province::new("maputo").unwrap()),
                ..Criteria::default()
            },
            Criteria {
                city: Some(City::new("maputo_city").unwrap()),
                ..Criteria::default()
            },
            Criteria {
                min_price: Some(Decimal::from(50_000)),
                ..Criteria::default()
            },
            Criteria {
                max_price: Some(Decimal::from(5_000_000)),
                ..Criteria::default()
            },
            Criteria {
                min_bedrooms: Some(1),
                ..Criteria::default()
            },
            Criteria {
                min_bathrooms: Some(1),
                ..Criteria::default()
            },
            Criteria {
                required_amenities: BTreeSet::from([Amenity::Pool]),
                ..Criteria::default()
            },
        ];

        for a in &criteria {
            for b in &criteria {
                let narrowed = filter_and_rank(catalog.clone(), &both(a, b));
                let by_a = filter_and_rank(catalog.clone(), a);
                let by_b = filter_and_rank(catalog.clone(), b);

                assert!(is_subset(&by_a, &narrowed), "{a:?} & {b:?}");
                assert!(is_subset(&by_b, &narrowed), "{a:?} & {b:?}");
                assert_eq!(
                    narrowed,
                    by_a.into_iter()
                        .filter(|l| b.matches(l))
                        .collect::<Vec<_>>(),
                    "{a:?} & {b:?}",
                );
            }
        }
    }

    #[test]
    fn requires_every_amenity() {
        let catalog = catalog();
        let criteria = Criteria {
            required_amenities: BTreeSet::from([Amenity::Pool, Amenity::Garage]),
            ..Criteria::default()
        };

        let ranked = filter_and_rank(&catalog, &criteria);

        assert_eq!(ids(&ranked), [catalog[1].id]);
    }

    #[test]
    fn absent_bedrooms_fail_positive_minimum() {
        let catalog = catalog();

        let any = filter_and_rank(
            &catalog,
            &Criteria {
                min_bedrooms: Some(0),
                ..Criteria::default()
            },
        );
        let some = filter_and_rank(
            &catalog,
            &Criteria {
                min_bedrooms: Some(1),
                ..Criteria::default()
            },
        );

        assert_eq!(any.len(), catalog.len());
        assert_eq!(ids(&some), [catalog[1].id, catalog[0].id]);
    }

    #[test]
    fn degenerate_price_bounds_match_nothing() {
        let criteria = Criteria {
            min_price: Some(Decimal::from(100)),
            max_price: Some(Decimal::from(50)),
            ..Criteria::default()
        };
        let cheap = Listing {
            price: fixture::price(75),
            ..fixture::listing()
        };
        let mut catalog = catalog();
        catalog.push(cheap);

        assert!(filter_and_rank(catalog, &criteria).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let ranked = filter_and_rank(Vec::<Listing>::new(), &Criteria::default());

        assert!(ranked.is_empty());
    }

    #[test]
    fn is_idempotent_and_leaves_input_intact() {
        let catalog = catalog();
        let before = catalog.clone();
        let criteria = Criteria {
            province: Some(Province::new("maputo").unwrap()),
            ..Criteria::default()
        };

        let first = filter_and_rank(&catalog, &criteria);
        let second = filter_and_rank(&catalog, &criteria);

        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn accepts_shared_listings() {
        let catalog = catalog().into_iter().map(Arc::new).collect::<Vec<_>>();
        let criteria = Criteria {
            listing_kind: Some(listing::Kind::Rent),
            ..Criteria::default()
        };

        let ranked = filter_and_rank(catalog.iter().cloned(), &criteria);

        assert_eq!(ids(&ranked), [catalog[0].id, catalog[3].id]);
        assert!(Arc::ptr_eq(&ranked[0], &catalog[0]));
    }

    #[test]
    fn ranks_in_place() {
        let older = Listing {
            created_at: at("2023-06-01T00:00:00Z"),
            ..fixture::listing()
        };
        let newer = Listing {
            created_at: at("2023-06-02T00:00:00Z"),
            ..fixture::listing()
        };
        let mut listings = vec![&older, &newer];

        rank(&mut listings);

        assert_eq!(ids(&listings), [newer.id, older.id]);
    }

    #[test]
    fn concrete_sale_scenario() {
        let maputo = fixture::location("maputo", "maputo_city");
        let l1 = Listing {
            price: fixture::price(12_000_000),
            property: PropertyKind::Apartment,
            kind: listing::Kind::Sale,
            location: maputo.clone(),
            is_featured: true,
            created_at: at("2023-06-10T00:00:00Z"),
            ..fixture::listing()
        };
        let l2 = Listing {
            price: fixture::price(25_000_000),
            property: PropertyKind::House,
            kind: listing::Kind::Sale,
            location: maputo.clone(),
            is_featured: true,
            created_at: at("2023-06-05T00:00:00Z"),
            ..fixture::listing()
        };
        let l3 = Listing {
            price: fixture::price(35_000),
            property: PropertyKind::Apartment,
            kind: listing::Kind::Rent,
            location: maputo,
            is_featured: false,
            created_at: at("2023-06-12T00:00:00Z"),
            ..fixture::listing()
        };
        let criteria = Criteria {
            listing_kind: Some(listing::Kind::Sale),
            ..Criteria::default()
        };

        let ranked = filter_and_rank([&l1, &l2, &l3], &criteria);

        assert_eq!(ids(&ranked), [l1.id, l2.id]);
        assert_eq!(
            filter_and_rank(
                [&l1, &l2, &l3],
                &Criteria {
                    city: Some(City::new("maputo_city").unwrap()),
                    ..criteria
                },
            )
            .len(),
            2,
        );
    }
}
