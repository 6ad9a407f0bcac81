use serde::{Deserialize, Serialize};

use crate::models::{Listing, ListingCategory, ListingKind, ModerationStatus};
use crate::regions;

/// Who is looking at the catalog. Visibility is enforced here, inside the
/// query engine, so no call site has to remember the approval filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer<'a> {
    Guest,
    /// Owner of record, identified by user id.
    Owner(&'a str),
    Admin,
}

impl Viewer<'_> {
    pub fn can_see(&self, listing: &Listing) -> bool {
        match self {
            Viewer::Admin => true,
            Viewer::Owner(user_id) => listing.is_approved() || listing.owner_id == *user_id,
            Viewer::Guest => listing.is_approved(),
        }
    }
}

/// Predicate set for catalog queries. Every absent or blank field is
/// vacuously true; set fields are ANDed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: Option<ListingCategory>,
    pub kind: Option<ListingKind>,
    pub region: Option<String>,
    pub city: Option<String>,
    /// Case-insensitive substring match against title and city.
    pub search: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    /// Meters to the sea; only listings that carry a distance can match.
    pub max_distance: Option<u32>,
}

impl CatalogFilter {
    /// Filter for the catalog view of one city.
    pub fn for_city(region: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let category_ok = self.category.map_or(true, |c| listing.category() == c);
        let kind_ok = self.kind.map_or(true, |k| listing.kind == k);
        let region_ok = text_matches(&self.region, |r| listing.region == r);
        let city_ok = text_matches(&self.city, |c| listing.city == c);
        let search_ok = text_matches(&self.search, |q| {
            let needle = q.to_lowercase();
            listing.title.to_lowercase().contains(&needle)
                || listing.city.to_lowercase().contains(&needle)
        });
        let price_ok = self.min_price.map_or(true, |min| listing.price_per_night >= min)
            && self.max_price.map_or(true, |max| listing.price_per_night <= max);
        // A listing without a distance never matches a distance bound.
        let distance_ok = self.max_distance.map_or(true, |max| {
            listing
                .details
                .distance_to_sea()
                .map_or(false, |d| d <= max)
        });

        category_ok && kind_ok && region_ok && city_ok && search_ok && price_ok && distance_ok
    }
}

fn text_matches(value: &Option<String>, predicate: impl FnOnce(&str) -> bool) -> bool {
    match value.as_deref() {
        None => true,
        Some(v) if v.trim().is_empty() => true,
        Some(v) => predicate(v),
    }
}

/// Listings the viewer is allowed to see, in input order.
pub fn visible<'a>(listings: &'a [Listing], viewer: Viewer<'_>) -> Vec<&'a Listing> {
    listings.iter().filter(|l| viewer.can_see(l)).collect()
}

/// Apply the predicate set on top of viewer visibility. Result order is
/// input order; filtering twice with the same predicates is a no-op.
pub fn filter<'a>(
    listings: &'a [Listing],
    viewer: Viewer<'_>,
    filter: &CatalogFilter,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| viewer.can_see(l) && filter.matches(l))
        .collect()
}

/// Listing lookup for the detail view; a missing id is a not-found view,
/// never an error.
pub fn find<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.id == id)
}

/// Featured rail on the welcome view, capped at `limit`.
pub fn featured<'a>(listings: &'a [Listing], viewer: Viewer<'_>, limit: usize) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| viewer.can_see(l) && l.is_featured)
        .take(limit)
        .collect()
}

/// Everything a given owner has authored, regardless of status. Feeds the
/// owner dashboard.
pub fn by_owner<'a>(listings: &'a [Listing], owner_id: &str) -> Vec<&'a Listing> {
    listings.iter().filter(|l| l.owner_id == owner_id).collect()
}

/// The moderation queue: listings awaiting review, in input order.
pub fn pending(listings: &[Listing]) -> Vec<&Listing> {
    listings
        .iter()
        .filter(|l| l.status == ModerationStatus::Pending)
        .collect()
}

/// Count of visible listings in one city.
pub fn count_in_city(listings: &[Listing], viewer: Viewer<'_>, city: &str) -> usize {
    listings
        .iter()
        .filter(|l| viewer.can_see(l) && l.city == city)
        .count()
}

/// Per-city listing counts for the city picker of a region.
pub fn city_counts<'a>(
    listings: &[Listing],
    viewer: Viewer<'_>,
    region: &'a str,
) -> Vec<(&'a str, usize)> {
    regions::cities_in_region(region)
        .iter()
        .map(|city| (*city, count_in_city(listings, viewer, city)))
        .collect()
}

/// How many listings an owner has in the given collection. Shown on the
/// detail view's host profile block.
pub fn owner_listing_count(listings: &[Listing], owner_id: &str) -> usize {
    listings.iter().filter(|l| l.owner_id == owner_id).count()
}

/// Per-category counts over the visible collection, in category order.
pub fn category_counts(
    listings: &[Listing],
    viewer: Viewer<'_>,
) -> Vec<(ListingCategory, usize)> {
    ListingCategory::ALL
        .iter()
        .map(|&category| {
            let count = listings
                .iter()
                .filter(|l| viewer.can_see(l) && l.category() == category)
                .count();
            (category, count)
        })
        .collect()
}
