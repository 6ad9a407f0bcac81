use chrono::Utc;
use seahome::catalog::{self, CatalogFilter, Viewer};
use seahome::models::{
    new_id, CategoryDetails, Listing, ListingCategory, ListingKind, ModerationStatus,
};

fn stay(city: &str, price: u64, distance: u32, status: ModerationStatus) -> Listing {
    Listing {
        id: new_id(),
        owner_id: "host_1".to_string(),
        owner_username: "host".to_string(),
        title: format!("Дом в {city}"),
        description: String::new(),
        kind: ListingKind::GuestHouse,
        country: "Россия".to_string(),
        region: "Краснодарский край".to_string(),
        city: city.to_string(),
        address: String::new(),
        price_per_night: price,
        details: CategoryDetails::Stay {
            distance_to_sea: distance,
            max_guests: 2,
        },
        amenities: vec![],
        images: vec![],
        status,
        rejection_reason: None,
        created_at: Utc::now(),
        is_verified: false,
        is_featured: false,
        rating: 0.0,
        reviews: vec![],
    }
}

fn scooter(city: &str, price: u64, status: ModerationStatus) -> Listing {
    let mut listing = stay(city, price, 0, status);
    listing.kind = ListingKind::Scooter;
    listing.details = CategoryDetails::Moto {
        engine_capacity: "125cc".to_string(),
    };
    listing.region = "Таиланд".to_string();
    listing
}

fn mixed_collection() -> Vec<Listing> {
    let mut rejected = stay("Сочи", 2500, 900, ModerationStatus::Rejected);
    rejected.rejection_reason = Some("Фото не соответствуют".to_string());
    vec![
        stay("Сочи", 3000, 100, ModerationStatus::Approved),
        stay("Сочи", 8000, 50, ModerationStatus::Pending),
        stay("Адлер", 4500, 300, ModerationStatus::Approved),
        rejected,
        scooter("Пхукет", 300, ModerationStatus::Approved),
        scooter("Пхукет", 250, ModerationStatus::Pending),
    ]
}

#[test]
fn guest_never_sees_unapproved_for_any_parameter_combination() {
    let listings = mixed_collection();

    let filters = [
        CatalogFilter::default(),
        CatalogFilter::for_city("Краснодарский край", "Сочи"),
        CatalogFilter {
            category: Some(ListingCategory::Moto),
            ..Default::default()
        },
        CatalogFilter {
            search: Some("сочи".to_string()),
            ..Default::default()
        },
        CatalogFilter {
            min_price: Some(0),
            max_price: Some(100_000),
            ..Default::default()
        },
        CatalogFilter {
            max_distance: Some(10_000),
            ..Default::default()
        },
        CatalogFilter {
            kind: Some(ListingKind::GuestHouse),
            region: Some("Краснодарский край".to_string()),
            search: Some("дом".to_string()),
            min_price: Some(1),
            max_price: Some(50_000),
            max_distance: Some(5_000),
            ..Default::default()
        },
    ];

    for filter in &filters {
        let results = catalog::filter(&listings, Viewer::Guest, filter);
        assert!(
            results.iter().all(|l| l.is_approved()),
            "unapproved listing leaked through {filter:?}"
        );
    }
}

#[test]
fn filtering_is_idempotent() {
    let listings = mixed_collection();
    let filter = CatalogFilter {
        region: Some("Краснодарский край".to_string()),
        max_price: Some(5000),
        ..Default::default()
    };

    let once: Vec<Listing> = catalog::filter(&listings, Viewer::Guest, &filter)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Listing> = catalog::filter(&once, Viewer::Guest, &filter)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(once, twice);
}

#[test]
fn predicates_are_anded_together() {
    let listings = mixed_collection();
    let filter = CatalogFilter {
        city: Some("Сочи".to_string()),
        max_price: Some(3500),
        max_distance: Some(200),
        ..Default::default()
    };

    let results = catalog::filter(&listings, Viewer::Guest, &filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].price_per_night, 3000);
}

#[test]
fn result_order_follows_input_order() {
    let listings = mixed_collection();
    let results = catalog::filter(&listings, Viewer::Admin, &CatalogFilter::default());
    let ids: Vec<_> = results.iter().map(|l| l.id.as_str()).collect();
    let expected: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn admin_and_owner_see_past_the_approval_wall() {
    let listings = mixed_collection();

    assert_eq!(catalog::visible(&listings, Viewer::Admin).len(), 6);
    assert_eq!(catalog::visible(&listings, Viewer::Guest).len(), 3);
    // host_1 owns everything here, so the owner view includes pending
    // and rejected records too.
    assert_eq!(catalog::visible(&listings, Viewer::Owner("host_1")).len(), 6);
    assert_eq!(catalog::visible(&listings, Viewer::Owner("stranger")).len(), 3);
}

#[test]
fn featured_rail_is_capped_and_approval_gated() {
    let mut listings = mixed_collection();
    for listing in &mut listings {
        listing.is_featured = true;
    }

    let rail = catalog::featured(&listings, Viewer::Guest, 2);
    assert_eq!(rail.len(), 2);
    assert!(rail.iter().all(|l| l.is_approved() && l.is_featured));
}

#[test]
fn owner_dashboard_lists_every_status() {
    let listings = mixed_collection();
    let mine = catalog::by_owner(&listings, "host_1");
    assert_eq!(mine.len(), listings.len());
    assert!(catalog::by_owner(&listings, "nobody").is_empty());
}

#[test]
fn pending_queue_contains_exactly_the_pending_records() {
    let listings = mixed_collection();
    let queue = catalog::pending(&listings);
    assert_eq!(queue.len(), 2);
    assert!(queue
        .iter()
        .all(|l| l.status == ModerationStatus::Pending));
}

#[test]
fn city_counts_cover_the_region_city_list() {
    let listings = mixed_collection();
    let counts = catalog::city_counts(&listings, Viewer::Guest, "Краснодарский край");

    let sochi = counts.iter().find(|(city, _)| *city == "Сочи").unwrap();
    assert_eq!(sochi.1, 1);
    let adler = counts.iter().find(|(city, _)| *city == "Адлер").unwrap();
    assert_eq!(adler.1, 1);
    let tuapse = counts.iter().find(|(city, _)| *city == "Туапсе").unwrap();
    assert_eq!(tuapse.1, 0);
}

#[test]
fn category_counts_respect_the_viewer() {
    let listings = mixed_collection();

    let guest = catalog::category_counts(&listings, Viewer::Guest);
    let stays = guest
        .iter()
        .find(|(c, _)| *c == ListingCategory::Stay)
        .unwrap();
    let motos = guest
        .iter()
        .find(|(c, _)| *c == ListingCategory::Moto)
        .unwrap();
    assert_eq!(stays.1, 2);
    assert_eq!(motos.1, 1);

    let admin = catalog::category_counts(&listings, Viewer::Admin);
    let total: usize = admin.iter().map(|(_, n)| n).sum();
    assert_eq!(total, listings.len());
}

#[test]
fn missing_listing_lookup_is_none_not_a_failure() {
    let listings = mixed_collection();
    assert!(catalog::find(&listings, "deleted-long-ago").is_none());
    let known = &listings[0];
    assert_eq!(catalog::find(&listings, &known.id).unwrap().id, known.id);
}

#[test]
fn owner_listing_count_matches_the_host_profile_block() {
    let listings = mixed_collection();
    assert_eq!(catalog::owner_listing_count(&listings, "host_1"), 6);
    assert_eq!(catalog::owner_listing_count(&listings, "ghost"), 0);
}
