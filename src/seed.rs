use tracing::info;

use crate::models::{
    now_millis, rounded_mean, CategoryDetails, Listing, ListingKind, ModerationStatus, Review,
    User,
};

/// Starter catalog used when no persisted listings exist yet (or the
/// stored payload had to be discarded).
pub fn seed_listings() -> Vec<Listing> {
    info!("Generating seed catalog");

    let mut listings = vec![
        Listing {
            id: "seed_sochi_guesthouse".to_string(),
            owner_id: "seed_host_sochi".to_string(),
            owner_username: "sochi_host".to_string(),
            title: "Гостевой дом «Бриз»".to_string(),
            description: "Тихий дворик в пяти минутах от набережной, свой мангал и сад."
                .to_string(),
            kind: ListingKind::GuestHouse,
            country: "Россия".to_string(),
            region: "Краснодарский край".to_string(),
            city: "Сочи".to_string(),
            address: "ул. Приморская, 14".to_string(),
            price_per_night: 3500,
            details: CategoryDetails::Stay {
                distance_to_sea: 250,
                max_guests: 4,
            },
            amenities: vec![
                "Wi-Fi".to_string(),
                "Кондиционер".to_string(),
                "Мангал".to_string(),
            ],
            images: vec!["https://picsum.photos/seed/sochi-briz/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: true,
            is_featured: true,
            rating: 0.0,
            reviews: vec![
                Review::new("marina_trip", 5, "Чисто, уютно, хозяева чудесные."),
                Review::new("oleg_on_tour", 4, "Хорошо, но парковка маленькая."),
            ],
        },
        Listing {
            id: "seed_yalta_house".to_string(),
            owner_id: "seed_host_yalta".to_string(),
            owner_username: "yalta_keys".to_string(),
            title: "Частный дом с видом на горы".to_string(),
            description: "Просторный дом для большой компании, терраса и своя кухня."
                .to_string(),
            kind: ListingKind::PrivateHouse,
            country: "Россия".to_string(),
            region: "Крым".to_string(),
            city: "Ялта".to_string(),
            address: "пер. Виноградный, 3".to_string(),
            price_per_night: 5200,
            details: CategoryDetails::Stay {
                distance_to_sea: 700,
                max_guests: 8,
            },
            amenities: vec![
                "Кухня".to_string(),
                "Парковка".to_string(),
                "С животными".to_string(),
            ],
            images: vec!["https://picsum.photos/seed/yalta-house/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: false,
            is_featured: true,
            rating: 0.0,
            reviews: vec![],
        },
        Listing {
            id: "seed_phuket_scooter".to_string(),
            owner_id: "seed_host_phuket".to_string(),
            owner_username: "phuket_wheels".to_string(),
            title: "Скутер Honda Click 160".to_string(),
            description: "Свежий скутер, два шлема в комплекте, доставка к отелю."
                .to_string(),
            kind: ListingKind::Scooter,
            country: "Зарубежье".to_string(),
            region: "Таиланд".to_string(),
            city: "Пхукет".to_string(),
            address: "Rawai, Viset Rd".to_string(),
            price_per_night: 300,
            details: CategoryDetails::Moto {
                engine_capacity: "160cc".to_string(),
            },
            amenities: vec!["Шлем".to_string(), "Страховка".to_string()],
            images: vec!["https://picsum.photos/seed/phuket-click/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: true,
            is_featured: false,
            rating: 0.0,
            reviews: vec![Review::new("dmitry_ride", 5, "Байк как новый, отдали за минуту.")],
        },
        Listing {
            id: "seed_phuket_sim".to_string(),
            owner_id: "seed_host_phuket".to_string(),
            owner_username: "phuket_wheels".to_string(),
            title: "Туристическая SIM AIS".to_string(),
            description: "Безлимитный интернет, активация при встрече.".to_string(),
            kind: ListingKind::Prepaid,
            country: "Зарубежье".to_string(),
            region: "Таиланд".to_string(),
            city: "Пхукет".to_string(),
            address: "Phuket Town".to_string(),
            price_per_night: 450,
            details: CategoryDetails::Sim {
                data_volume: "Unlimited".to_string(),
                validity_period: "30 days".to_string(),
            },
            amenities: vec!["5G".to_string(), "Безлимит".to_string()],
            images: vec!["https://picsum.photos/seed/phuket-sim/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: false,
            is_featured: false,
            rating: 0.0,
            reviews: vec![],
        },
        Listing {
            id: "seed_batumi_exchange".to_string(),
            owner_id: "seed_host_batumi".to_string(),
            owner_username: "batumi_money".to_string(),
            title: "Batumi Money".to_string(),
            description: "Обмен наличных без комиссии, работаем каждый день.".to_string(),
            kind: ListingKind::Cash,
            country: "Зарубежье".to_string(),
            region: "Грузия".to_string(),
            city: "Батуми".to_string(),
            address: "ул. Чавчавадзе, 25".to_string(),
            price_per_night: 1000,
            details: CategoryDetails::Exchange {
                exchange_rates: "RUB -> GEL (0.027)".to_string(),
                working_hours: "09:00 - 21:00".to_string(),
            },
            amenities: vec!["Лучший курс".to_string(), "Без комиссии".to_string()],
            images: vec!["https://picsum.photos/seed/batumi-money/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: true,
            is_featured: true,
            rating: 0.0,
            reviews: vec![],
        },
        Listing {
            id: "seed_nhatrang_cafe".to_string(),
            owner_id: "seed_host_nhatrang".to_string(),
            owner_username: "viet_food".to_string(),
            title: "Кафе «Волна»".to_string(),
            description: "Завтраки у моря, меню на русском, веранда с видом на залив."
                .to_string(),
            kind: ListingKind::Cafe,
            country: "Зарубежье".to_string(),
            region: "Вьетнам".to_string(),
            city: "Нячанг".to_string(),
            address: "Tran Phu, 96".to_string(),
            price_per_night: 600,
            details: CategoryDetails::Food { average_bill: 600 },
            amenities: vec!["Завтраки".to_string(), "Веранда".to_string()],
            images: vec!["https://picsum.photos/seed/nhatrang-cafe/800/600".to_string()],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: false,
            is_featured: false,
            rating: 0.0,
            reviews: vec![],
        },
    ];

    // Seed ratings must honor the same invariant as live data.
    for listing in &mut listings {
        listing.rating = rounded_mean(&listing.reviews);
    }

    listings
}

/// The user collection starts empty; participants are registered at
/// session bootstrap.
pub fn seed_users() -> Vec<User> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModerationStatus;

    #[test]
    fn seed_listings_are_approved_and_consistent() {
        let listings = seed_listings();
        assert!(!listings.is_empty());

        for listing in &listings {
            assert_eq!(listing.status, ModerationStatus::Approved);
            assert!(listing.rejection_reason.is_none());
            assert_eq!(listing.rating, rounded_mean(&listing.reviews));
            assert_eq!(listing.kind.category(), listing.category());
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let listings = seed_listings();
        let mut ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }
}
