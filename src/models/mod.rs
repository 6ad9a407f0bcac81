use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate an opaque unique id for listings, reviews and users.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time truncated to the stored millisecond resolution, so a
/// freshly created record is deep-equal to its persisted round trip.
pub fn now_millis() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}

/// Top-level offer category. Serialized labels match the persisted
/// catalog data, which carries the user-facing Russian names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingCategory {
    #[serde(rename = "Жилье")]
    Stay,
    #[serde(rename = "Мото")]
    Moto,
    #[serde(rename = "Сим-карты")]
    Sim,
    #[serde(rename = "Обмен")]
    Exchange,
    #[serde(rename = "Еда")]
    Food,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 5] = [
        ListingCategory::Stay,
        ListingCategory::Moto,
        ListingCategory::Sim,
        ListingCategory::Exchange,
        ListingCategory::Food,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListingCategory::Stay => "Жилье",
            ListingCategory::Moto => "Мото",
            ListingCategory::Sim => "Сим-карты",
            ListingCategory::Exchange => "Обмен",
            ListingCategory::Food => "Еда",
        }
    }
}

impl std::fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sub-classification of a listing. Each kind is legal under exactly one
/// category; `ListingKind::for_category` gives the legal subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingKind {
    #[serde(rename = "Гостевой дом")]
    GuestHouse,
    #[serde(rename = "Частный дом")]
    PrivateHouse,
    #[serde(rename = "Мини-отель")]
    MiniHotel,
    #[serde(rename = "Скутер")]
    Scooter,
    #[serde(rename = "Туристический")]
    Touring,
    #[serde(rename = "Классика")]
    Classic,
    #[serde(rename = "Prepaid SIM")]
    Prepaid,
    #[serde(rename = "Data Only")]
    DataOnly,
    #[serde(rename = "eSIM")]
    ESim,
    #[serde(rename = "Наличные")]
    Cash,
    #[serde(rename = "Крипто-обмен")]
    Crypto,
    #[serde(rename = "Перевод")]
    BankTransfer,
    #[serde(rename = "Кафе")]
    Cafe,
    #[serde(rename = "Ресторан")]
    Restaurant,
    #[serde(rename = "Стритфуд")]
    StreetFood,
}

impl ListingKind {
    /// Legal kinds for a category, first entry being the wizard default.
    pub fn for_category(category: ListingCategory) -> &'static [ListingKind] {
        match category {
            ListingCategory::Stay => &[
                ListingKind::GuestHouse,
                ListingKind::PrivateHouse,
                ListingKind::MiniHotel,
            ],
            ListingCategory::Moto => &[
                ListingKind::Scooter,
                ListingKind::Touring,
                ListingKind::Classic,
            ],
            ListingCategory::Sim => &[
                ListingKind::Prepaid,
                ListingKind::DataOnly,
                ListingKind::ESim,
            ],
            ListingCategory::Exchange => &[
                ListingKind::Cash,
                ListingKind::Crypto,
                ListingKind::BankTransfer,
            ],
            ListingCategory::Food => &[
                ListingKind::Cafe,
                ListingKind::Restaurant,
                ListingKind::StreetFood,
            ],
        }
    }

    pub fn category(&self) -> ListingCategory {
        match self {
            ListingKind::GuestHouse | ListingKind::PrivateHouse | ListingKind::MiniHotel => {
                ListingCategory::Stay
            }
            ListingKind::Scooter | ListingKind::Touring | ListingKind::Classic => {
                ListingCategory::Moto
            }
            ListingKind::Prepaid | ListingKind::DataOnly | ListingKind::ESim => {
                ListingCategory::Sim
            }
            ListingKind::Cash | ListingKind::Crypto | ListingKind::BankTransfer => {
                ListingCategory::Exchange
            }
            ListingKind::Cafe | ListingKind::Restaurant | ListingKind::StreetFood => {
                ListingCategory::Food
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::GuestHouse => "Гостевой дом",
            ListingKind::PrivateHouse => "Частный дом",
            ListingKind::MiniHotel => "Мини-отель",
            ListingKind::Scooter => "Скутер",
            ListingKind::Touring => "Туристический",
            ListingKind::Classic => "Классика",
            ListingKind::Prepaid => "Prepaid SIM",
            ListingKind::DataOnly => "Data Only",
            ListingKind::ESim => "eSIM",
            ListingKind::Cash => "Наличные",
            ListingKind::Crypto => "Крипто-обмен",
            ListingKind::BankTransfer => "Перевод",
            ListingKind::Cafe => "Кафе",
            ListingKind::Restaurant => "Ресторан",
            ListingKind::StreetFood => "Стритфуд",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Approval state of a listing. `Expired` is reserved: it is part of the
/// persisted vocabulary but no transition produces or consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModerationStatus {
    #[serde(rename = "На модерации")]
    Pending,
    #[serde(rename = "Одобрен")]
    Approved,
    #[serde(rename = "Отклонён")]
    Rejected,
    #[serde(rename = "Срок истёк")]
    Expired,
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ModerationStatus::Pending => "На модерации",
            ModerationStatus::Approved => "Одобрен",
            ModerationStatus::Rejected => "Отклонён",
            ModerationStatus::Expired => "Срок истёк",
        };
        f.write_str(label)
    }
}

/// Category-specific commercial fields. One variant per category, so a
/// listing can only ever carry the fields legal for its own category.
/// The `category` tag plus the variant fields flatten into the listing
/// record, preserving the stored layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CategoryDetails {
    #[serde(rename = "Жилье")]
    Stay {
        #[serde(rename = "distanceToSea")]
        distance_to_sea: u32,
        #[serde(rename = "maxGuests")]
        max_guests: u32,
    },
    #[serde(rename = "Мото")]
    Moto {
        #[serde(rename = "engineCapacity")]
        engine_capacity: String,
    },
    #[serde(rename = "Сим-карты")]
    Sim {
        #[serde(rename = "dataVolume")]
        data_volume: String,
        #[serde(rename = "validityPeriod")]
        validity_period: String,
    },
    #[serde(rename = "Обмен")]
    Exchange {
        #[serde(rename = "exchangeRates")]
        exchange_rates: String,
        #[serde(rename = "workingHours")]
        working_hours: String,
    },
    #[serde(rename = "Еда")]
    Food {
        #[serde(rename = "averageBill")]
        average_bill: u64,
    },
}

impl CategoryDetails {
    pub fn category(&self) -> ListingCategory {
        match self {
            CategoryDetails::Stay { .. } => ListingCategory::Stay,
            CategoryDetails::Moto { .. } => ListingCategory::Moto,
            CategoryDetails::Sim { .. } => ListingCategory::Sim,
            CategoryDetails::Exchange { .. } => ListingCategory::Exchange,
            CategoryDetails::Food { .. } => ListingCategory::Food,
        }
    }

    /// Distance to the shoreline in meters, present on stays only.
    pub fn distance_to_sea(&self) -> Option<u32> {
        match self {
            CategoryDetails::Stay {
                distance_to_sea, ..
            } => Some(*distance_to_sea),
            _ => None,
        }
    }

    pub fn max_guests(&self) -> Option<u32> {
        match self {
            CategoryDetails::Stay { max_guests, .. } => Some(*max_guests),
            _ => None,
        }
    }
}

/// A guest review attached to a listing. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub username: String,
    /// Integer score, 1..=5.
    pub rating: u8,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl Review {
    pub fn new(username: impl Into<String>, rating: u8, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            username: username.into(),
            rating: rating.clamp(1, 5),
            text: text.into(),
            date: now_millis(),
        }
    }
}

/// A single marketplace offer: a stay, a vehicle rental, a SIM plan, a
/// currency exchange point or a food spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub owner_id: String,
    /// Denormalized display handle, fixed at creation time.
    pub owner_username: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub country: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub price_per_night: u64,
    #[serde(flatten)]
    pub details: CategoryDetails,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub status: ModerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
    pub is_featured: bool,
    /// Arithmetic mean of review ratings, rounded to one decimal.
    pub rating: f64,
    /// Newest first.
    pub reviews: Vec<Review>,
}

impl Listing {
    pub fn category(&self) -> ListingCategory {
        self.details.category()
    }

    pub fn is_approved(&self) -> bool {
        self.status == ModerationStatus::Approved
    }

    /// Prepend a review and recompute the aggregate rating.
    pub fn push_review(&mut self, review: Review) {
        self.reviews.insert(0, review);
        self.rating = rounded_mean(&self.reviews);
    }
}

/// Mean of review ratings rounded to one decimal, 0.0 for no reviews.
pub fn rounded_mean(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Runtime role of the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Owner,
    Admin,
}

/// A marketplace participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_banned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Identity fields handed over by the Telegram platform at bootstrap.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramProfile {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

impl User {
    /// Session user derived from a Telegram profile.
    pub fn from_telegram(profile: TelegramProfile) -> Self {
        Self {
            id: format!("tg_{}", profile.id),
            username: profile
                .username
                .unwrap_or_else(|| format!("user_{}", profile.id)),
            role: Role::Guest,
            is_banned: false,
            telegram_id: Some(profile.id),
            first_name: profile.first_name,
            last_name: profile.last_name,
            photo_url: profile.photo_url,
        }
    }

    /// Fallback session user outside the Telegram container.
    pub fn dev_fallback() -> Self {
        Self {
            id: "dev_user".to_string(),
            username: "traveler_dev".to_string(),
            role: Role::Guest,
            is_banned: false,
            telegram_id: None,
            first_name: None,
            last_name: None,
            photo_url: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay_listing() -> Listing {
        Listing {
            id: new_id(),
            owner_id: "dev_user".into(),
            owner_username: "traveler_dev".into(),
            title: "Дом у моря".into(),
            description: "Тихий дворик".into(),
            kind: ListingKind::GuestHouse,
            country: "Россия".into(),
            region: "Краснодарский край".into(),
            city: "Сочи".into(),
            address: "ул. Приморская, 5".into(),
            price_per_night: 3000,
            details: CategoryDetails::Stay {
                distance_to_sea: 150,
                max_guests: 4,
            },
            amenities: vec!["Wi-Fi".into()],
            images: vec![],
            status: ModerationStatus::Approved,
            rejection_reason: None,
            created_at: Utc::now(),
            is_verified: false,
            is_featured: false,
            rating: 0.0,
            reviews: vec![],
        }
    }

    #[test]
    fn serialized_layout_matches_stored_format() {
        let listing = stay_listing();
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value["category"], "Жилье");
        assert_eq!(value["type"], "Гостевой дом");
        assert_eq!(value["distanceToSea"], 150);
        assert_eq!(value["maxGuests"], 4);
        assert_eq!(value["pricePerNight"], 3000);
        assert_eq!(value["status"], "Одобрен");
        assert!(value["createdAt"].is_i64());
        // Fields of other categories must be absent, not null.
        assert!(value.get("engineCapacity").is_none());
        assert!(value.get("dataVolume").is_none());
        // No stale rejection reason on a clean record.
        assert!(value.get("rejectionReason").is_none());
    }

    #[test]
    fn listing_round_trips_through_json() {
        let listing = stay_listing();
        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        // Millisecond timestamps survive the trip exactly.
        assert_eq!(
            back.created_at.timestamp_millis(),
            listing.created_at.timestamp_millis()
        );
        assert_eq!(back.details, listing.details);
        assert_eq!(back.kind, listing.kind);
    }

    #[test]
    fn every_kind_belongs_to_its_category_subset() {
        for category in ListingCategory::ALL {
            let kinds = ListingKind::for_category(category);
            assert!(!kinds.is_empty());
            for kind in kinds {
                assert_eq!(kind.category(), category);
            }
        }
    }

    #[test]
    fn rating_is_rounded_mean_of_reviews() {
        let mut listing = stay_listing();
        assert_eq!(listing.rating, 0.0);

        listing.push_review(Review::new("anna", 5, "Отлично"));
        listing.push_review(Review::new("boris", 3, "Нормально"));
        assert_eq!(listing.rating, 4.0);

        listing.push_review(Review::new("vera", 4, "Хорошо"));
        assert_eq!(listing.rating, 4.0);

        // Newest first.
        assert_eq!(listing.reviews[0].username, "vera");
    }

    #[test]
    fn review_rating_is_clamped_to_scale() {
        assert_eq!(Review::new("x", 0, "").rating, 1);
        assert_eq!(Review::new("x", 9, "").rating, 5);
    }

    #[test]
    fn banned_flag_is_absent_until_set() {
        let user = User::dev_fallback();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("isBanned").is_none());
        assert_eq!(value["role"], "guest");

        let banned = User {
            is_banned: true,
            ..user
        };
        let value = serde_json::to_value(&banned).unwrap();
        assert_eq!(value["isBanned"], true);
    }

    #[test]
    fn telegram_bootstrap_prefixes_platform_id() {
        let user = User::from_telegram(TelegramProfile {
            id: 4242,
            username: None,
            first_name: Some("Анна".into()),
            last_name: None,
            photo_url: None,
        });
        assert_eq!(user.id, "tg_4242");
        assert_eq!(user.username, "user_4242");
        assert_eq!(user.role, Role::Guest);
    }
}
