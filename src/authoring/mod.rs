use thiserror::Error;

use crate::describe::DescriptionRequest;
use crate::models::{
    new_id, now_millis, CategoryDetails, Listing, ListingCategory, ListingKind, ModerationStatus,
    User,
};
use crate::regions;

/// Validation failures surfaced by the authoring flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthoringError {
    #[error("Название объявления не может быть пустым")]
    EmptyTitle,
    #[error("Город не может быть пустым")]
    EmptyCity,
}

/// Steps of the authoring wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Category picker; fixes the legal kind subset and field set.
    Category,
    /// Kind and title.
    Basics,
    /// Region, city, address, price and the category-specific numbers.
    Location,
    /// Description and amenity tags.
    Details,
}

/// Accumulated wizard input. Numeric fields are kept as the raw strings
/// the user typed; unparsable values become 0 at submission instead of
/// failing the flow.
#[derive(Debug, Clone)]
pub struct ListingForm {
    pub category: ListingCategory,
    pub kind: ListingKind,
    pub title: String,
    pub description: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub price: String,
    pub distance: String,
    pub guests: String,
    pub average_bill: String,
    pub engine: String,
    pub data: String,
    pub validity: String,
    pub rates: String,
    pub hours: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl ListingForm {
    /// Fresh form for a category, with the category's wizard presets.
    pub fn new(category: ListingCategory) -> Self {
        let region = regions::available_regions(category)
            .first()
            .copied()
            .unwrap_or(regions::REGIONS[0])
            .to_string();
        Self {
            category,
            kind: ListingKind::for_category(category)[0],
            title: String::new(),
            description: String::new(),
            region,
            city: String::new(),
            address: String::new(),
            price: String::new(),
            distance: String::new(),
            guests: "2".to_string(),
            average_bill: String::new(),
            engine: "155cc".to_string(),
            data: "Unlimited".to_string(),
            validity: "30 days".to_string(),
            rates: "RUB -> THB (0.38)".to_string(),
            hours: "10:00 - 20:00".to_string(),
            amenities: Vec::new(),
            images: vec![format!("https://picsum.photos/seed/{}/800/600", new_id())],
        }
    }

    /// Switch category mid-wizard: resets the kind to the new category's
    /// default and moves the region onto an available one if needed.
    pub fn set_category(&mut self, category: ListingCategory) {
        self.category = category;
        self.kind = ListingKind::for_category(category)[0];
        let available = regions::available_regions(category);
        if !available.contains(&self.region.as_str()) {
            if let Some(first) = available.first() {
                self.region = (*first).to_string();
            }
        }
    }

    /// Pick a kind; choices outside the category's legal subset are
    /// ignored, mirroring the fixed option list of the wizard.
    pub fn set_kind(&mut self, kind: ListingKind) {
        if ListingKind::for_category(self.category).contains(&kind) {
            self.kind = kind;
        }
    }

    pub fn toggle_amenity(&mut self, tag: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == tag) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(tag.to_string());
        }
    }

    /// Step-level gating: the wizard cannot advance past Basics without a
    /// title, nor past Location without a city.
    pub fn can_advance(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Category => true,
            WizardStep::Basics => !self.title.trim().is_empty(),
            WizardStep::Location => !self.city.trim().is_empty(),
            WizardStep::Details => true,
        }
    }

    /// Input for the description generator, assembled from current state.
    pub fn description_request(&self) -> DescriptionRequest {
        DescriptionRequest {
            title: self.title.clone(),
            kind: self.kind,
            amenities: self.amenities.clone(),
            distance_to_sea: parse_or_zero(&self.distance),
        }
    }

    fn details(&self) -> CategoryDetails {
        match self.category {
            ListingCategory::Stay => CategoryDetails::Stay {
                distance_to_sea: parse_or_zero(&self.distance),
                max_guests: parse_or_zero(&self.guests),
            },
            ListingCategory::Moto => CategoryDetails::Moto {
                engine_capacity: self.engine.clone(),
            },
            ListingCategory::Sim => CategoryDetails::Sim {
                data_volume: self.data.clone(),
                validity_period: self.validity.clone(),
            },
            ListingCategory::Exchange => CategoryDetails::Exchange {
                exchange_rates: self.rates.clone(),
                working_hours: self.hours.clone(),
            },
            ListingCategory::Food => CategoryDetails::Food {
                average_bill: parse_or_zero(&self.average_bill),
            },
        }
    }

    /// Build the final listing record: fresh id, ownership copied from
    /// the acting user, pending status, empty social proof.
    pub fn submit(self, owner: &User) -> Result<Listing, AuthoringError> {
        if self.title.trim().is_empty() {
            return Err(AuthoringError::EmptyTitle);
        }
        if self.city.trim().is_empty() {
            return Err(AuthoringError::EmptyCity);
        }

        let details = self.details();
        Ok(Listing {
            id: new_id(),
            owner_id: owner.id.clone(),
            owner_username: owner.username.clone(),
            title: self.title,
            description: self.description,
            kind: self.kind,
            country: regions::country_for_region(&self.region).to_string(),
            region: self.region,
            city: self.city,
            address: self.address,
            price_per_night: parse_or_zero(&self.price),
            details,
            amenities: self.amenities,
            images: self.images,
            status: ModerationStatus::Pending,
            rejection_reason: None,
            created_at: now_millis(),
            is_verified: false,
            is_featured: false,
            rating: 0.0,
            reviews: Vec::new(),
        })
    }
}

fn parse_or_zero<T>(raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    raw.trim().parse().unwrap_or_default()
}
