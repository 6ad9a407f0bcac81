use seahome::authoring::ListingForm;
use seahome::catalog::{self, CatalogFilter, Viewer};
use seahome::describe::{DescriptionGenerator, GeminiDescriber};
use seahome::models::{ListingCategory, User};
use seahome::storage::JsonFileStore;
use seahome::store::MarketStore;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🌊 SeaHome - Coastal Listings Catalog");
    info!("=====================================");
    info!("");

    // Open the durable store; seeds the catalog on first run
    let kv = JsonFileStore::open("data")?;
    let mut store = MarketStore::open(kv);

    // Bootstrap the session user (Telegram identity outside this demo)
    let user = store.register_user(User::dev_fallback())?;
    info!("Session user: @{}", user.username);
    info!("");

    let viewer = Viewer::Guest;

    // City picker counts per region
    for region in ["Краснодарский край", "Крым", "Таиланд"] {
        println!("{region}:");
        for (city, count) in catalog::city_counts(store.listings(), viewer, region) {
            if count > 0 {
                println!("  {city} — {count}");
            }
        }
    }
    println!();

    // Guest catalog for one city
    let filter = CatalogFilter::for_city("Краснодарский край", "Сочи");
    let results = catalog::filter(store.listings(), viewer, &filter);

    info!("✅ Found {} listings in Сочи\n", results.len());

    for (i, listing) in results.iter().enumerate() {
        println!("{}. {} ({} ₽)", i + 1, listing.title, listing.price_per_night);
        println!("   {} · {}", listing.kind, listing.city);
        if let Some(distance) = listing.details.distance_to_sea() {
            println!("   До моря: {distance}м");
        }
        if !listing.reviews.is_empty() {
            println!("   ★ {} ({} отзывов)", listing.rating, listing.reviews.len());
        }
        println!("   ID: {}", listing.id);
        println!();
    }

    // Featured rail from the welcome view
    let featured = catalog::featured(store.listings(), viewer, 5);
    info!("⭐ Featured: {} listings", featured.len());

    // Moderation queue size for the admin panel
    let pending = catalog::pending(store.listings());
    info!("📋 Moderation queue: {} pending", pending.len());
    info!("");

    // Best-effort description generation demo; prints the fallback text
    // unless API_KEY is configured
    let mut draft = ListingForm::new(ListingCategory::Stay);
    draft.title = "Домик у маяка".to_string();
    draft.city = "Сочи".to_string();
    draft.distance = "120".to_string();
    draft.amenities = vec!["Wi-Fi".to_string(), "Мангал".to_string()];

    let describer = GeminiDescriber::from_env()?;
    let description = describer.generate(&draft.description_request()).await;
    info!(
        "📝 {} description: {}",
        if description.is_fallback() {
            "Fallback"
        } else {
            "Generated"
        },
        description.text()
    );

    Ok(())
}
