pub mod authoring;
pub mod catalog;
pub mod describe;
pub mod models;
pub mod regions;
pub mod seed;
pub mod storage;
pub mod store;

pub use catalog::{CatalogFilter, Viewer};
pub use models::{Listing, ListingCategory, ListingKind, ModerationStatus, Review, Role, User};
pub use store::{AdminSession, MarketStore, ReviewInput, StoreError};
