pub mod session;

pub use session::{AdminSession, ADMIN_PASSWORD};

use thiserror::Error;
use tracing::{debug, info};

use crate::authoring::{AuthoringError, ListingForm};
use crate::models::{Listing, ModerationStatus, Review, Role, User};
use crate::seed;
use crate::storage::{load_collection, save_collection, KvStore, LISTINGS_KEY, USERS_KEY};

/// Failures surfaced by store commands. None of them is fatal; the
/// collections stay consistent on every error path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("listing not found: {0}")]
    ListingNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("this action requires the admin role")]
    AdminRequired,
    #[error("admin access has not been confirmed for this session")]
    AdminNotConfirmed,
    #[error("a rejection requires a non-empty reason")]
    EmptyRejectionReason,
    #[error("cannot moderate a listing that is {from}")]
    InvalidTransition { from: ModerationStatus },
    #[error("reviews are only accepted on approved listings, this one is {status}")]
    ReviewNotAllowed { status: ModerationStatus },
    #[error(transparent)]
    Authoring(#[from] AuthoringError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Input for a new review; id and date are assigned at write time.
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub rating: u8,
    pub text: String,
}

/// Single-writer container owning the listing and user collections.
/// Every mutation rewrites the affected collection through the adapter,
/// so the stored state always mirrors memory.
pub struct MarketStore<S: KvStore> {
    kv: S,
    listings: Vec<Listing>,
    users: Vec<User>,
}

impl<S: KvStore> MarketStore<S> {
    /// Load both collections, seeding whenever stored state is absent,
    /// empty or malformed.
    pub fn open(kv: S) -> Self {
        let listings = load_collection(&kv, LISTINGS_KEY, seed::seed_listings);
        let users = load_collection(&kv, USERS_KEY, seed::seed_users);
        info!(
            "Market store opened with {} listings, {} users",
            listings.len(),
            users.len()
        );
        Self {
            kv,
            listings,
            users,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Upsert the session user into the user collection at bootstrap.
    pub fn register_user(&mut self, user: User) -> Result<User, StoreError> {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => self.users.push(user.clone()),
        }
        self.persist_users()?;
        Ok(user)
    }

    /// Submit the authoring form: the new listing lands at the head of
    /// the collection with pending status.
    pub fn create_listing(&mut self, form: ListingForm, owner: &User) -> Result<Listing, StoreError> {
        let listing = form.submit(owner)?;
        info!("Listing '{}' submitted by @{}", listing.title, owner.username);
        self.listings.insert(0, listing.clone());
        self.persist_listings()?;
        Ok(listing)
    }

    /// Approve a pending listing. Clears any stale rejection reason so an
    /// approved record never carries one.
    pub fn approve(&mut self, actor: &User, listing_id: &str) -> Result<Listing, StoreError> {
        require_admin(actor)?;
        let listing = self.listing_mut(listing_id)?;
        if listing.status != ModerationStatus::Pending {
            return Err(StoreError::InvalidTransition {
                from: listing.status,
            });
        }
        listing.status = ModerationStatus::Approved;
        listing.rejection_reason = None;
        let approved = listing.clone();
        info!("Listing '{}' approved", approved.title);
        self.persist_listings()?;
        Ok(approved)
    }

    /// Reject a pending listing. A blank reason aborts the transition and
    /// leaves the listing pending.
    pub fn reject(
        &mut self,
        actor: &User,
        listing_id: &str,
        reason: &str,
    ) -> Result<Listing, StoreError> {
        require_admin(actor)?;
        if reason.trim().is_empty() {
            return Err(StoreError::EmptyRejectionReason);
        }
        let listing = self.listing_mut(listing_id)?;
        if listing.status != ModerationStatus::Pending {
            return Err(StoreError::InvalidTransition {
                from: listing.status,
            });
        }
        listing.status = ModerationStatus::Rejected;
        listing.rejection_reason = Some(reason.to_string());
        let rejected = listing.clone();
        info!("Listing '{}' rejected: {}", rejected.title, reason);
        self.persist_listings()?;
        Ok(rejected)
    }

    /// Full-record replacement from the admin catalog editor. This is the
    /// one path that may rewrite any field, status included.
    pub fn update_listing(&mut self, actor: &User, updated: Listing) -> Result<Listing, StoreError> {
        require_admin(actor)?;
        let slot = self
            .listings
            .iter_mut()
            .find(|l| l.id == updated.id)
            .ok_or_else(|| StoreError::ListingNotFound(updated.id.clone()))?;
        *slot = updated.clone();
        self.persist_listings()?;
        Ok(updated)
    }

    pub fn delete_listing(&mut self, actor: &User, listing_id: &str) -> Result<(), StoreError> {
        require_admin(actor)?;
        let before = self.listings.len();
        self.listings.retain(|l| l.id != listing_id);
        if self.listings.len() == before {
            return Err(StoreError::ListingNotFound(listing_id.to_string()));
        }
        info!("Listing {listing_id} deleted");
        self.persist_listings()?;
        Ok(())
    }

    /// Append a review and recompute the aggregate rating. Only approved
    /// listings accept reviews; the same author may review repeatedly.
    pub fn add_review(
        &mut self,
        author: &User,
        listing_id: &str,
        input: ReviewInput,
    ) -> Result<Listing, StoreError> {
        let username = author.username.clone();
        let listing = self.listing_mut(listing_id)?;
        if listing.status != ModerationStatus::Approved {
            return Err(StoreError::ReviewNotAllowed {
                status: listing.status,
            });
        }
        listing.push_review(Review::new(username, input.rating, input.text));
        let updated = listing.clone();
        debug!(
            "Review added to '{}', rating is now {}",
            updated.title, updated.rating
        );
        self.persist_listings()?;
        Ok(updated)
    }

    /// Flip a user's ban flag. Toggling twice restores the original state.
    pub fn toggle_ban(&mut self, actor: &User, user_id: &str) -> Result<User, StoreError> {
        require_admin(actor)?;
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        user.is_banned = !user.is_banned;
        let updated = user.clone();
        info!(
            "User @{} is now {}",
            updated.username,
            if updated.is_banned { "banned" } else { "active" }
        );
        self.persist_users()?;
        Ok(updated)
    }

    /// Switch a user's runtime role. The admin role additionally requires
    /// the session confirmation obtained with the access code.
    pub fn change_role<K: KvStore>(
        &mut self,
        user_id: &str,
        role: Role,
        session: &AdminSession<K>,
    ) -> Result<User, StoreError> {
        if role == Role::Admin && !session.is_confirmed() {
            return Err(StoreError::AdminNotConfirmed);
        }
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        user.role = role;
        let updated = user.clone();
        self.persist_users()?;
        Ok(updated)
    }

    /// Drop both collections back to the seed data.
    pub fn reset_to_seed(&mut self, actor: &User) -> Result<(), StoreError> {
        require_admin(actor)?;
        self.listings = seed::seed_listings();
        self.users = seed::seed_users();
        info!("Collections reset to seed data");
        self.persist_listings()?;
        self.persist_users()?;
        Ok(())
    }

    fn listing_mut(&mut self, id: &str) -> Result<&mut Listing, StoreError> {
        self.listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::ListingNotFound(id.to_string()))
    }

    fn persist_listings(&mut self) -> Result<(), StoreError> {
        save_collection(&mut self.kv, LISTINGS_KEY, &self.listings)?;
        Ok(())
    }

    fn persist_users(&mut self) -> Result<(), StoreError> {
        save_collection(&mut self.kv, USERS_KEY, &self.users)?;
        Ok(())
    }
}

fn require_admin(actor: &User) -> Result<(), StoreError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(StoreError::AdminRequired)
    }
}
