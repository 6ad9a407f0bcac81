use crate::describe::types::{DescriptionRequest, GeneratedDescription};
use async_trait::async_trait;

/// Common trait for description generators.
/// This allows swapping the backing text service without touching the
/// authoring flow.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Produce a description for a draft listing. Best effort: degrades
    /// to the fallback variant on any failure and never returns an error,
    /// so listing creation is never blocked on the external service.
    async fn generate(&self, request: &DescriptionRequest) -> GeneratedDescription;

    /// Get the name of the backing service.
    fn source_name(&self) -> &'static str;
}
