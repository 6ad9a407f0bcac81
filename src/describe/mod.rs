pub mod gemini;
pub mod traits;
pub mod types;

pub use gemini::GeminiDescriber;
pub use traits::DescriptionGenerator;
pub use types::{DescriptionRequest, GeneratedDescription, FALLBACK_DESCRIPTION};
