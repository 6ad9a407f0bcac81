use crate::describe::traits::DescriptionGenerator;
use crate::describe::types::{DescriptionRequest, GeneratedDescription};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Description generator backed by the Gemini generateContent endpoint.
pub struct GeminiDescriber {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiDescriber {
    /// Create a describer with an explicit API key. An empty key is kept
    /// and simply routes every request to the fallback.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: Some(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create a describer from the `API_KEY` environment variable. A
    /// missing variable is not an error; generation degrades to fallback.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("API_KEY").ok();
        if api_key.is_none() {
            debug!("API_KEY is not set, descriptions will use the fallback text");
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    fn prompt(request: &DescriptionRequest) -> String {
        format!(
            "Напиши привлекательное описание для объявления о сдаче жилья у моря. \
             Название: {}. Тип: {}. Удобства: {}. \
             Расстояние до моря: {} метров. \
             Стиль: дружелюбный, продающий, краткий. Без упоминания цены и контактов.",
            request.title,
            request.kind,
            request.amenities.join(", "),
            request.distance_to_sea,
        )
    }

    async fn request_description(&self, key: &str, request: &DescriptionRequest) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(request),
                }],
            }],
        };

        debug!("Requesting description for '{}'", request.title);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .context("Failed to call the description service")?;

        if !response.status().is_success() {
            anyhow::bail!("Description service returned status: {}", response.status());
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse description response")?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|text| !text.trim().is_empty())
            .context("Description response contained no text")
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriber {
    async fn generate(&self, request: &DescriptionRequest) -> GeneratedDescription {
        let key = match self.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => return GeneratedDescription::fallback("API key is not configured"),
        };

        match self.request_description(key, request).await {
            Ok(text) => {
                info!("Generated description for '{}'", request.title);
                GeneratedDescription::Generated(text)
            }
            Err(error) => {
                // Diagnostics only; the caller sees the fallback variant.
                warn!("Description generation failed: {error:#}");
                GeneratedDescription::fallback(format!("{error:#}"))
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "Gemini"
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingKind;

    fn request() -> DescriptionRequest {
        DescriptionRequest {
            title: "Домик у моря".into(),
            kind: ListingKind::GuestHouse,
            amenities: vec!["Wi-Fi".into(), "Мангал".into()],
            distance_to_sea: 150,
        }
    }

    #[test]
    fn prompt_carries_all_draft_fields() {
        let prompt = GeminiDescriber::prompt(&request());
        assert!(prompt.contains("Домик у моря"));
        assert!(prompt.contains("Гостевой дом"));
        assert!(prompt.contains("Wi-Fi, Мангал"));
        assert!(prompt.contains("150 метров"));
    }

    #[tokio::test]
    async fn missing_key_takes_the_fallback_path() {
        let describer = GeminiDescriber::new("").unwrap();
        let outcome = describer.generate(&request()).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.text(), crate::describe::FALLBACK_DESCRIPTION);
    }
}
