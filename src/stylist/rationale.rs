//! Rationale Client
//!
//! Best-effort one-sentence explanation for a recommendation, fetched from a
//! remote text-completion endpoint. Any failure falls back to a templated
//! sentence; selection is never blocked or altered by this call.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RationaleConfig;
use crate::domain::{Garment, WeatherContext};

/// How many selected garment names ride along in the prompt
const PROMPT_ITEM_LIMIT: usize = 4;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    text: String,
}

/// Client for the remote rationale service
pub struct RationaleClient {
    http: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl RationaleClient {
    pub fn new(config: &RationaleConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch a one-sentence rationale, falling back to the deterministic
    /// template on any failure. Dropping the returned future cancels the
    /// in-flight request.
    pub async fn rationale(&self, ctx: &WeatherContext, selected: &[Garment]) -> String {
        let Some(endpoint) = &self.endpoint else {
            return fallback_rationale(ctx);
        };

        let prompt = build_prompt(ctx, selected);
        match self.request(endpoint, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                debug!("rationale service returned empty text, using fallback");
                fallback_rationale(ctx)
            }
            Err(e) => {
                debug!("rationale request failed: {}, using fallback", e);
                fallback_rationale(ctx)
            }
        }
    }

    async fn request(&self, endpoint: &str, prompt: &str) -> Result<String, reqwest::Error> {
        let mut req = self.http.post(endpoint).json(&CompletionRequest {
            prompt,
            max_tokens: 60,
        });
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let response: CompletionResponse = req.send().await?.error_for_status()?.json().await?;
        Ok(response.text)
    }
}

/// Prompt seeded with the weather and up to four selected garment names
fn build_prompt(ctx: &WeatherContext, selected: &[Garment]) -> String {
    let names: Vec<&str> = selected
        .iter()
        .take(PROMPT_ITEM_LIMIT)
        .map(|g| g.name.as_str())
        .collect();
    format!(
        "In one sentence, explain why this outfit suits {:.0}°C and {} weather: {}.",
        ctx.temperature_c,
        ctx.condition,
        names.join(", ")
    )
}

/// Deterministic fallback sentence keyed on the temperature tier
pub fn fallback_rationale(ctx: &WeatherContext) -> String {
    let tier = if ctx.temperature_c < 10.0 {
        "cold"
    } else if ctx.temperature_c < 20.0 {
        "cool"
    } else if ctx.temperature_c < 28.0 {
        "warm"
    } else {
        "hot"
    };
    format!(
        "Picked for {} weather at {:.0}°C: pieces that layer well and match the conditions.",
        tier, ctx.temperature_c
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Garment;

    #[test]
    fn test_fallback_tiers() {
        let tiers = [
            (5.0, "cold"),
            (15.0, "cool"),
            (25.0, "warm"),
            (28.0, "hot"),
            (35.0, "hot"),
        ];
        for (temp, word) in tiers {
            let sentence = fallback_rationale(&WeatherContext::new(temp, "Clear"));
            assert!(sentence.contains(word), "{} should read {}", temp, word);
        }
    }

    #[test]
    fn test_prompt_takes_at_most_four_names() {
        let selected: Vec<Garment> = (1..=6)
            .map(|i| Garment::new(i, format!("Item {}", i), "T-Shirt".to_string()))
            .collect();
        let prompt = build_prompt(&WeatherContext::new(22.0, "Clear"), &selected);
        assert!(prompt.contains("Item 4"));
        assert!(!prompt.contains("Item 5"));
        assert!(prompt.contains("22°C"));
    }

    #[tokio::test]
    async fn test_missing_endpoint_uses_fallback() {
        let client = RationaleClient::new(&RationaleConfig::default());
        let ctx = WeatherContext::new(12.0, "Overcast");
        let sentence = client.rationale(&ctx, &[]).await;
        assert_eq!(sentence, fallback_rationale(&ctx));
    }

    #[tokio::test]
    async fn test_failed_request_uses_fallback() {
        // Port 1 refuses the connection, so the request itself errors.
        let config = RationaleConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            api_key: None,
            timeout_secs: 1,
        };
        let client = RationaleClient::new(&config);
        let ctx = WeatherContext::new(25.0, "Clear");
        let selected = vec![Garment::new(1, "Tee".to_string(), "T-Shirt".to_string())];
        let sentence = client.rationale(&ctx, &selected).await;
        assert_eq!(sentence, fallback_rationale(&ctx));
    }
}
