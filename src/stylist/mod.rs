//! Stylist Layer
//!
//! Weather-driven outfit recommendation: pure scoring/selection plus a
//! best-effort remote rationale.

mod rationale;
mod scorer;

pub use rationale::{fallback_rationale, RationaleClient};
pub use scorer::{categories_for, score, select_outfit, CATEGORY_CAP, MAX_SELECTION};

use crate::config::RationaleConfig;
use crate::domain::{Garment, WeatherContext};

/// A finished recommendation: the selected garments and the sentence shown
/// next to them.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub garments: Vec<Garment>,
    pub rationale: String,
}

/// Facade over scoring and rationale
pub struct Stylist {
    rationale: RationaleClient,
}

impl Stylist {
    pub fn new(config: &RationaleConfig) -> Self {
        Self {
            rationale: RationaleClient::new(config),
        }
    }

    /// Recommend up to six garments for the given weather. Selection is pure
    /// and always succeeds; the rationale call is best-effort and cannot
    /// change the selection.
    pub async fn recommend(&self, wardrobe: &[Garment], ctx: &WeatherContext) -> Recommendation {
        let garments = select_outfit(wardrobe, ctx);
        let rationale = self.rationale.rationale(ctx, &garments).await;
        Recommendation { garments, rationale }
    }
}
