//! Stylist Commands
//!
//! Weather-driven recommendation entry point.

use crate::domain::WeatherContext;
use crate::repository::Repository;
use crate::stylist::Recommendation;
use crate::AppState;

/// Recommend up to six garments for the given weather, with a rationale.
/// The rationale call is best-effort; a failing endpoint still returns a
/// full recommendation.
pub async fn recommend_outfit(
    state: &AppState,
    temperature_c: f32,
    condition: String,
) -> Result<Recommendation, String> {
    let wardrobe = state
        .garment_repo
        .list()
        .await
        .map_err(|e| e.to_string())?;
    let ctx = WeatherContext::new(temperature_c, condition);
    Ok(state.stylist.recommend(&wardrobe, &ctx).await)
}
