//! Weather-Category Scorer
//!
//! Pure selection logic: given the weather context and the wardrobe, rank
//! garments with an additive point system and pick a diversified set of up
//! to six.

use std::collections::HashMap;

use crate::domain::{Garment, WeatherContext};

/// Maximum number of garments in a recommendation
pub const MAX_SELECTION: usize = 6;
/// Per-category cap for the first selection pass
pub const CATEGORY_CAP: usize = 2;
/// A color is "underrepresented" while the wardrobe has fewer than this many
/// garments wearing it
const COLOR_DIVERSITY_LIMIT: usize = 5;

const COLD_CATEGORIES: [&str; 5] = ["Coat", "Sweater", "Hoodie", "Pants", "Boots"];
const MILD_CATEGORIES: [&str; 5] = ["Jacket", "Sweater", "Shirt", "Jeans", "Sneakers"];
const WARM_CATEGORIES: [&str; 5] = ["T-Shirt", "Shorts", "Dress", "Skirt", "Sandals"];
const RAIN_CATEGORIES: [&str; 3] = ["Jacket", "Boots", "Coat"];

/// Weather-appropriate category names, first-seen order, de-duplicated.
///
/// Starts from the temperature-tier base list, then appends the rain
/// categories when the condition mentions rain or drizzle.
pub fn categories_for(temperature_c: f32, condition: &str) -> Vec<&'static str> {
    let base: &[&'static str] = if temperature_c < 10.0 {
        &COLD_CATEGORIES
    } else if temperature_c < 20.0 {
        &MILD_CATEGORIES
    } else {
        &WARM_CATEGORIES
    };

    let mut categories: Vec<&'static str> = base.to_vec();
    let ctx = WeatherContext::new(temperature_c, condition);
    if ctx.is_rainy() {
        categories.extend_from_slice(&RAIN_CATEGORIES);
    }

    let mut seen = Vec::with_capacity(categories.len());
    for category in categories {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Additive suitability score for one garment.
///
/// `color_counts` maps lowercased color labels to how often they occur in
/// the whole wardrobe; underrepresented colors get a small diversity bonus.
pub fn score(
    garment: &Garment,
    ctx: &WeatherContext,
    categories: &[&str],
    color_counts: &HashMap<String, usize>,
) -> i32 {
    let mut points = 0;
    let season = ctx.season();

    if season.matches_label(&garment.season) {
        points += 10;
    }
    if garment.is_season_agnostic() {
        // Unlabeled garments are mildly favored as season-agnostic.
        points += 5;
    }

    let category_lc = garment.category.to_lowercase();
    if categories
        .iter()
        .any(|c| category_lc.contains(&c.to_lowercase()))
    {
        points += 8;
    }

    if ctx.is_rainy() && (category_lc.contains("jacket") || category_lc.contains("boots")) {
        points += 5;
    }

    let color_lc = garment.color.to_lowercase();
    if color_counts.get(&color_lc).copied().unwrap_or(0) < COLOR_DIVERSITY_LIMIT {
        points += 3;
    }

    points
}

struct ScoredCandidate<'a> {
    garment: &'a Garment,
    score: i32,
}

/// Select up to six weather-appropriate garments.
///
/// First pass takes the highest-scored garments with at most two per
/// category; if fewer than six came out of that, a second pass backfills
/// from the remaining garments regardless of the cap. Ties keep their
/// original wardrobe order (the sort is stable).
pub fn select_outfit(wardrobe: &[Garment], ctx: &WeatherContext) -> Vec<Garment> {
    if wardrobe.is_empty() {
        return Vec::new();
    }

    let categories = categories_for(ctx.temperature_c, &ctx.condition);

    let mut color_counts: HashMap<String, usize> = HashMap::new();
    for garment in wardrobe {
        *color_counts.entry(garment.color.to_lowercase()).or_insert(0) += 1;
    }

    let mut candidates: Vec<ScoredCandidate> = wardrobe
        .iter()
        .map(|garment| ScoredCandidate {
            garment,
            score: score(garment, ctx, &categories, &color_counts),
        })
        .collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut selected: Vec<&Garment> = Vec::with_capacity(MAX_SELECTION);
    let mut per_category: HashMap<String, usize> = HashMap::new();

    // Capped pass: diversity across categories first.
    for candidate in &candidates {
        if selected.len() == MAX_SELECTION {
            break;
        }
        let key = candidate.garment.category.to_lowercase();
        let count = per_category.entry(key).or_insert(0);
        if *count < CATEGORY_CAP {
            *count += 1;
            selected.push(candidate.garment);
        }
    }

    // Backfill pass: fill remaining slots in score order, cap ignored.
    if selected.len() < MAX_SELECTION {
        for candidate in &candidates {
            if selected.len() == MAX_SELECTION {
                break;
            }
            if !selected.iter().any(|g| g.id == candidate.garment.id) {
                selected.push(candidate.garment);
            }
        }
    }

    selected.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garment(id: u32, name: &str, category: &str, season: &str, color: &str) -> Garment {
        Garment::new(id, name.to_string(), category.to_string())
            .with_season(season)
            .with_color(color)
    }

    #[test]
    fn test_cold_clear_has_no_rain_categories() {
        let categories = categories_for(5.0, "Clear");
        assert_eq!(categories, vec!["Coat", "Sweater", "Hoodie", "Pants", "Boots"]);
    }

    #[test]
    fn test_cold_rain_appends_rain_categories_deduplicated() {
        let categories = categories_for(5.0, "Light rain");
        // Jacket is new; Boots and Coat already sit in the cold tier and are
        // kept at their first-seen position.
        assert_eq!(
            categories,
            vec!["Coat", "Sweater", "Hoodie", "Pants", "Boots", "Jacket"]
        );
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(categories_for(9.9, "Clear")[0], "Coat");
        assert_eq!(categories_for(10.0, "Clear")[0], "Jacket");
        assert_eq!(categories_for(19.9, "Clear")[0], "Jacket");
        assert_eq!(categories_for(20.0, "Clear")[0], "T-Shirt");
    }

    #[test]
    fn test_score_components() {
        let ctx = WeatherContext::new(25.0, "Clear");
        let categories = categories_for(25.0, "Clear");
        let counts = HashMap::from([("blue".to_string(), 1)]);

        // Season match (+10), category match (+8), rare color (+3).
        let matching = garment(1, "Tee", "T-Shirt", "Summer", "Blue");
        assert_eq!(score(&matching, &ctx, &categories, &counts), 21);

        // Unlabeled season (+5) instead of a match.
        let agnostic = garment(2, "Tee", "T-Shirt", "", "Blue");
        assert_eq!(score(&agnostic, &ctx, &categories, &counts), 16);

        // Off-season, off-category, common color: only what's left.
        let common_counts = HashMap::from([("black".to_string(), 9)]);
        let mismatch = garment(3, "Parka", "Parka", "Winter", "Black");
        assert_eq!(score(&mismatch, &ctx, &categories, &common_counts), 0);
    }

    #[test]
    fn test_rain_bonus_for_jackets_and_boots() {
        let ctx = WeatherContext::new(12.0, "Heavy drizzle");
        let categories = categories_for(12.0, "Heavy drizzle");
        let counts = HashMap::new();

        let jacket = garment(1, "Rain jacket", "Jacket", "", "Yellow");
        // +5 unlabeled, +8 category, +5 rain, +3 color.
        assert_eq!(score(&jacket, &ctx, &categories, &counts), 21);

        let boots = garment(2, "Chelsea boots", "Boots", "", "Brown");
        assert_eq!(score(&boots, &ctx, &categories, &counts), 21);

        let shirt = garment(3, "Oxford", "Shirt", "", "White");
        // No rain bonus for non-jacket/boots categories.
        assert_eq!(score(&shirt, &ctx, &categories, &counts), 16);
    }

    #[test]
    fn test_empty_wardrobe_selects_nothing() {
        let ctx = WeatherContext::new(25.0, "Clear");
        assert!(select_outfit(&[], &ctx).is_empty());
    }

    #[test]
    fn test_category_cap_then_backfill() {
        let ctx = WeatherContext::new(25.0, "Clear");
        // 10 garments across 3 categories; the warm tier matches T-Shirt and
        // Shorts so those score highest.
        let wardrobe = vec![
            garment(1, "Tee A", "T-Shirt", "Summer", "Blue"),
            garment(2, "Tee B", "T-Shirt", "Summer", "Red"),
            garment(3, "Tee C", "T-Shirt", "Summer", "Green"),
            garment(4, "Tee D", "T-Shirt", "Summer", "Black"),
            garment(5, "Shorts A", "Shorts", "Summer", "Khaki"),
            garment(6, "Shorts B", "Shorts", "Summer", "Navy"),
            garment(7, "Shorts C", "Shorts", "Summer", "Olive"),
            garment(8, "Sweater A", "Sweater", "Winter", "Gray"),
            garment(9, "Sweater B", "Sweater", "Winter", "Cream"),
            garment(10, "Sweater C", "Sweater", "Winter", "Brown"),
        ];

        let selected = select_outfit(&wardrobe, &ctx);
        assert_eq!(selected.len(), MAX_SELECTION);

        // Capped pass: two tees, two shorts, two sweaters.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for g in &selected {
            *counts.entry(g.category.as_str()).or_insert(0) += 1;
        }
        assert_eq!(counts["T-Shirt"], 2);
        assert_eq!(counts["Shorts"], 2);
        assert_eq!(counts["Sweater"], 2);
    }

    #[test]
    fn test_backfill_exceeds_cap_when_short() {
        let ctx = WeatherContext::new(25.0, "Clear");
        // Only one category available: the capped pass yields 2, backfill
        // tops up past the cap.
        let wardrobe = vec![
            garment(1, "Tee A", "T-Shirt", "Summer", "Blue"),
            garment(2, "Tee B", "T-Shirt", "Summer", "Red"),
            garment(3, "Tee C", "T-Shirt", "Summer", "Green"),
            garment(4, "Tee D", "T-Shirt", "Summer", "Black"),
        ];

        let selected = select_outfit(&wardrobe, &ctx);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_ties_keep_wardrobe_order() {
        let ctx = WeatherContext::new(25.0, "Clear");
        let wardrobe = vec![
            garment(1, "Tee A", "T-Shirt", "Summer", "Blue"),
            garment(2, "Tee B", "T-Shirt", "Summer", "Red"),
        ];
        let selected = select_outfit(&wardrobe, &ctx);
        let ids: Vec<u32> = selected.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
