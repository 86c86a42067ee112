//! Outfit Commands
//!
//! Saving, loading and wear-tracking for outfit drafts. Loading goes through
//! catalog resolution so deleted garments fall out of the draft with a
//! reported count.

use chrono::NaiveDate;

use crate::domain::Outfit;
use crate::repository::{Repository, ResolvedOutfit};
use crate::AppState;

/// Persist an outfit draft: id 0 creates, anything else updates
pub async fn save_outfit(state: &AppState, outfit: Outfit) -> Result<Outfit, String> {
    let repo = &state.outfit_repo;
    if outfit.id == 0 {
        repo.create(&outfit).await.map_err(|e| e.to_string())
    } else {
        repo.update(&outfit).await.map_err(|e| e.to_string())
    }
}

/// Load an outfit resolved against the current catalog
pub async fn load_outfit(state: &AppState, id: u32) -> Result<Option<ResolvedOutfit>, String> {
    let catalog = state
        .garment_repo
        .list()
        .await
        .map_err(|e| e.to_string())?;
    state
        .outfit_repo
        .load_resolved(id, &catalog)
        .await
        .map_err(|e| e.to_string())
}

/// List all saved outfits
pub async fn list_outfits(state: &AppState) -> Result<Vec<Outfit>, String> {
    state.outfit_repo.list().await.map_err(|e| e.to_string())
}

/// List favorite outfits
pub async fn list_favorite_outfits(state: &AppState) -> Result<Vec<Outfit>, String> {
    state
        .outfit_repo
        .list_favorites()
        .await
        .map_err(|e| e.to_string())
}

/// Explicit "worn today" action; the only path that moves wear counters
pub async fn mark_outfit_worn(
    state: &AppState,
    id: u32,
    date: NaiveDate,
) -> Result<Outfit, String> {
    state
        .outfit_repo
        .mark_worn(id, date)
        .await
        .map_err(|e| e.to_string())
}

/// Toggle the favorite flag
pub async fn set_outfit_favorite(state: &AppState, id: u32, favorite: bool) -> Result<(), String> {
    state
        .outfit_repo
        .set_favorite(id, favorite)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a saved outfit
pub async fn delete_outfit(state: &AppState, id: u32) -> Result<(), String> {
    state
        .outfit_repo
        .delete(id)
        .await
        .map_err(|e| e.to_string())
}
