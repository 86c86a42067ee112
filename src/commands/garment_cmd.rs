//! Garment Commands
//!
//! Wardrobe catalog CRUD exposed to the UI shell.

use crate::domain::Garment;
use crate::repository::Repository;
use crate::AppState;

/// Create a new catalog garment
pub async fn create_garment(
    state: &AppState,
    name: String,
    category: String,
    season: Option<String>,
    color: Option<String>,
    image_ref: Option<String>,
) -> Result<Garment, String> {
    let mut garment = Garment::new(0, name, category);
    garment.season = season.unwrap_or_default();
    garment.color = color.unwrap_or_default();
    garment.image_ref = image_ref;
    state
        .garment_repo
        .create(&garment)
        .await
        .map_err(|e| e.to_string())
}

/// List the whole wardrobe
pub async fn list_garments(state: &AppState) -> Result<Vec<Garment>, String> {
    state.garment_repo.list().await.map_err(|e| e.to_string())
}

/// List garments under one category label
pub async fn list_garments_by_category(
    state: &AppState,
    category: String,
) -> Result<Vec<Garment>, String> {
    state
        .garment_repo
        .list_by_category(&category)
        .await
        .map_err(|e| e.to_string())
}

/// Get garment by ID
pub async fn get_garment(state: &AppState, id: u32) -> Result<Option<Garment>, String> {
    state
        .garment_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())
}

/// Update garment labels; absent fields keep their current value
pub async fn update_garment(
    state: &AppState,
    id: u32,
    name: Option<String>,
    category: Option<String>,
    season: Option<String>,
    color: Option<String>,
    image_ref: Option<String>,
) -> Result<Garment, String> {
    let existing = state
        .garment_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?;
    let mut garment = existing.ok_or_else(|| format!("Garment {} not found", id))?;

    if let Some(name) = name {
        garment.name = name;
    }
    if let Some(category) = category {
        garment.category = category;
    }
    if let Some(season) = season {
        garment.season = season;
    }
    if let Some(color) = color {
        garment.color = color;
    }
    if let Some(image_ref) = image_ref {
        garment.image_ref = Some(image_ref);
    }

    state
        .garment_repo
        .update(&garment)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a garment from the catalog
pub async fn delete_garment(state: &AppState, id: u32) -> Result<(), String> {
    state
        .garment_repo
        .delete(id)
        .await
        .map_err(|e| e.to_string())
}
