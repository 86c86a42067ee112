//! Garment Entity
//!
//! A single wardrobe item in the user's catalog. The catalog is read-mostly:
//! the canvas and the stylist only ever hold references to garments, never
//! ownership.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A wardrobe item
///
/// Category, season and color are free-text labels; the stylist matches them
/// case-insensitively rather than through a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Unique identifier (assigned by the database)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category label, e.g. "Jacket", "T-Shirt"
    pub category: String,
    /// Season label, e.g. "Summer"; empty means season-agnostic
    pub season: String,
    /// Color label, e.g. "Navy"
    pub color: String,
    /// Reference to the thumbnail image (storage key or URL)
    pub image_ref: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Garment {
    /// Create a new garment with default (empty) labels
    pub fn new(id: u32, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            season: String::new(),
            color: String::new(),
            image_ref: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Builder-style helpers for the optional labels
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Whether the garment carries no season label
    pub fn is_season_agnostic(&self) -> bool {
        self.season.trim().is_empty()
    }
}

impl Entity for Garment {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
