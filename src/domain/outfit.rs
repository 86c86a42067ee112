//! Outfit Entity
//!
//! A saved or in-progress arrangement of garments on the canvas, plus the
//! metadata the wardrobe screens show: occasion, notes, scheduling, wear
//! tracking.

use chrono::NaiveDate;
use outfit_canvas::Placement;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::garment::Garment;

/// When an outfit is planned to be worn.
///
/// A saved outfit carries either a single date or a start/end range, never
/// both; the sum type makes the exclusivity structural. Undated outfits
/// simply have no schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schedule {
    Single { date: NaiveDate },
    Range { start: NaiveDate, end: NaiveDate },
}

/// A planned or saved outfit
///
/// `items` keeps insertion order; that order is the canvas z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    /// Unique identifier (assigned by the database)
    pub id: u32,
    pub name: String,
    pub occasion: String,
    pub notes: String,
    /// Placed garments, insertion order = z-order
    pub items: Vec<Placement>,
    pub schedule: Option<Schedule>,
    pub favorite: bool,
    /// Times the outfit was explicitly marked as worn
    pub worn_count: u32,
    pub last_worn_on: Option<NaiveDate>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Outfit {
    /// Create a new, empty, undated outfit
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            occasion: String::new(),
            notes: String::new(),
            items: Vec::new(),
            schedule: None,
            favorite: false,
            worn_count: 0,
            last_worn_on: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Mark the outfit as worn on `date`. This is the only path that touches
    /// the wear counters; saving or editing never changes them implicitly.
    pub fn mark_worn(&mut self, date: NaiveDate) {
        self.worn_count += 1;
        self.last_worn_on = Some(date);
    }

    /// Thumbnail for list screens: the first placed garment's image.
    pub fn thumbnail_ref<'a>(&self, catalog: &'a [Garment]) -> Option<&'a str> {
        let first = self.items.first()?;
        catalog
            .iter()
            .find(|g| g.id == first.garment_id)?
            .image_ref
            .as_deref()
    }
}

impl Entity for Outfit {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
