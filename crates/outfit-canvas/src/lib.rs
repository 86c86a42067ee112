//! Outfit Canvas Engine
//!
//! Free arrangement of garment thumbnails on a bounded 2D surface.
//! Drag-to-move and pinch-to-scale gestures feed `Canvas::transform`,
//! which clamps offsets so the scaled bounding box stays inside the
//! canvas once its size is known.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum per-item scale multiplier.
pub const MIN_SCALE: f32 = 0.3;
/// Maximum per-item scale multiplier.
pub const MAX_SCALE: f32 = 5.0;
/// Unscaled square thumbnail edge length in canvas pixels.
pub const BASE_ITEM_SIZE: f32 = 120.0;
/// Upper bound for the randomized initial placement, both axes.
pub const PLACEMENT_MAX: f32 = 250.0;

/// A garment placed on the canvas.
///
/// Offsets are in base (unscaled) canvas coordinates. Z-order is the
/// placement's position in the canvas sequence: later entries render on top.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Id of the underlying catalog garment (owned elsewhere).
    pub garment_id: u32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Placement {
    pub fn new(garment_id: u32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            garment_id,
            offset_x,
            offset_y,
            scale: 1.0,
        }
    }
}

/// Canvas dimensions. `(0, 0)` means the canvas has not been laid out yet;
/// clamping only activates when both dimensions are positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_known(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Pan delta from a single gesture-update event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanDelta {
    pub x: f32,
    pub y: f32,
}

impl PanDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The canvas: an ordered sequence of placements plus at most one selection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Canvas {
    items: Vec<Placement>,
    selected: Option<u32>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a canvas from persisted placements (insertion order preserved).
    pub fn from_placements(items: Vec<Placement>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[Placement] {
        &self.items
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Place a garment at a random offset in `[0, PLACEMENT_MAX]` on both
    /// axes, scale 1.0, appended last (topmost). The initial position is not
    /// guaranteed in-bounds; clamping activates on the first gesture.
    pub fn place(&mut self, garment_id: u32) -> &Placement {
        let mut rng = rand::rng();
        let x = rng.random_range(0.0..=PLACEMENT_MAX);
        let y = rng.random_range(0.0..=PLACEMENT_MAX);
        self.place_at(garment_id, x, y)
    }

    /// Place a garment at an explicit offset. Used when restoring persisted
    /// outfits and by tests that need determinism.
    pub fn place_at(&mut self, garment_id: u32, x: f32, y: f32) -> &Placement {
        self.items.push(Placement::new(garment_id, x, y));
        self.items.last().unwrap()
    }

    /// Apply one gesture-update event to a placed garment.
    ///
    /// Scale is clamped into `[MIN_SCALE, MAX_SCALE]`. When the canvas size
    /// is known, the panned offset is clamped so the scaled bounding box
    /// (which grows from the item's center) stays inside the canvas; when
    /// the clamp interval inverts because the item is larger than the
    /// canvas, the swapped interval is used instead of silently skipping the
    /// clamp. An unknown canvas size accumulates raw deltas.
    ///
    /// Returns `false` when no placement with that id exists.
    pub fn transform(
        &mut self,
        garment_id: u32,
        delta: PanDelta,
        zoom: f32,
        size: CanvasSize,
    ) -> bool {
        let Some(item) = self.items.iter_mut().find(|p| p.garment_id == garment_id) else {
            return false;
        };

        let new_scale = (item.scale * zoom).clamp(MIN_SCALE, MAX_SCALE);
        let visual = BASE_ITEM_SIZE * new_scale;

        if size.is_known() {
            let min_x = (visual - BASE_ITEM_SIZE) / 2.0;
            let max_x = size.width - BASE_ITEM_SIZE + (BASE_ITEM_SIZE - visual) / 2.0;
            let min_y = (visual - BASE_ITEM_SIZE) / 2.0;
            let max_y = size.height - BASE_ITEM_SIZE + (BASE_ITEM_SIZE - visual) / 2.0;

            item.offset_x = clamp_into(item.offset_x + delta.x, min_x, max_x);
            item.offset_y = clamp_into(item.offset_y + delta.y, min_y, max_y);
        } else {
            item.offset_x += delta.x;
            item.offset_y += delta.y;
        }
        item.scale = new_scale;
        true
    }

    /// Select a placed garment. Selecting an id that is not on the canvas is
    /// a no-op. Selection only drives highlight/delete in the UI; it has no
    /// effect on `transform`.
    pub fn select(&mut self, garment_id: u32) {
        if self.items.iter().any(|p| p.garment_id == garment_id) {
            self.selected = Some(garment_id);
        }
    }

    /// Clear the selection (tap on empty canvas area).
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Remove a placed garment, clearing the selection if it pointed at it.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, garment_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.garment_id != garment_id);
        let removed = self.items.len() != before;
        if removed && self.selected == Some(garment_id) {
            self.selected = None;
        }
        removed
    }
}

/// Clamp into `[lo, hi]`, swapping the bounds when the interval is inverted.
fn clamp_into(value: f32, lo: f32, hi: f32) -> f32 {
    if lo <= hi {
        value.clamp(lo, hi)
    } else {
        value.clamp(hi, lo)
    }
}

/// Keep only placements whose garment id appears in `catalog_ids`, returning
/// the surviving placements and how many were dropped. Persisted outfits can
/// reference garments that were deleted since the save; callers surface the
/// count rather than failing the whole load.
pub fn resolve(placements: Vec<Placement>, catalog_ids: &[u32]) -> (Vec<Placement>, usize) {
    let before = placements.len();
    let kept: Vec<Placement> = placements
        .into_iter()
        .filter(|p| catalog_ids.contains(&p.garment_id))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
