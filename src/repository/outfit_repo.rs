//! Outfit Repository
//!
//! SQLite-backed implementation of Repository<Outfit>. Placements and the
//! schedule are stored as JSON columns; `load_resolved` reconciles a stored
//! outfit against the live garment catalog.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Garment, Outfit, Schedule};
use outfit_canvas::Placement;

/// An outfit loaded against the current catalog. Placements whose garment no
/// longer exists are removed; `dropped` tells the caller how many were lost
/// instead of hiding it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutfit {
    pub outfit: Outfit,
    pub dropped: usize,
}

/// SQLite implementation of the outfit store
pub struct OutfitRepository {
    conn: Arc<Mutex<Connection>>,
}

const OUTFIT_COLUMNS: &str = "id, name, occasion, notes, items, schedule, favorite, worn_count, \
     last_worn_on, CAST(created_at AS INTEGER) as created_at, \
     CAST(updated_at AS INTEGER) as updated_at";

impl OutfitRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Load an outfit and drop placements that no longer resolve against the
    /// catalog, reporting the dropped count.
    pub async fn load_resolved(
        &self,
        id: u32,
        catalog: &[Garment],
    ) -> DomainResult<Option<ResolvedOutfit>> {
        let Some(mut outfit) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let catalog_ids: Vec<u32> = catalog.iter().map(|g| g.id).collect();
        let (kept, dropped) = outfit_canvas::resolve(std::mem::take(&mut outfit.items), &catalog_ids);
        outfit.items = kept;
        Ok(Some(ResolvedOutfit { outfit, dropped }))
    }

    /// Flip the favorite flag
    pub async fn set_favorite(&self, id: u32, favorite: bool) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE outfits SET favorite = ?, updated_at = strftime('%s', 'now') WHERE id = ?",
            libsql::params![if favorite { 1 } else { 0 }, id],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }

    /// Record an explicit "worn today" action. Reads the outfit, applies
    /// `Outfit::mark_worn`, and writes the counters back; no SQL-side
    /// arithmetic bypasses the domain rule.
    pub async fn mark_worn(&self, id: u32, date: NaiveDate) -> DomainResult<Outfit> {
        let mut outfit = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("outfit {}", id)))?;
        outfit.mark_worn(date);

        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE outfits SET worn_count = ?, last_worn_on = ?, \
             updated_at = strftime('%s', 'now') WHERE id = ?",
            libsql::params![outfit.worn_count, date.to_string(), id],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(outfit)
    }

    /// List favorites, most recently updated first
    pub async fn list_favorites(&self) -> DomainResult<Vec<Outfit>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT {OUTFIT_COLUMNS} FROM outfits WHERE favorite = 1 ORDER BY updated_at DESC"
                ),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut outfits = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            outfits.push(row_to_outfit(&row)?);
        }
        Ok(outfits)
    }
}

#[async_trait]
impl Repository<Outfit> for OutfitRepository {
    async fn create(&self, entity: &Outfit) -> DomainResult<Outfit> {
        let items = encode_items(&entity.items)?;
        let schedule = encode_schedule(entity.schedule.as_ref())?;

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO outfits (name, occasion, notes, items, schedule, favorite, worn_count, last_worn_on) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                entity.name.clone(),
                entity.occasion.clone(),
                entity.notes.clone(),
                items,
                schedule,
                if entity.favorite { 1 } else { 0 },
                entity.worn_count,
                entity.last_worn_on.map(|d| d.to_string())
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = entity.clone();
        created.id = id;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Outfit>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!("SELECT {OUTFIT_COLUMNS} FROM outfits WHERE id = ?"),
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_outfit(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Outfit>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!("SELECT {OUTFIT_COLUMNS} FROM outfits ORDER BY updated_at DESC, id DESC"),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut outfits = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            outfits.push(row_to_outfit(&row)?);
        }
        Ok(outfits)
    }

    async fn update(&self, entity: &Outfit) -> DomainResult<Outfit> {
        let items = encode_items(&entity.items)?;
        let schedule = encode_schedule(entity.schedule.as_ref())?;

        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE outfits SET name = ?, occasion = ?, notes = ?, items = ?, schedule = ?, \
             favorite = ?, updated_at = strftime('%s', 'now') WHERE id = ?",
            libsql::params![
                entity.name.clone(),
                entity.occasion.clone(),
                entity.notes.clone(),
                items,
                schedule,
                if entity.favorite { 1 } else { 0 },
                entity.id
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM outfits WHERE id = ?", libsql::params![id])
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

fn encode_items(items: &[Placement]) -> DomainResult<String> {
    serde_json::to_string(items).map_err(|e| DomainError::Serialization(e.to_string()))
}

fn encode_schedule(schedule: Option<&Schedule>) -> DomainResult<Option<String>> {
    schedule
        .map(|s| serde_json::to_string(s).map_err(|e| DomainError::Serialization(e.to_string())))
        .transpose()
}

/// Convert a database row to Outfit
fn row_to_outfit(row: &libsql::Row) -> DomainResult<Outfit> {
    let items_json = row.get::<String>(4).unwrap_or_else(|_| "[]".to_string());
    let items: Vec<Placement> = serde_json::from_str(&items_json)
        .map_err(|e| DomainError::Serialization(e.to_string()))?;

    let schedule = match row.get::<Option<String>>(5).ok().flatten() {
        Some(json) => Some(
            serde_json::from_str::<Schedule>(&json)
                .map_err(|e| DomainError::Serialization(e.to_string()))?,
        ),
        None => None,
    };

    let last_worn_on = row
        .get::<Option<String>>(8)
        .ok()
        .flatten()
        .and_then(|s| s.parse::<NaiveDate>().ok());

    Ok(Outfit {
        id: row
            .get::<u32>(0)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        name: row
            .get::<String>(1)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        occasion: row.get::<String>(2).unwrap_or_default(),
        notes: row.get::<String>(3).unwrap_or_default(),
        items,
        schedule,
        favorite: row.get::<i32>(6).unwrap_or(0) != 0,
        worn_count: row.get::<u32>(7).unwrap_or(0),
        last_worn_on,
        created_at: row.get::<Option<i64>>(9).ok().flatten(),
        updated_at: row.get::<Option<i64>>(10).ok().flatten(),
    })
}
