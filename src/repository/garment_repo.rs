//! Garment Repository
//!
//! SQLite-backed implementation of Repository<Garment> plus category
//! browsing for the wardrobe screens.

use std::sync::Arc;

use async_trait::async_trait;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Garment};

/// SQLite implementation of the garment catalog
pub struct GarmentRepository {
    conn: Arc<Mutex<Connection>>,
}

const GARMENT_COLUMNS: &str = "id, name, category, season, color, image_ref, \
     CAST(created_at AS INTEGER) as created_at, CAST(updated_at AS INTEGER) as updated_at";

impl GarmentRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// List garments under a category label (exact match, newest last)
    pub async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Garment>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE category = ? ORDER BY id ASC"),
                libsql::params![category],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut garments = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            garments.push(row_to_garment(&row)?);
        }
        Ok(garments)
    }
}

#[async_trait]
impl Repository<Garment> for GarmentRepository {
    async fn create(&self, entity: &Garment) -> DomainResult<Garment> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO garments (name, category, season, color, image_ref) VALUES (?, ?, ?, ?, ?)",
            libsql::params![
                entity.name.clone(),
                entity.category.clone(),
                entity.season.clone(),
                entity.color.clone(),
                entity.image_ref.clone()
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = entity.clone();
        created.id = id;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Garment>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!("SELECT {GARMENT_COLUMNS} FROM garments WHERE id = ?"),
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_garment(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Garment>> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(
                &format!("SELECT {GARMENT_COLUMNS} FROM garments ORDER BY category ASC, id ASC"),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut garments = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            garments.push(row_to_garment(&row)?);
        }
        Ok(garments)
    }

    async fn update(&self, entity: &Garment) -> DomainResult<Garment> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE garments SET name = ?, category = ?, season = ?, color = ?, image_ref = ?, \
             updated_at = strftime('%s', 'now') WHERE id = ?",
            libsql::params![
                entity.name.clone(),
                entity.category.clone(),
                entity.season.clone(),
                entity.color.clone(),
                entity.image_ref.clone(),
                entity.id
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM garments WHERE id = ?", libsql::params![id])
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Convert a database row to Garment
fn row_to_garment(row: &libsql::Row) -> DomainResult<Garment> {
    Ok(Garment {
        id: row
            .get::<u32>(0)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        name: row
            .get::<String>(1)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        category: row.get::<String>(2).unwrap_or_default(),
        season: row.get::<String>(3).unwrap_or_default(),
        color: row.get::<String>(4).unwrap_or_default(),
        image_ref: row.get::<Option<String>>(5).ok().flatten(),
        created_at: row.get::<Option<i64>>(6).ok().flatten(),
        updated_at: row.get::<Option<i64>>(7).ok().flatten(),
    })
}
