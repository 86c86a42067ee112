//! Database Connection and Setup
//!
//! Manages the local SQLite database connection and migrations.

use std::path::Path;

use libsql::{Builder, Connection, Database};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
pub struct DbState {
    db: Mutex<Option<Database>>,
    conn: Mutex<Option<Connection>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            db: Mutex::new(None),
            conn: Mutex::new(None),
        }
    }

    /// Get a connection, failing if the database was never initialized
    pub async fn get_connection(&self) -> DomainResult<Connection> {
        let guard = self.conn.lock().await;
        if let Some(conn) = &*guard {
            return Ok(conn.clone());
        }
        Err(DomainError::Internal("Database not initialized".to_string()))
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize database with path (`:memory:` for tests)
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| DomainError::InvalidInput("Invalid DB path".to_string()))?;

    let db = Builder::new_local(db_path_str)
        .build()
        .await
        .map_err(|e| DomainError::Internal(format!("Failed to build db: {}", e)))?;

    let conn = db
        .connect()
        .map_err(|e| DomainError::Internal(format!("Failed to connect: {}", e)))?;

    run_migrations(&conn).await?;

    let state = DbState::new();
    *state.db.lock().await = Some(db);
    *state.conn.lock().await = Some(conn);

    Ok(state)
}

/// Check if a column exists in a table
async fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    if let Ok(mut rows) = conn.query(&query, ()).await {
        while let Ok(Some(row)) = rows.next().await {
            if let Ok(name) = row.get::<String>(1) {
                if name == column {
                    return true;
                }
            }
        }
    }
    false
}

/// Run database migrations
async fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // Wardrobe catalog
    conn.execute(
        "CREATE TABLE IF NOT EXISTS garments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT '',
            season TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT '',
            image_ref TEXT,
            created_at INTEGER DEFAULT (strftime('%s', 'now')),
            updated_at INTEGER DEFAULT (strftime('%s', 'now'))
        )",
        (),
    )
    .await
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Outfits; placements ride along as a JSON column since they are only
    // ever read and written as a whole draft
    conn.execute(
        "CREATE TABLE IF NOT EXISTS outfits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            occasion TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            items TEXT NOT NULL DEFAULT '[]',
            favorite INTEGER NOT NULL DEFAULT 0,
            worn_count INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER DEFAULT (strftime('%s', 'now')),
            updated_at INTEGER DEFAULT (strftime('%s', 'now'))
        )",
        (),
    )
    .await
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Scheduling columns arrived after the initial outfits table
    if !column_exists(conn, "outfits", "schedule").await {
        conn.execute("ALTER TABLE outfits ADD COLUMN schedule TEXT", ())
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to add schedule: {}", e)))?;
    }

    if !column_exists(conn, "outfits", "last_worn_on").await {
        conn.execute("ALTER TABLE outfits ADD COLUMN last_worn_on TEXT", ())
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to add last_worn_on: {}", e)))?;
    }

    // Category browsing hits this constantly
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_garments_category ON garments(category)",
        (),
    )
    .await
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
