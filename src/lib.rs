//! Closetly Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - stylist: Weather-driven outfit recommendation
//! - commands: Thin async handlers for the UI shell
//!
//! The outfit canvas engine lives in the `outfit-canvas` crate.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

pub mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod stylist;

pub use config::{AppConfig, RationaleConfig, ThemePreference};
pub use outfit_canvas;

use domain::DomainResult;
use repository::{init_db, DbState, GarmentRepository, OutfitRepository};
use stylist::Stylist;

/// Application state shared across commands
pub struct AppState {
    pub config: AppConfig,
    pub db_state: DbState,
    pub garment_repo: GarmentRepository,
    pub outfit_repo: OutfitRepository,
    pub stylist: Stylist,
}

/// Composition root: open the database, run migrations, and wire the
/// repositories and the stylist from one explicit config object.
pub async fn init(config: AppConfig) -> DomainResult<AppState> {
    logging::init("info");

    let db_state = init_db(&config.db_path).await?;
    let conn = Arc::new(Mutex::new(db_state.get_connection().await?));

    info!(db = %config.db_path.display(), theme = ?config.theme, "closetly initialized");

    Ok(AppState {
        garment_repo: GarmentRepository::new(Arc::clone(&conn)),
        outfit_repo: OutfitRepository::new(conn),
        stylist: Stylist::new(&config.rationale),
        db_state,
        config,
    })
}
